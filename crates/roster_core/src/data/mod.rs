//! 임베디드 데이터 모듈
//!
//! 바이너리에 임베딩된 리그 팩을 제공합니다.
//! - League packs (팀 목록 + 번역 사전)

pub mod leagues;

pub use leagues::{
    available_leagues, get_eredivisie_pack, get_j1_league_pack, get_league_pack,
    get_saudi_pro_league_pack, LeaguePack,
    // Raw YAML data
    EREDIVISIE_YAML, J1_LEAGUE_YAML, SAUDI_PRO_LEAGUE_YAML,
};
