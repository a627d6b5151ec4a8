//! League Pack Loading
//!
//! YAML 파일에서 리그 팩(팀 목록 + 번역 사전)을 로드하고 캐싱합니다.
//!
//! ## 사용법
//!
//! ```rust
//! use roster_core::data::leagues::get_league_pack;
//!
//! let pack = get_league_pack("j1-league").unwrap();
//! println!("{} teams in {}", pack.teams.len(), pack.name);
//! ```

use serde::Deserialize;
use std::sync::OnceLock;

use crate::error::{Result, RosterError};
use crate::models::TeamInfo;
use crate::translate::TranslationTable;

// =============================================================================
// Embedded YAML Data
// =============================================================================

/// J1 League 팩 YAML 데이터 (컴파일 타임 임베딩)
pub const J1_LEAGUE_YAML: &str = include_str!("../../../../data/leagues/j1-league.yaml");

/// Saudi Pro League 팩 YAML 데이터 (컴파일 타임 임베딩)
pub const SAUDI_PRO_LEAGUE_YAML: &str =
    include_str!("../../../../data/leagues/saudi-pro-league.yaml");

/// Eredivisie 팩 YAML 데이터 (컴파일 타임 임베딩)
pub const EREDIVISIE_YAML: &str = include_str!("../../../../data/leagues/eredivisie.yaml");

// =============================================================================
// Pack Schema
// =============================================================================

/// One league's teams and translation tables
#[derive(Debug, Clone, Deserialize)]
pub struct LeaguePack {
    /// CLI에서 쓰는 슬러그 ("j1-league")
    pub league: String,
    /// English display name ("J1 League")
    pub name: String,
    /// Korean display name ("J1 리그")
    pub korean_name: String,
    pub teams: Vec<TeamInfo>,
    pub translations: TranslationTable,
}

impl LeaguePack {
    /// Load a pack from YAML text (for external custom packs)
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Team info by id
    pub fn team(&self, team_id: i64) -> Option<&TeamInfo> {
        self.teams.iter().find(|t| t.team_id == team_id)
    }
}

// =============================================================================
// Static Caching
// =============================================================================

static J1_LEAGUE: OnceLock<LeaguePack> = OnceLock::new();
static SAUDI_PRO_LEAGUE: OnceLock<LeaguePack> = OnceLock::new();
static EREDIVISIE: OnceLock<LeaguePack> = OnceLock::new();

// =============================================================================
// Public API
// =============================================================================

/// J1 League 팩 로드
///
/// 최초 호출 시 YAML 파싱, 이후 캐시된 데이터 반환.
///
/// # Panics
///
/// YAML 파싱에 실패하면 패닉합니다 (컴파일 타임에 임베딩된 데이터이므로
/// 정상적인 빌드에서는 발생하지 않음).
pub fn get_j1_league_pack() -> &'static LeaguePack {
    J1_LEAGUE.get_or_init(|| {
        serde_yaml::from_str(J1_LEAGUE_YAML).expect("Failed to parse j1-league.yaml")
    })
}

/// Saudi Pro League 팩 로드
///
/// # Panics
///
/// YAML 파싱에 실패하면 패닉합니다.
pub fn get_saudi_pro_league_pack() -> &'static LeaguePack {
    SAUDI_PRO_LEAGUE.get_or_init(|| {
        serde_yaml::from_str(SAUDI_PRO_LEAGUE_YAML).expect("Failed to parse saudi-pro-league.yaml")
    })
}

/// Eredivisie 팩 로드
///
/// # Panics
///
/// YAML 파싱에 실패하면 패닉합니다.
pub fn get_eredivisie_pack() -> &'static LeaguePack {
    EREDIVISIE.get_or_init(|| {
        serde_yaml::from_str(EREDIVISIE_YAML).expect("Failed to parse eredivisie.yaml")
    })
}

/// 임베딩된 리그 슬러그 목록
pub fn available_leagues() -> &'static [&'static str] {
    &["eredivisie", "j1-league", "saudi-pro-league"]
}

/// 슬러그로 임베딩된 팩 조회
pub fn get_league_pack(slug: &str) -> Result<&'static LeaguePack> {
    match slug {
        "j1-league" => Ok(get_j1_league_pack()),
        "saudi-pro-league" => Ok(get_saudi_pro_league_pack()),
        "eredivisie" => Ok(get_eredivisie_pack()),
        _ => Err(RosterError::UnknownLeague {
            slug: slug.to_string(),
            available: available_leagues().join(", "),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_j1_pack() {
        let pack = get_j1_league_pack();
        assert_eq!(pack.league, "j1-league");
        assert_eq!(pack.name, "J1 League");
        assert_eq!(pack.korean_name, "J1 리그");
        assert_eq!(pack.teams.len(), 20);
        assert_eq!(
            pack.translations.exact.get("Jung Sung-Ryong").map(String::as_str),
            Some("정성룡")
        );
        assert_eq!(
            pack.translations.surnames.get("Tanaka").map(String::as_str),
            Some("타나카")
        );
        assert!(!pack.translations.given_names.is_empty());
    }

    #[test]
    fn test_load_saudi_pack() {
        let pack = get_saudi_pro_league_pack();
        assert_eq!(pack.league, "saudi-pro-league");
        assert_eq!(pack.teams.len(), 18);
        assert_eq!(
            pack.translations.exact.get("Cristiano Ronaldo").map(String::as_str),
            Some("크리스티아누 호날두")
        );
        assert_eq!(
            pack.translations.prefixes.get("Al-").map(String::as_str),
            Some("알")
        );
        assert!(!pack.translations.tokens.is_empty());
    }

    #[test]
    fn test_load_eredivisie_pack() {
        let pack = get_eredivisie_pack();
        assert_eq!(pack.league, "eredivisie");
        assert_eq!(pack.teams.len(), 18);
        // exact-only pack: no structural tables
        assert!(pack.translations.surnames.is_empty());
        assert!(pack.translations.prefixes.is_empty());
        assert!(pack.translations.tokens.is_empty());
        assert!(!pack.translations.exact.is_empty());
    }

    #[test]
    fn test_team_lookup() {
        let pack = get_saudi_pro_league_pack();
        let team = pack.team(2934).unwrap();
        assert_eq!(team.name, "Al-Nassr");
        assert_eq!(team.korean_name, "알 나스르");
        assert!(pack.team(1).is_none());
    }

    #[test]
    fn test_get_league_pack_by_slug() {
        assert!(get_league_pack("j1-league").is_ok());
        assert!(get_league_pack("saudi-pro-league").is_ok());
        assert!(get_league_pack("eredivisie").is_ok());
    }

    #[test]
    fn test_unknown_league_lists_available() {
        let err = get_league_pack("premier-league").unwrap_err();
        match err {
            RosterError::UnknownLeague { slug, available } => {
                assert_eq!(slug, "premier-league");
                assert!(available.contains("j1-league"));
                assert!(available.contains("saudi-pro-league"));
                assert!(available.contains("eredivisie"));
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_yaml_files_valid() {
        // Verify all YAML files can be read (compilation test)
        assert!(!J1_LEAGUE_YAML.is_empty());
        assert!(!SAUDI_PRO_LEAGUE_YAML.is_empty());
        assert!(!EREDIVISIE_YAML.is_empty());
    }

    #[test]
    fn test_custom_pack_from_yaml_str() {
        let yaml = r#"
league: test-league
name: Test League
korean_name: 테스트 리그
teams:
  - team_id: 1
    name: Test FC
    korean_name: 테스트 FC
translations:
  exact:
    "Test Player": "테스트 선수"
"#;
        let pack = LeaguePack::from_yaml_str(yaml).unwrap();
        assert_eq!(pack.teams.len(), 1);
        assert_eq!(
            pack.translations.exact.get("Test Player").map(String::as_str),
            Some("테스트 선수")
        );
    }

    #[test]
    fn test_malformed_pack_is_pack_error() {
        let result = LeaguePack::from_yaml_str("league: [broken");
        assert!(matches!(result, Err(RosterError::Pack(_))));
    }
}
