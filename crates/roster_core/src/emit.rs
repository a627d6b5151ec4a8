//! TypeScript mapping file renderer
//!
//! MappingFile → `<league>.ts` 텍스트. 출력은 바이트 단위로 결정적이다:
//! 같은 문서를 두 번 렌더링하면 같은 바이트가 나오고, 타임스탬프 같은
//! 비결정 요소는 들어가지 않는다.
//!
//! 파일 형태:
//!
//! ```text
//! import { PlayerMapping } from './index';
//!
//! // Saudi Pro League (사우디 프로 리그) Player Mappings
//! // Total: 2 players across 1 teams
//!
//! // Al-Nassr (알 나스르) - Team ID: 2934 - 2명
//! export const AL_NASSR_PLAYERS: PlayerMapping[] = [
//!   { id: 1, name: "Cristiano Ronaldo", korean_name: "크리스티아누 호날두", team_id: 2934, position: "FW", number: 7, age: 40 },
//! ];
//!
//! // 사우디 프로 리그 전체 선수 통합
//! export const SAUDI_PRO_LEAGUE_PLAYERS: PlayerMapping[] = [
//!   ...AL_NASSR_PLAYERS,
//! ];
//! ```

use crate::models::team::derive_identifier;
use crate::models::{MappingFile, PlayerRecord};

/// Fixed first line of every mapping file
pub const IMPORT_HEADER: &str = "import { PlayerMapping } from './index';";

/// Render a mapping document to TypeScript source
///
/// Teams with no players are skipped entirely: no constant, no spread
/// entry, and they do not count toward the totals line.
pub fn render_mapping(doc: &MappingFile) -> String {
    let mut out = String::new();

    out.push_str(IMPORT_HEADER);
    out.push_str("\n\n");

    out.push_str(&format!(
        "// {} ({}) Player Mappings\n",
        doc.league_name, doc.league_korean_name
    ));
    out.push_str(&format!(
        "// Total: {} players across {} teams\n\n",
        doc.total_players(),
        doc.rendered_team_count()
    ));

    let mut const_names = Vec::new();

    for roster in &doc.teams {
        if roster.is_empty() {
            continue;
        }
        let const_name = roster.team.const_name();

        out.push_str(&format!(
            "// {} ({}) - Team ID: {} - {}명\n",
            roster.team.name,
            roster.team.korean_name,
            roster.team.team_id,
            roster.players.len()
        ));
        out.push_str(&format!(
            "export const {}: PlayerMapping[] = [\n",
            const_name
        ));
        for record in &roster.players {
            out.push_str(&render_player(record));
        }
        out.push_str("];\n\n");

        const_names.push(const_name);
    }

    out.push_str(&format!("// {} 전체 선수 통합\n", doc.league_korean_name));
    out.push_str(&format!(
        "export const {}_PLAYERS: PlayerMapping[] = [\n",
        derive_identifier(&doc.league_name)
    ));
    for const_name in &const_names {
        out.push_str(&format!("  ...{},\n", const_name));
    }
    out.push_str("];\n");

    out
}

fn render_player(record: &PlayerRecord) -> String {
    format!(
        "  {{ id: {}, name: {}, korean_name: {}, team_id: {}, position: {}, number: {}, age: {} }},\n",
        record.id,
        quoted(&record.name),
        opt_quoted(&record.korean_name),
        record.team_id,
        opt_quoted(&record.position),
        opt_int(&record.number),
        opt_int(&record.age),
    )
}

fn quoted(s: &str) -> String {
    format!("\"{}\"", escape_ts(s))
}

fn opt_quoted(v: &Option<String>) -> String {
    match v {
        Some(s) => quoted(s),
        None => "null".to_string(),
    }
}

fn opt_int(v: &Option<i64>) -> String {
    match v {
        Some(n) => n.to_string(),
        None => "null".to_string(),
    }
}

/// Backslash and double quote are the only characters that need
/// escaping inside the double-quoted TS string literals we emit
pub(crate) fn escape_ts(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            _ => out.push(ch),
        }
    }
    out
}
