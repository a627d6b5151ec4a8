// crates/roster_core/src/roundtrip_contracts_test.rs

#[cfg(test)]
mod round_trip_gates {
    use crate::emit::render_mapping;
    use crate::models::{MappingFile, PlayerRecord, TeamInfo, TeamRoster};
    use crate::parse::parse_mapping;

    fn player(id: i64, name: &str, korean: Option<&str>, team_id: i64) -> PlayerRecord {
        PlayerRecord {
            id,
            name: name.to_string(),
            korean_name: korean.map(str::to_string),
            team_id,
            position: Some("MF".to_string()),
            number: Some(id * 3),
            age: Some(24),
        }
    }

    fn sample_doc() -> MappingFile {
        let mut alpha = TeamRoster::new(TeamInfo {
            team_id: 100,
            name: "Alpha United".to_string(),
            korean_name: "알파 유나이티드".to_string(),
        });
        alpha.players.push(player(1, "Kim Min-Jae", Some("김민재"), 100));
        alpha.players.push(PlayerRecord {
            id: 2,
            name: "No Data".to_string(),
            korean_name: None,
            team_id: 100,
            position: None,
            number: None,
            age: None,
        });

        let mut beta = TeamRoster::new(TeamInfo {
            team_id: 200,
            name: "Beta City".to_string(),
            korean_name: "베타 시티".to_string(),
        });
        beta.players.push(player(3, "Tanaka K.", Some("타나카 K."), 200));

        MappingFile {
            league_name: "Test League".to_string(),
            league_korean_name: "테스트 리그".to_string(),
            teams: vec![alpha, beta],
        }
    }

    // ============================================
    // RENDER_PARSE_IDENTITY
    // parse(render(doc)) must reproduce the document exactly
    // ============================================

    #[test]
    fn render_parse_identity_on_plain_document() {
        let doc = sample_doc();
        let parsed = parse_mapping(&render_mapping(&doc)).unwrap();
        assert_eq!(parsed, doc);
    }

    #[test]
    fn render_parse_identity_survives_escaped_strings() {
        let mut doc = sample_doc();
        doc.teams[0].players.push(PlayerRecord {
            id: 9,
            name: r#"O"Hara \ Jones"#.to_string(),
            korean_name: Some(r#"오"하라 \ 존스"#.to_string()),
            team_id: 100,
            position: Some(r#"MF "wide""#.to_string()),
            number: Some(7),
            age: Some(30),
        });

        let text = render_mapping(&doc);
        let parsed = parse_mapping(&text).unwrap();
        assert_eq!(parsed, doc);
        assert_eq!(render_mapping(&parsed), text);
    }

    #[test]
    fn render_parse_identity_with_null_heavy_rows() {
        let mut doc = sample_doc();
        for p in &mut doc.teams[1].players {
            p.korean_name = None;
            p.position = None;
            p.number = None;
            p.age = None;
        }
        let parsed = parse_mapping(&render_mapping(&doc)).unwrap();
        assert_eq!(parsed, doc);
    }

    // ============================================
    // PARSE_RENDER_IDENTITY
    // Any text the parser accepts must re-render byte-identical
    // ============================================

    #[test]
    fn parse_render_identity_on_rendered_text() {
        let text = render_mapping(&sample_doc());
        let round_tripped = render_mapping(&parse_mapping(&text).unwrap());
        assert_eq!(round_tripped, text);
    }

    #[test]
    fn parse_render_identity_on_handwritten_text() {
        let text = "import { PlayerMapping } from './index';\n\
                    \n\
                    // Test League (테스트 리그) Player Mappings\n\
                    // Total: 1 players across 1 teams\n\
                    \n\
                    // Alpha United (알파 유나이티드) - Team ID: 100 - 1명\n\
                    export const ALPHA_UNITED_PLAYERS: PlayerMapping[] = [\n\
                    \x20 { id: 1, name: \"Kim Min-Jae\", korean_name: \"김민재\", team_id: 100, position: \"DF\", number: 3, age: 28 },\n\
                    ];\n\
                    \n\
                    // 테스트 리그 전체 선수 통합\n\
                    export const TEST_LEAGUE_PLAYERS: PlayerMapping[] = [\n\
                    \x20 ...ALPHA_UNITED_PLAYERS,\n\
                    ];\n";

        let doc = parse_mapping(text).unwrap();
        assert_eq!(render_mapping(&doc), text);
    }

    // ============================================
    // EMPTY_TEAM_SKIPPED
    // Empty rosters never reach the output, so they cannot survive
    // a parse → render cycle either
    // ============================================

    #[test]
    fn empty_roster_renders_same_as_absent_roster() {
        let mut with_empty = sample_doc();
        with_empty.teams.insert(
            1,
            TeamRoster::new(TeamInfo {
                team_id: 150,
                name: "Ghost FC".to_string(),
                korean_name: "고스트 FC".to_string(),
            }),
        );

        let without = sample_doc();
        assert_eq!(render_mapping(&with_empty), render_mapping(&without));

        let parsed = parse_mapping(&render_mapping(&with_empty)).unwrap();
        assert_eq!(parsed, without);
    }

    // ============================================
    // RENDER_DETERMINISM
    // Rendering must be a pure function of the document
    // ============================================

    #[test]
    fn render_is_deterministic_across_calls() {
        let doc = sample_doc();
        let first = render_mapping(&doc);
        for _ in 0..5 {
            assert_eq!(render_mapping(&doc), first);
        }
    }
}
