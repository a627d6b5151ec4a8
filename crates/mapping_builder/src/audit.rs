//! Mapping Audit CSV Export
//!
//! 매핑 파일의 번역 상태를 CSV로 내보내기 (수동 검수용)

use anyhow::{Context, Result};
use roster_core::{parse_mapping, LeaguePack, MappingFile, TranslationTable, Translator};
use serde::Serialize;
use std::fs;
use std::path::Path;

/// 감사 CSV의 한 행
#[derive(Debug, Clone, Serialize)]
pub struct AuditRow {
    pub team_id: i64,
    pub team: String,
    pub player_id: i64,
    pub name: String,
    pub korean_name: String,
    pub strategy: String,
}

/// 이름이 현재 어떤 전략으로 설명되는지 분류
///
/// 테이블을 그대로 다시 적용했을 때 현재 값이 재현되면 그 전략의
/// 이름을, 재현되지 않으면 "curated"를, 번역이 없으면 "unmatched"를
/// 돌려준다.
fn classify(translator: &Translator, name: &str, korean_name: Option<&str>) -> &'static str {
    let korean = match korean_name {
        Some(k) if !k.is_empty() && k != name => k,
        _ => return "unmatched",
    };

    let result = translator.translate(name);
    if result.text == korean {
        result.strategy.name()
    } else {
        "curated"
    }
}

/// 매핑 문서를 감사 CSV로 내보내기
///
/// # Arguments
///
/// * `doc` - 매핑 문서
/// * `table` - 분류에 사용할 번역 테이블
/// * `output` - 출력 CSV 파일 경로
///
/// # Returns
///
/// 기록한 행 수
pub fn export_audit(doc: &MappingFile, table: &TranslationTable, output: &Path) -> Result<u32> {
    let translator = Translator::new(table);
    let mut writer = csv::WriterBuilder::new()
        .from_path(output)
        .with_context(|| format!("Failed to create audit CSV: {}", output.display()))?;

    let mut rows = 0u32;
    for roster in &doc.teams {
        for player in &roster.players {
            writer.serialize(AuditRow {
                team_id: roster.team.team_id,
                team: roster.team.name.clone(),
                player_id: player.id,
                name: player.name.clone(),
                korean_name: player.korean_name.clone().unwrap_or_default(),
                strategy: classify(&translator, &player.name, player.korean_name.as_deref())
                    .to_string(),
            })?;
            rows += 1;
        }
    }

    writer.flush().context("Failed to flush audit CSV")?;
    Ok(rows)
}

/// 매핑 파일을 읽어 감사 CSV로 내보내기
pub fn audit_mapping_file(pack: &LeaguePack, file: &Path, output: &Path) -> Result<u32> {
    let text = fs::read_to_string(file)
        .with_context(|| format!("Failed to read mapping file: {}", file.display()))?;
    let doc = parse_mapping(&text).context("Failed to parse mapping file")?;
    export_audit(&doc, &pack.translations, output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use roster_core::{PlayerRecord, TeamInfo, TeamRoster};
    use tempfile::NamedTempFile;

    fn sample_table() -> TranslationTable {
        let mut table = TranslationTable::default();
        table
            .exact
            .insert("Kim Min-Jae".to_string(), "김민재".to_string());
        table
    }

    fn sample_doc() -> MappingFile {
        let mut roster = TeamRoster::new(TeamInfo {
            team_id: 100,
            name: "Alpha United".to_string(),
            korean_name: "알파 유나이티드".to_string(),
        });
        for (id, name, korean) in [
            (1, "Kim Min-Jae", Some("김민재")),
            (2, "Kim Min-Jae", Some("手修正")),
            (3, "Nobody Known", Some("Nobody Known")),
        ] {
            roster.players.push(PlayerRecord {
                id,
                name: name.to_string(),
                korean_name: korean.map(str::to_string),
                team_id: 100,
                position: Some("DF".to_string()),
                number: Some(id),
                age: None,
            });
        }

        MappingFile {
            league_name: "Test League".to_string(),
            league_korean_name: "테스트 리그".to_string(),
            teams: vec![roster],
        }
    }

    #[test]
    fn test_classify_strategies() {
        let table = sample_table();
        let translator = Translator::new(&table);

        assert_eq!(
            classify(&translator, "Kim Min-Jae", Some("김민재")),
            "exact"
        );
        assert_eq!(
            classify(&translator, "Kim Min-Jae", Some("手修正")),
            "curated"
        );
        assert_eq!(
            classify(&translator, "Nobody Known", Some("Nobody Known")),
            "unmatched"
        );
        assert_eq!(classify(&translator, "Nobody Known", None), "unmatched");
    }

    #[test]
    fn test_export_audit_writes_all_rows() -> Result<()> {
        let table = sample_table();
        let doc = sample_doc();

        let output = NamedTempFile::new()?;
        let rows = export_audit(&doc, &table, output.path())?;
        assert_eq!(rows, 3);

        let text = fs::read_to_string(output.path())?;
        let mut lines = text.lines();
        assert_eq!(
            lines.next(),
            Some("team_id,team,player_id,name,korean_name,strategy")
        );
        assert_eq!(
            lines.next(),
            Some("100,Alpha United,1,Kim Min-Jae,김민재,exact")
        );
        assert!(text.contains(",curated"));
        assert!(text.contains(",unmatched"));
        Ok(())
    }
}
