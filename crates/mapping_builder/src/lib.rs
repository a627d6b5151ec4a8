//! Mapping Builder Library
//!
//! 소스 로스터 JSON → 한글 이름 번역 → TypeScript 매핑 파일 생성
//! Generate / Retranslate / Audit pipeline

pub mod audit;

use anyhow::{Context, Result};
use roster_core::{
    parse_mapping, render_mapping, LeaguePack, MappingFile, PlayerRecord, PlayerSource, Strategy,
    TeamRoster, Translator,
};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::fs::{self, rename, File};
use std::io::Write;
use std::path::{Path, PathBuf};

// Re-export audit API
pub use audit::{audit_mapping_file, export_audit, AuditRow};

/// 매핑 파일 메타데이터
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MappingMetadata {
    /// 리그 슬러그 (예: "saudi-pro-league")
    pub league: String,
    /// 스키마 버전 (예: "v1")
    pub schema_version: String,
    /// 렌더링된 파일의 SHA256 체크섬 (hex 문자열)
    pub checksum: String,
    /// 생성 시각 (RFC3339 형식)
    pub created_at: String,
    /// 총 선수 수
    pub total_players: u32,
    /// 출력에 포함된 팀 수 (빈 로스터 제외)
    pub total_teams: u32,
    /// 번역을 찾지 못해 원문이 그대로 남은 선수 수
    pub unresolved: u32,
    /// 출력 파일 크기 (bytes)
    pub output_size: u64,
}

/// Name translation statistics
#[derive(Debug, Clone)]
pub struct TranslateStats {
    pub total: u32,
    pub exact: u32,
    pub structural: u32,
    pub token: u32,
    pub curated: u32,
    pub unmatched: Vec<String>,
}

impl TranslateStats {
    fn new() -> Self {
        Self {
            total: 0,
            exact: 0,
            structural: 0,
            token: 0,
            curated: 0,
            unmatched: Vec::new(),
        }
    }

    fn tally(&mut self, strategy: Strategy, name: &str) {
        match strategy {
            Strategy::Exact => self.exact += 1,
            Strategy::Structural => self.structural += 1,
            Strategy::Token => self.token += 1,
            Strategy::Identity => {
                // 번역 실패는 치명적이지 않음: 원문 유지 + 경고
                println!("Warning: No translation found for '{}'", name);
                self.unmatched.push(name.to_string());
            }
        }
    }
}

/// 소스 로스터를 리그 팩의 번역 테이블로 번역하여 매핑 문서 생성
///
/// 팩에 등록된 모든 팀을 소스에서 조회한다. 소스에 로스터가 없는 팀은
/// 빈 채로 남고 렌더링에서 제외된다.
///
/// # Arguments
///
/// * `pack` - 리그 팩 (팀 목록 + 번역 테이블)
/// * `source` - 선수 로스터 소스 어댑터
///
/// # Returns
///
/// 번역된 매핑 문서와 전략별 통계
pub fn translate_teams(
    pack: &LeaguePack,
    source: &dyn PlayerSource,
) -> Result<(MappingFile, TranslateStats)> {
    let translator = Translator::new(&pack.translations);
    let mut stats = TranslateStats::new();
    let mut teams = Vec::with_capacity(pack.teams.len());

    for team in &pack.teams {
        let rows = source
            .fetch(team.team_id)
            .with_context(|| format!("Failed to fetch roster for team {}", team.team_id))?;

        let mut roster = TeamRoster::new(team.clone());
        for row in rows {
            let mut record = PlayerRecord::from_row(row);
            stats.total += 1;

            let result = translator.translate(&record.name);
            stats.tally(result.strategy, &record.name);
            record.korean_name = Some(result.text);

            // 소스가 포지션을 비워둔 경우 표시용 기본값
            if record.position.is_none() {
                record.position = Some("Unknown".to_string());
            }

            roster.players.push(record);
        }
        teams.push(roster);
    }

    Ok((
        MappingFile {
            league_name: pack.name.clone(),
            league_korean_name: pack.korean_name.clone(),
            teams,
        },
        stats,
    ))
}

/// 소스 로스터에서 매핑 파일을 새로 생성
///
/// # Arguments
///
/// * `pack` - 리그 팩
/// * `source` - 선수 로스터 소스 어댑터
/// * `output` - 출력 TypeScript 파일 경로
/// * `schema_version` - 스키마 버전 문자열
///
/// # Returns
///
/// 생성된 파일의 메타데이터와 번역 통계
pub fn build_mapping_file(
    pack: &LeaguePack,
    source: &dyn PlayerSource,
    output: &Path,
    schema_version: &str,
) -> Result<(MappingMetadata, TranslateStats)> {
    // 1. 팀별 번역
    let (doc, stats) = translate_teams(pack, source)?;

    // 2. TypeScript 렌더링
    let rendered = render_mapping(&doc);

    // 3. 출력 파일 쓰기
    write_output(output, rendered.as_bytes())?;

    // 4. 메타데이터 생성
    let meta = make_metadata(pack, &doc, &rendered, schema_version, &stats);
    Ok((meta, stats))
}

/// 기존 매핑 파일을 제자리에서 다시 번역
///
/// 원본 내용을 `<path>.backup` 파일로 먼저 보존한 뒤 덮어쓴다.
/// 손으로 고친 한글 이름(원문과 다른 이름)은 `force`가 아니면 유지된다.
/// korean_name 외의 필드는 바이트 단위로 보존된다.
///
/// # Arguments
///
/// * `pack` - 리그 팩
/// * `file` - 다시 번역할 매핑 파일 경로
/// * `force` - 수동 수정된 이름도 덮어쓸지 여부
/// * `schema_version` - 스키마 버전 문자열
///
/// # Returns
///
/// 다시 쓴 파일의 메타데이터와 번역 통계
pub fn retranslate_mapping_file(
    pack: &LeaguePack,
    file: &Path,
    force: bool,
    schema_version: &str,
) -> Result<(MappingMetadata, TranslateStats)> {
    // 1. 기존 파일 읽기 + 파싱
    let original = fs::read_to_string(file)
        .with_context(|| format!("Failed to read mapping file: {}", file.display()))?;
    let mut doc = parse_mapping(&original).context("Failed to parse mapping file")?;

    if doc.league_name != pack.name {
        anyhow::bail!(
            "Mapping file is for league '{}', expected '{}'",
            doc.league_name,
            pack.name
        );
    }

    // 2. 덮어쓰기 전에 원본 백업
    fs::write(backup_path(file), &original)
        .with_context(|| format!("Failed to write backup for: {}", file.display()))?;

    // 3. korean_name만 갱신
    let translator = Translator::new(&pack.translations);
    let mut stats = TranslateStats::new();

    for roster in &mut doc.teams {
        for player in &mut roster.players {
            stats.total += 1;

            if !force && player.has_curated_name() {
                stats.curated += 1;
                continue;
            }

            let result = translator.translate(&player.name);
            stats.tally(result.strategy, &player.name);
            player.korean_name = Some(result.text);
        }
    }

    // 4. 다시 렌더링하여 덮어쓰기
    let rendered = render_mapping(&doc);
    write_output(file, rendered.as_bytes())?;

    let meta = make_metadata(pack, &doc, &rendered, schema_version, &stats);
    Ok((meta, stats))
}

/// 매핑 파일의 무결성 검증
///
/// 파일이 파싱되고, 다시 렌더링했을 때 바이트 단위로 같으며, 모든
/// 팀 ID가 리그 팩에 존재하면 유효하다.
///
/// # Arguments
///
/// * `pack` - 리그 팩
/// * `file` - 검증할 매핑 파일 경로
///
/// # Returns
///
/// 검증 통과 여부
pub fn verify_mapping_file(pack: &LeaguePack, file: &Path) -> Result<bool> {
    let text = fs::read_to_string(file)
        .with_context(|| format!("Failed to read mapping file: {}", file.display()))?;

    let doc = match parse_mapping(&text) {
        Ok(doc) => doc,
        Err(_) => return Ok(false),
    };

    if render_mapping(&doc) != text {
        return Ok(false);
    }

    Ok(doc
        .teams
        .iter()
        .all(|roster| pack.team(roster.team.team_id).is_some()))
}

/// `<path>.backup` 형태의 백업 경로
fn backup_path(path: &Path) -> PathBuf {
    let mut name = path.as_os_str().to_os_string();
    name.push(".backup");
    PathBuf::from(name)
}

fn make_metadata(
    pack: &LeaguePack,
    doc: &MappingFile,
    rendered: &str,
    schema_version: &str,
    stats: &TranslateStats,
) -> MappingMetadata {
    let mut hasher = Sha256::new();
    hasher.update(rendered.as_bytes());

    MappingMetadata {
        league: pack.league.clone(),
        schema_version: schema_version.to_string(),
        checksum: format!("{:x}", hasher.finalize()),
        created_at: chrono::Utc::now().to_rfc3339(),
        total_players: doc.total_players() as u32,
        total_teams: doc.rendered_team_count() as u32,
        unresolved: stats.unmatched.len() as u32,
        output_size: rendered.len() as u64,
    }
}

fn write_output(path: &Path, bytes: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create output directory: {}", parent.display()))?;
        }
    }

    // Atomic write: temp file, then rename
    let temp_path = path.with_extension("tmp");

    {
        let mut file = File::create(&temp_path)
            .with_context(|| format!("Failed to create temp file: {}", temp_path.display()))?;
        file.write_all(bytes)?;
        file.flush()?;
        file.sync_all()?;
    }

    rename(&temp_path, path)
        .with_context(|| format!("Failed to write output file: {}", path.display()))?;
    Ok(())
}
