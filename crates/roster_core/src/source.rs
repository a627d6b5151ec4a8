//! Player row sources
//!
//! 원시 선수 행 공급자. 덤프 JSON 파일 또는 메모리 내 테이블에서
//! 팀 단위로 행을 꺼내 온다. 운영 쿼리와 같은 정렬(등번호 오름차순,
//! null은 뒤로, 그다음 이름순)을 따른다.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fs;
use std::path::Path;

use crate::error::Result;
use crate::models::RawPlayerRow;

/// Supplies ordered raw player rows, one team at a time
pub trait PlayerSource {
    /// Rows for `team_id` in final render order; unknown teams yield
    /// an empty vec, not an error
    fn fetch(&self, team_id: i64) -> Result<Vec<RawPlayerRow>>;
}

/// One entry of a league dump file
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TeamRows {
    pub team_id: i64,
    pub players: Vec<RawPlayerRow>,
}

/// Source backed by a league dump JSON file
///
/// Dump format: ordered array of `{ "team_id": .., "players": [..] }`.
/// Row order inside each team is preserved as-is; dumps are written
/// pre-sorted by the export query.
pub struct JsonFileSource {
    teams: FxHashMap<i64, Vec<RawPlayerRow>>,
}

impl JsonFileSource {
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }

    pub fn from_json_str(text: &str) -> Result<Self> {
        let entries: Vec<TeamRows> = serde_json::from_str(text)?;
        let mut teams: FxHashMap<i64, Vec<RawPlayerRow>> = FxHashMap::default();
        for entry in entries {
            teams.entry(entry.team_id).or_default().extend(entry.players);
        }
        log::debug!("loaded dump with {} teams", teams.len());
        Ok(Self { teams })
    }

    pub fn team_count(&self) -> usize {
        self.teams.len()
    }
}

impl PlayerSource for JsonFileSource {
    fn fetch(&self, team_id: i64) -> Result<Vec<RawPlayerRow>> {
        Ok(self.teams.get(&team_id).cloned().unwrap_or_default())
    }
}

/// In-memory source for tests and embedded data tables
///
/// Applies the managed-table ordering on fetch, so unsorted rows are
/// fine here.
pub struct InlineSource {
    rows: Vec<RawPlayerRow>,
}

impl InlineSource {
    pub fn new(rows: Vec<RawPlayerRow>) -> Self {
        Self { rows }
    }
}

impl PlayerSource for InlineSource {
    fn fetch(&self, team_id: i64) -> Result<Vec<RawPlayerRow>> {
        let mut rows: Vec<RawPlayerRow> = self
            .rows
            .iter()
            .filter(|row| row.team_id == team_id)
            .cloned()
            .collect();
        sort_rows(&mut rows);
        Ok(rows)
    }
}

/// Squad number ascending with nulls last, then name
pub fn sort_rows(rows: &mut [RawPlayerRow]) {
    rows.sort_by(|a, b| match (&a.number, &b.number) {
        (Some(x), Some(y)) => x.cmp(y).then_with(|| a.name.cmp(&b.name)),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => a.name.cmp(&b.name),
    });
}
