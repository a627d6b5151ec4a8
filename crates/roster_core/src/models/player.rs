use serde::{Deserialize, Serialize};

/// Raw player row as it comes out of a source adapter
///
/// Mirrors the `football_players` table columns we care about.
/// Optional columns stay optional all the way to the rendered file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawPlayerRow {
    pub id: i64,
    pub name: String,
    pub team_id: i64,
    #[serde(default)]
    pub position: Option<String>,
    #[serde(default)]
    pub number: Option<i64>,
    #[serde(default)]
    pub age: Option<i64>,
}

/// One mapping record, equivalent to one object literal line in the
/// generated TypeScript file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerRecord {
    pub id: i64,
    pub name: String,
    /// Korean display name; rendered as `null` when absent
    pub korean_name: Option<String>,
    pub team_id: i64,
    pub position: Option<String>,
    pub number: Option<i64>,
    pub age: Option<i64>,
}

impl PlayerRecord {
    /// Build a record from a raw row, translation still pending
    pub fn from_row(row: RawPlayerRow) -> Self {
        Self {
            id: row.id,
            name: row.name,
            korean_name: None,
            team_id: row.team_id,
            position: row.position,
            number: row.number,
            age: row.age,
        }
    }

    /// Whether the Korean name looks hand-curated
    ///
    /// A korean_name equal to the romanized name is what the identity
    /// fallback writes, so it does not count as curated.
    pub fn has_curated_name(&self) -> bool {
        match &self.korean_name {
            Some(k) => !k.is_empty() && k != &self.name,
            None => false,
        }
    }
}
