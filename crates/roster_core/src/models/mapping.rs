use serde::{Deserialize, Serialize};

use super::TeamRoster;

/// Parsed or about-to-be-rendered mapping file
///
/// This is the document form of one `<league>.ts` player mapping file.
/// Rendering and parsing are exact inverses over this type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MappingFile {
    /// English league name ("Saudi Pro League")
    pub league_name: String,
    /// Korean league name ("사우디 프로 리그")
    pub league_korean_name: String,
    /// Teams in render order; empty rosters are skipped when rendering
    pub teams: Vec<TeamRoster>,
}

impl MappingFile {
    pub fn total_players(&self) -> usize {
        self.teams.iter().map(|t| t.players.len()).sum()
    }

    /// Teams that actually render (empty rosters are dropped)
    pub fn rendered_team_count(&self) -> usize {
        self.teams.iter().filter(|t| !t.is_empty()).count()
    }
}
