use serde::{Deserialize, Serialize};

use super::PlayerRecord;

/// Team identity as carried by a league pack
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamInfo {
    pub team_id: i64,
    /// English display name ("Yokohama F. Marinos")
    pub name: String,
    /// Korean display name ("요코하마 F. 마리노스")
    pub korean_name: String,
}

impl TeamInfo {
    /// Symbol-safe identifier derived from the English name
    ///
    /// "Shimizu S-pulse" -> "SHIMIZU_S_PULSE"
    pub fn identifier(&self) -> String {
        derive_identifier(&self.name)
    }

    /// Name of the generated TypeScript constant for this team
    pub fn const_name(&self) -> String {
        format!("{}_PLAYERS", self.identifier())
    }
}

/// A team together with its translated player records, in render order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamRoster {
    pub team: TeamInfo,
    pub players: Vec<PlayerRecord>,
}

impl TeamRoster {
    pub fn new(team: TeamInfo) -> Self {
        Self {
            team,
            players: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }
}

/// Uppercase ASCII letters and digits pass through, every other run of
/// characters collapses to a single underscore
pub fn derive_identifier(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    for ch in name.chars() {
        if ch.is_ascii_alphanumeric() {
            out.push(ch.to_ascii_uppercase());
        } else if !out.is_empty() && !out.ends_with('_') {
            out.push('_');
        }
    }
    while out.ends_with('_') {
        out.pop();
    }
    out
}
