//! # roster_core - Player Name Mapping Toolkit
//!
//! This library builds the Korean player-name mapping tables that ship
//! as TypeScript constants in the livescore frontend.
//!
//! ## Features
//! - Ordered translation strategies (exact → structural → token → identity)
//! - 100% deterministic rendering (same input = same bytes)
//! - Strict parser: parse → render round-trips exactly
//! - Embedded league packs (J1 League, Saudi Pro League, Eredivisie)

pub mod data;
pub mod emit;
pub mod error;
pub mod models;
pub mod parse;
pub mod source;
pub mod translate;

// Re-export main API
pub use data::leagues::{available_leagues, get_league_pack, LeaguePack};
pub use emit::render_mapping;
pub use error::{Result, RosterError};
pub use models::{MappingFile, PlayerRecord, RawPlayerRow, TeamInfo, TeamRoster};
pub use parse::parse_mapping;
pub use source::{sort_rows, InlineSource, JsonFileSource, PlayerSource, TeamRows};
pub use translate::{Strategy, Translation, TranslationTable, Translator};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const SCHEMA_VERSION: u8 = 1;

#[cfg(test)]
mod roundtrip_contracts_test;
