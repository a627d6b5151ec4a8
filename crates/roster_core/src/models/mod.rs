pub mod mapping;
pub mod player;
pub mod team;

pub use mapping::MappingFile;
pub use player::{PlayerRecord, RawPlayerRow};
pub use team::{TeamInfo, TeamRoster};
