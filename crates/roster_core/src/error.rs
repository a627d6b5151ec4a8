use thiserror::Error;

#[derive(Error, Debug)]
pub enum RosterError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Pack data error: {0}")]
    Pack(#[from] serde_yaml::Error),

    #[error("Parse error at line {line}: {message}")]
    Parse { line: usize, message: String },

    #[error("Unknown league: {slug} (available: {available})")]
    UnknownLeague { slug: String, available: String },

    #[error("Source error: {message}")]
    Source { message: String },
}

impl RosterError {
    /// Parse 에러 생성 헬퍼 (라인 번호는 1부터)
    pub fn parse(line: usize, message: impl Into<String>) -> Self {
        RosterError::Parse {
            line,
            message: message.into(),
        }
    }

    pub fn is_recoverable(&self) -> bool {
        match self {
            RosterError::Io(_) => true,
            RosterError::Source { .. } => true,
            RosterError::Json(_) => false,
            RosterError::Pack(_) => false,
            RosterError::Parse { .. } => false,
            RosterError::UnknownLeague { .. } => false,
        }
    }
}

pub type Result<T> = std::result::Result<T, RosterError>;
