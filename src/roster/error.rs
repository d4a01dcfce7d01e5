use thiserror::Error;

#[derive(Error, Debug)]
pub enum RosterError {
    #[error("Student not found: {0}")]
    StudentNotFound(u32),

    #[error("Student id already in use: {0}")]
    DuplicateId(u32),

    #[error("No free student ids left")]
    IdSpaceExhausted,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed record on line {line}: {reason}")]
    Parse { line: usize, reason: String },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Api Error: {0}")]
    Api(String),
}

pub type Result<T> = std::result::Result<T, RosterError>;
