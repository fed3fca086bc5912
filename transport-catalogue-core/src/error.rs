use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Stop is already registered: {0}")]
    DuplicateStop(String),
    #[error("Line is already registered: {0}")]
    DuplicateLine(String),
    #[error("Unknown stop: {0}")]
    UnknownStop(String),
    #[error("Line has no stops: {0}")]
    EmptyLine(String),
    #[error("Invalid routing settings: {0}")]
    InvalidSettings(String),
    #[error("Invalid data: {0}")]
    InvalidData(String),
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}
