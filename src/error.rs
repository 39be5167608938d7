//! Error types for the OPFL scorer

use thiserror::Error;

#[cfg(test)]
mod tests;

pub type Result<T> = std::result::Result<T, OpflError>;

#[derive(Error, Debug)]
pub enum OpflError {
    #[error("JSON parsing failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse number: {0}")]
    InvalidNumber(#[from] std::num::ParseIntError),

    #[error("Malformed roster entry: {reason}")]
    MalformedEntry { reason: String },

    #[error("Invalid position: {position}")]
    InvalidPosition { position: String },

    #[error("Invalid team code: {code:?}")]
    InvalidTeamCode { code: String },

    #[error("Fuzzy match threshold must be within [0, 1], got {value}")]
    InvalidThreshold { value: f64 },

    #[error("Invalid configuration: {message}")]
    InvalidConfig { message: String },

    #[error("Missing input: {what}")]
    MissingInput { what: String },
}
