//! Error types for the MLB graph CLI

use thiserror::Error;

pub type Result<T> = std::result::Result<T, MlbError>;

#[derive(Error, Debug)]
pub enum MlbError {
    #[error("Neo4j request failed: {0}")]
    Neo4j(#[from] neo4rs::Error),

    #[error("Failed to decode record: {0}")]
    Decode(#[from] neo4rs::DeError),

    #[error("JSON parsing failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse number: {0}")]
    InvalidNumber(#[from] std::num::ParseIntError),

    #[error("Invalid year window: start {start} is after end {end}")]
    InvalidYearWindow { start: i64, end: i64 },

    #[error("Config error: {message}")]
    Config { message: String },
}
