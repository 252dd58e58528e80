use thiserror::Error;

#[derive(Debug, Error)]
pub enum QueryError {
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("HTTP error {status}: {body}")]
    Status {
        status: reqwest::StatusCode,
        body: String,
    },
    #[error("database error: {0}")]
    Database(String),
    #[error("invalid response format")]
    InvalidResponse,
}

#[derive(Debug, Error)]
pub enum ImportError {
    #[error("row {row}: {source}")]
    Shape {
        row: usize,
        source: serde_json::Error,
    },
    #[error("row {row}: invalid timestamp {value:?}: {source}")]
    Timestamp {
        row: usize,
        value: String,
        source: chrono::ParseError,
    },
}
