use chrono::{DateTime, Utc};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RequestError {
    #[error("invalid callsign: {0:?}")]
    InvalidCallsign(String),
    #[error("channel should be an integer between 0 and 599, got {0}")]
    InvalidChannel(u32),
    #[error("slot minute should be between 0 and 9, got {0}")]
    InvalidMinute(u32),
    #[error("end {end} is before start {start}")]
    InvertedRange {
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    },
}
