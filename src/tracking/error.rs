use thiserror::Error;

use crate::query::{ImportError, QueryError};

#[derive(Debug, Error)]
pub enum TrackError {
    #[error("query failed: {0}")]
    Query(#[from] QueryError),

    #[error("import failed: {0}")]
    Import(#[from] ImportError),
}
