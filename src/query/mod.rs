pub mod builder;
mod client;
mod error;
mod response;

pub use client::{QueryService, WsprLiveClient};
pub use error::{ImportError, QueryError};
pub(crate) use response::parse_row_time;
pub use response::{deserialize_u64_lenient, parse_row, QueryResponse};
