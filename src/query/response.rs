use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

use super::{ImportError, QueryError};
use crate::window::parse_sql_time;

/// Body of a `FORMAT JSON`/`JSONCompact` response, or the exception the
/// database reported instead.
#[derive(Debug, Deserialize)]
pub struct QueryResponse {
    #[serde(default)]
    pub data: Option<Vec<Value>>,
    #[serde(default)]
    pub exception: Option<String>,
}

impl QueryResponse {
    pub fn into_rows(self) -> Result<Vec<Value>, QueryError> {
        if let Some(exception) = self.exception {
            return Err(QueryError::Database(exception));
        }
        self.data.ok_or(QueryError::InvalidResponse)
    }
}

/// Decode one row, tagging failures with the row index.
pub fn parse_row<T: DeserializeOwned>(row: usize, value: Value) -> Result<T, ImportError> {
    serde_json::from_value(value).map_err(|source| ImportError::Shape { row, source })
}

pub(crate) fn parse_row_time(row: usize, value: &str) -> Result<DateTime<Utc>, ImportError> {
    parse_sql_time(value).map_err(|source| ImportError::Timestamp {
        row,
        value: value.to_string(),
        source,
    })
}

#[derive(Deserialize)]
#[serde(untagged)]
enum NumberOrText {
    Number(u64),
    Text(String),
}

/// ClickHouse quotes 64-bit integers in JSON output; accept either form.
pub fn deserialize_u64_lenient<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    match NumberOrText::deserialize(deserializer)? {
        NumberOrText::Number(n) => Ok(n),
        NumberOrText::Text(s) => s.trim().parse().map_err(serde::de::Error::custom),
    }
}
