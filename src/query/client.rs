use serde_json::Value;
use std::future::Future;

use super::{QueryError, QueryResponse};
use crate::config::QueryConfig;

/// Reception-report store that answers query text with rows.
pub trait QueryService {
    fn execute_query(
        &self,
        query: &str,
    ) -> impl Future<Output = Result<Vec<Value>, QueryError>> + Send;
}

/// ClickHouse HTTP interface of wspr.live.
#[derive(Debug, Clone)]
pub struct WsprLiveClient {
    http: reqwest::Client,
    endpoint: String,
}

impl WsprLiveClient {
    pub fn new(config: &QueryConfig) -> Result<Self, QueryError> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()?;
        Ok(Self {
            http,
            endpoint: config.endpoint.clone(),
        })
    }
}

impl QueryService for WsprLiveClient {
    async fn execute_query(&self, query: &str) -> Result<Vec<Value>, QueryError> {
        log::debug!("Querying {}: {}", self.endpoint, query);

        let response = self
            .http
            .get(&self.endpoint)
            .query(&[("query", query)])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(QueryError::Status {
                status,
                body: body.trim().to_string(),
            });
        }

        let rows = response.json::<QueryResponse>().await?.into_rows()?;
        log::debug!("Query returned {} rows", rows.len());
        Ok(rows)
    }
}
