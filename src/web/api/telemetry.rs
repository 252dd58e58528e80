use axum::{
    extract::{Query, State},
    Json,
};
use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::telemetry::{fetch_enhanced_telemetry, DecodedSpot, TelemetryRequest};
use crate::web::api::error::ApiResult;
use crate::web::AppState;
use crate::wspr::Band;

#[derive(Debug, Deserialize, ToSchema)]
pub struct TelemetryQuery {
    pub callsign: String,
    pub channel: u32,
    pub band: Band,
    pub start: NaiveDate,
    #[serde(default)]
    pub end: Option<NaiveDate>,
    #[serde(default)]
    pub include_unmatched: bool,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct TelemetryResponse {
    pub count: usize,
    pub spots: Vec<DecodedSpot>,
}

#[utoipa::path(
    get,
    path = "/api/telemetry",
    tag = "telemetry",
    params(
        ("callsign" = String, Query, description = "Callsign of the tracked station"),
        ("channel" = u32, Query, description = "Telemetry channel (0-599)"),
        ("band" = Band, Query, description = "Band label, e.g. 20m"),
        ("start" = String, Query, description = "First day (YYYY-MM-DD)"),
        ("end" = Option<String>, Query, description = "Last day (YYYY-MM-DD), defaults to now"),
        ("include_unmatched" = Option<bool>, Query, description = "Also return spots without telemetry")
    ),
    responses(
        (status = 200, description = "Decoded spots in time order", body = TelemetryResponse),
        (status = 400, description = "Invalid parameters", body = crate::web::api::error::ErrorResponse),
        (status = 502, description = "Reception database query failed", body = crate::web::api::error::ErrorResponse)
    )
)]
pub async fn get_telemetry(
    State(state): State<AppState>,
    Query(query): Query<TelemetryQuery>,
) -> ApiResult<Json<TelemetryResponse>> {
    let request = TelemetryRequest::new(
        &query.callsign,
        query.channel,
        query.band,
        query.start,
        query.end,
        Utc::now(),
    )?
    .include_unmatched(query.include_unmatched);

    let spots = fetch_enhanced_telemetry(state.client.as_ref(), &request).await?;
    Ok(Json(TelemetryResponse {
        count: spots.len(),
        spots,
    }))
}
