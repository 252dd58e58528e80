use axum::{
    extract::{Query, State},
    Json,
};
use chrono::{NaiveDate, Utc};
use serde::Deserialize;
use utoipa::ToSchema;

use crate::tracking::{fetch_track, Track, TrackRequest};
use crate::web::api::error::ApiResult;
use crate::web::AppState;

#[derive(Debug, Deserialize, ToSchema)]
pub struct TrackQuery {
    pub callsign: String,
    pub start: NaiveDate,
    #[serde(default)]
    pub end: Option<NaiveDate>,
    #[serde(default)]
    pub minute: Option<u32>,
}

#[utoipa::path(
    get,
    path = "/api/track",
    tag = "track",
    params(
        ("callsign" = String, Query, description = "Callsign of the tracked station"),
        ("start" = String, Query, description = "First day (YYYY-MM-DD)"),
        ("end" = Option<String>, Query, description = "Last day (YYYY-MM-DD), defaults to now"),
        ("minute" = Option<u32>, Query, description = "Only transmissions starting at this minute of each ten")
    ),
    responses(
        (status = 200, description = "Track points, newest first", body = Track),
        (status = 400, description = "Invalid parameters", body = crate::web::api::error::ErrorResponse),
        (status = 502, description = "Reception database query failed", body = crate::web::api::error::ErrorResponse)
    )
)]
pub async fn get_track(
    State(state): State<AppState>,
    Query(query): Query<TrackQuery>,
) -> ApiResult<Json<Track>> {
    let request = TrackRequest::new(
        &query.callsign,
        query.start,
        query.end,
        Utc::now(),
        query.minute,
    )?;
    Ok(Json(fetch_track(state.client.as_ref(), &request).await?))
}
