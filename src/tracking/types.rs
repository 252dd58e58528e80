use chrono::{DateTime, Utc};
use serde::Serialize;

/// One station's copy of a transmission.
#[derive(Debug, Clone, PartialEq, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Reception {
    pub callsign: String,
    pub locator: String,
    pub frequency_mhz: f64,
    pub snr_db: i32,
    pub distance_km: u32,
}

/// A single transmission and everyone who heard it.
#[derive(Debug, Clone, PartialEq, Serialize, utoipa::ToSchema)]
pub struct TrackPoint {
    pub timestamp: DateTime<Utc>,
    pub locator: String,
    pub power_dbm: i32,
    pub longitude: f64,
    pub latitude: f64,
    pub receivers: Vec<Reception>,
}

#[derive(Debug, Clone, PartialEq, Serialize, utoipa::ToSchema)]
pub struct Track {
    /// Newest first.
    pub points: Vec<TrackPoint>,
    /// Span between the first and last point, e.g. `"1mo 3d 4h"`.
    pub flight_time: Option<String>,
}
