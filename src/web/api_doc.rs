use utoipa::OpenApi;

use super::api::error::ErrorResponse;
use super::api::telemetry::{TelemetryQuery, TelemetryResponse};
use super::api::track::TrackQuery;
use crate::telemetry::{CarrierReceiver, DecodedSpot, Telemetry};
use crate::tracking::{Reception, Track, TrackPoint};
use crate::wspr::Band;

#[derive(OpenApi)]
#[openapi(
    paths(
        super::api::telemetry::get_telemetry,
        super::api::track::get_track,
    ),
    components(
        schemas(
            TelemetryQuery,
            TelemetryResponse,
            TrackQuery,
            ErrorResponse,
            Band,
            DecodedSpot,
            CarrierReceiver,
            Telemetry,
            Track,
            TrackPoint,
            Reception,
        )
    ),
    info(
        title = "WSPR Track API",
        description = "Balloon positions and enhanced telemetry from wspr.live reception reports",
        version = "0.1.0"
    ),
    tags(
        (name = "telemetry", description = "Enhanced telemetry decoding"),
        (name = "track", description = "Plain position tracking")
    )
)]
pub struct ApiDoc;
