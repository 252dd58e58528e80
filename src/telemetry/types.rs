use chrono::{DateTime, Utc};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize, utoipa::ToSchema)]
pub struct CarrierReceiver {
    pub callsign: String,
    pub locator: String,
    pub frequency_hz: u64,
    pub snr_db: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TelemetryReceiver {
    pub callsign: String,
    pub frequency_hz: u64,
}

/// Position report from the tracked station.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CarrierRecord {
    pub timestamp: DateTime<Utc>,
    pub locator: String,
    pub power_dbm: i32,
    /// Sorted by callsign.
    pub receivers: Vec<CarrierReceiver>,
    pub telemetry: Option<TelemetryRecord>,
}

impl CarrierRecord {
    pub fn is_matched(&self) -> bool {
        self.telemetry.is_some()
    }

    /// Attach a matched telemetry record, stripping its receivers.
    pub fn with_telemetry(self, telemetry: TelemetryRecord) -> Self {
        CarrierRecord {
            telemetry: Some(telemetry.consumed()),
            ..self
        }
    }
}

/// Message sent under a channel pseudo-callsign.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TelemetryRecord {
    pub timestamp: DateTime<Utc>,
    pub callsign: String,
    pub locator: String,
    pub power_dbm: i32,
    /// Sorted by callsign; `None` once the record has been paired.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub receivers: Option<Vec<TelemetryReceiver>>,
}

impl TelemetryRecord {
    pub fn is_consumed(&self) -> bool {
        self.receivers.is_none()
    }

    pub fn consumed(self) -> Self {
        TelemetryRecord {
            receivers: None,
            ..self
        }
    }
}

/// Sensor values recovered from a matched telemetry record.
#[derive(Debug, Clone, PartialEq, Serialize, utoipa::ToSchema)]
pub struct Telemetry {
    pub encoded_callsign: String,
    pub locator6: String,
    pub altitude_m: u32,
    pub speed_kmh: f64,
    pub voltage_v: f64,
    pub temperature_c: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, utoipa::ToSchema)]
pub struct DecodedSpot {
    pub timestamp: DateTime<Utc>,
    pub locator: String,
    pub power_dbm: i32,
    pub receivers: Vec<CarrierReceiver>,
    pub longitude: Option<f64>,
    pub latitude: Option<f64>,
    pub telemetry: Option<Telemetry>,
    #[serde(skip)]
    pub valid: bool,
}
