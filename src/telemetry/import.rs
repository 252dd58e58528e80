use serde::Deserialize;
use serde_json::Value;

use super::types::{CarrierReceiver, CarrierRecord, TelemetryReceiver, TelemetryRecord};
use crate::query::{deserialize_u64_lenient, parse_row, parse_row_time, ImportError};

#[derive(Deserialize)]
struct CarrierRow(String, String, i32, Vec<CarrierReceiverRow>);

#[derive(Deserialize)]
struct CarrierReceiverRow(
    String,
    String,
    #[serde(deserialize_with = "deserialize_u64_lenient")] u64,
    i32,
);

#[derive(Deserialize)]
struct TelemetryRow(String, String, String, i32, Vec<TelemetryReceiverRow>);

#[derive(Deserialize)]
struct TelemetryReceiverRow(
    String,
    #[serde(deserialize_with = "deserialize_u64_lenient")] u64,
);

/// `[time, tx_loc, power, [[rx_sign, rx_loc, frequency, snr], ...]]` rows,
/// returned sorted by time.
pub fn import_carrier_rows(rows: Vec<Value>) -> Result<Vec<CarrierRecord>, ImportError> {
    let mut records = rows
        .into_iter()
        .enumerate()
        .map(|(i, value)| {
            let CarrierRow(time, locator, power_dbm, receivers) = parse_row(i, value)?;
            let mut receivers: Vec<CarrierReceiver> = receivers
                .into_iter()
                .map(
                    |CarrierReceiverRow(callsign, locator, frequency_hz, snr_db)| CarrierReceiver {
                        callsign,
                        locator,
                        frequency_hz,
                        snr_db,
                    },
                )
                .collect();
            receivers.sort_by(|a, b| a.callsign.cmp(&b.callsign));

            Ok(CarrierRecord {
                timestamp: parse_row_time(i, &time)?,
                locator,
                power_dbm,
                receivers,
                telemetry: None,
            })
        })
        .collect::<Result<Vec<_>, ImportError>>()?;

    records.sort_by_key(|r| r.timestamp);
    Ok(records)
}

/// `[time, tx_sign, tx_loc, power, [[rx_sign, frequency], ...]]` rows,
/// returned sorted by time.
pub fn import_telemetry_rows(rows: Vec<Value>) -> Result<Vec<TelemetryRecord>, ImportError> {
    let mut records = rows
        .into_iter()
        .enumerate()
        .map(|(i, value)| {
            let TelemetryRow(time, callsign, locator, power_dbm, receivers) = parse_row(i, value)?;
            let mut receivers: Vec<TelemetryReceiver> = receivers
                .into_iter()
                .map(|TelemetryReceiverRow(callsign, frequency_hz)| TelemetryReceiver {
                    callsign,
                    frequency_hz,
                })
                .collect();
            receivers.sort_by(|a, b| a.callsign.cmp(&b.callsign));

            Ok(TelemetryRecord {
                timestamp: parse_row_time(i, &time)?,
                callsign,
                locator,
                power_dbm,
                receivers: Some(receivers),
            })
        })
        .collect::<Result<Vec<_>, ImportError>>()?;

    records.sort_by_key(|r| r.timestamp);
    Ok(records)
}
