use log::{debug, info};
use serde::Deserialize;
use serde_json::Value;
use std::collections::HashMap;

use super::flight_time::flight_time;
use super::request::TrackRequest;
use super::types::{Reception, Track, TrackPoint};
use super::TrackError;
use crate::grid::project_locator;
use crate::query::builder::track_query;
use crate::query::{deserialize_u64_lenient, parse_row, parse_row_time, ImportError, QueryService};

/// `[time, frequency, rx_sign, rx_loc, snr, distance, power, tx_loc]`
#[derive(Deserialize)]
struct ReceptionRow(
    String,
    #[serde(deserialize_with = "deserialize_u64_lenient")] u64,
    String,
    String,
    i32,
    u32,
    i32,
    String,
);

/// Collapse per-receiver rows into one point per `(time, tx_loc)`.
///
/// Receivers keep the order they arrived in. Points whose locator does not
/// project are dropped; the rest are returned newest first.
pub fn group_receptions(rows: Vec<Value>) -> Result<Vec<TrackPoint>, ImportError> {
    let mut points: Vec<TrackPoint> = Vec::new();
    let mut index: HashMap<(String, String), usize> = HashMap::new();
    let mut dropped = 0usize;

    for (i, value) in rows.into_iter().enumerate() {
        let ReceptionRow(
            time,
            frequency_hz,
            callsign,
            rx_locator,
            snr_db,
            distance_km,
            power_dbm,
            tx_locator,
        ) = parse_row(i, value)?;

        let reception = Reception {
            callsign,
            locator: rx_locator,
            frequency_mhz: frequency_hz as f64 / 1_000_000.0,
            snr_db,
            distance_km,
        };

        let key = (time, tx_locator);
        if let Some(&slot) = index.get(&key) {
            points[slot].receivers.push(reception);
            continue;
        }

        let Some(position) = project_locator(&key.1) else {
            debug!("Skipping reception at {} with unusable locator {:?}", key.0, key.1);
            dropped += 1;
            continue;
        };
        let timestamp = parse_row_time(i, &key.0)?;

        index.insert(key.clone(), points.len());
        points.push(TrackPoint {
            timestamp,
            locator: key.1,
            power_dbm,
            longitude: position.longitude,
            latitude: position.latitude,
            receivers: vec![reception],
        });
    }

    if dropped > 0 {
        debug!("Dropped {} receptions without a usable locator", dropped);
    }

    points.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
    Ok(points)
}

pub async fn fetch_track<Q: QueryService>(
    service: &Q,
    request: &TrackRequest,
) -> Result<Track, TrackError> {
    info!(
        "Tracking {} from {} to {}",
        request.callsign,
        request.window.sql_start(),
        request.window.sql_end()
    );

    let rows = service
        .execute_query(&track_query(&request.callsign, &request.window, request.minute))
        .await?;
    let points = group_receptions(rows)?;
    let flight_time = flight_time(&points).map(|t| t.to_string());

    info!("Track of {} has {} points", request.callsign, points.len());
    Ok(Track {
        points,
        flight_time,
    })
}
