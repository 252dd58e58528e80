use chrono::Duration;
use log::info;

use super::coreceive::is_coreceived;
use super::types::{CarrierRecord, TelemetryRecord};

/// How far before a carrier report its telemetry message may have been sent.
pub const MATCH_WINDOW: Duration = Duration::seconds(120);

/// Result of one correlation pass.
#[derive(Debug, Default)]
pub struct Correlation {
    /// Carrier records in input order, matched ones carrying their telemetry.
    pub spots: Vec<CarrierRecord>,
    /// Telemetry records in input order; paired ones have no receivers left.
    pub telemetry: Vec<TelemetryRecord>,
    pub matched: usize,
    pub unmatched: usize,
}

/// Merge-join time-sorted carrier and telemetry streams.
///
/// A telemetry record is a candidate for a carrier record when it was sent at
/// most [`MATCH_WINDOW`] before it, and is paired when the two were
/// coreceived. A candidate that fails the coreception check is passed over
/// and not offered to later carrier records. Carrier records that already
/// carry telemetry are emitted untouched, so feeding a previous result back
/// in adds no matches.
pub fn correlate(carriers: Vec<CarrierRecord>, telemetry: Vec<TelemetryRecord>) -> Correlation {
    let carrier_count = carriers.len();
    let telemetry_count = telemetry.len();

    let mut pending = telemetry.into_iter().peekable();
    let mut result = Correlation {
        spots: Vec::with_capacity(carrier_count),
        telemetry: Vec::with_capacity(telemetry_count),
        ..Default::default()
    };

    for carrier in carriers {
        if carrier.is_matched() {
            result.spots.push(carrier);
            result.unmatched += 1;
            continue;
        }

        let horizon = carrier.timestamp - MATCH_WINDOW;
        let mut paired = None;

        loop {
            let stale = pending.next_if(|t| {
                t.timestamp <= carrier.timestamp && (t.is_consumed() || t.timestamp < horizon)
            });
            if let Some(stale) = stale {
                result.telemetry.push(stale);
                continue;
            }

            let Some(candidate) = pending.next_if(|t| t.timestamp <= carrier.timestamp) else {
                break;
            };

            let coreceived = candidate
                .receivers
                .as_deref()
                .is_some_and(|rx| is_coreceived(&carrier.receivers, rx));

            if coreceived {
                let candidate = candidate.consumed();
                result.telemetry.push(candidate.clone());
                paired = Some(candidate);
                break;
            }
            result.telemetry.push(candidate);
        }

        match paired {
            Some(t) => {
                result.spots.push(carrier.with_telemetry(t));
                result.matched += 1;
            }
            None => {
                result.spots.push(carrier);
                result.unmatched += 1;
            }
        }
    }

    result.telemetry.extend(pending);

    info!(
        "Telemetry matching: {} carrier reports, {} telemetry reports, {} matched, {} unmatched",
        carrier_count, telemetry_count, result.matched, result.unmatched
    );

    result
}
