use log::{debug, info};

use super::correlate::correlate;
use super::decode::decode_all;
use super::filter::retain_valid;
use super::import::{import_carrier_rows, import_telemetry_rows};
use super::request::TelemetryRequest;
use super::types::DecodedSpot;
use super::TelemetryError;
use crate::query::builder::{carrier_query, telemetry_query};
use crate::query::QueryService;

/// Fetch both streams, pair them and return the decoded spots inside the
/// requested window.
pub async fn fetch_enhanced_telemetry<Q: QueryService>(
    service: &Q,
    request: &TelemetryRequest,
) -> Result<Vec<DecodedSpot>, TelemetryError> {
    let fetch = request.fetch_window();
    info!(
        "Enhanced telemetry for {} channel {} on {}, fetching {} to {}",
        request.callsign,
        request.channel.number(),
        request.band,
        fetch.sql_start(),
        fetch.sql_end()
    );

    let carrier_text = carrier_query(&request.callsign, request.channel, request.band, &fetch);
    let telemetry_text = telemetry_query(request.channel, request.band, &fetch);

    let (carrier_rows, telemetry_rows) = tokio::try_join!(
        service.execute_query(&carrier_text),
        service.execute_query(&telemetry_text),
    )?;

    let carriers = import_carrier_rows(carrier_rows)?;
    let telemetry = import_telemetry_rows(telemetry_rows)?;
    info!(
        "Imported {} carrier and {} telemetry reports",
        carriers.len(),
        telemetry.len()
    );

    let correlation = correlate(carriers, telemetry);
    debug!(
        "{} telemetry reports left unpaired",
        correlation
            .telemetry
            .iter()
            .filter(|t| !t.is_consumed())
            .count()
    );
    let mut spots = retain_valid(decode_all(correlation.spots), &request.window);

    if !request.include_unmatched {
        spots.retain(|spot| spot.telemetry.is_some());
    }

    info!("{} spots after filtering", spots.len());
    Ok(spots)
}
