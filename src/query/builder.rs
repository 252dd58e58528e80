//! Query text for the wspr.live reception table.

use crate::window::TimeWindow;
use crate::wspr::{Band, Callsign, Channel};

/// Position reports of the tracked station, one row per transmission with its
/// receivers grouped.
pub fn carrier_query(
    callsign: &Callsign,
    channel: Channel,
    band: Band,
    window: &TimeWindow,
) -> String {
    format!(
        "SELECT time, tx_loc, power, groupArray(tuple(rx_sign, rx_loc, frequency, snr)) \
         FROM wspr.rx \
         WHERE tx_sign = '{callsign}' AND band = {band_id} \
         AND time >= '{start}' AND time <= '{end}' \
         AND toMinute(time) % 10 = {minute} \
         GROUP BY time, tx_loc, power \
         FORMAT JSONCompact",
        band_id = band.wspr_live_id(),
        start = window.sql_start(),
        end = window.sql_end(),
        minute = channel.carrier_minute(band),
    )
}

/// Telemetry messages of every pseudo-callsign sharing the channel's pattern.
pub fn telemetry_query(channel: Channel, band: Band, window: &TimeWindow) -> String {
    let (first, third) = channel.telemetry_prefix();
    format!(
        "SELECT time, tx_sign, tx_loc, power, groupArray(tuple(rx_sign, frequency)) \
         FROM wspr.rx \
         WHERE substr(tx_sign, 1, 1) = '{first}' AND substr(tx_sign, 3, 1) = '{third}' \
         AND band = {band_id} \
         AND time >= '{start}' AND time <= '{end}' \
         AND toMinute(time) % 10 = {minute} \
         GROUP BY time, tx_sign, tx_loc, power \
         FORMAT JSONCompact",
        band_id = band.wspr_live_id(),
        start = window.sql_start(),
        end = window.sql_end(),
        minute = channel.telemetry_minute(band),
    )
}

/// Every individual reception of a callsign, newest first.
pub fn track_query(callsign: &Callsign, window: &TimeWindow, minute: Option<u32>) -> String {
    let minute_filter = minute
        .map(|m| format!("AND toMinute(time) % 10 = {m} "))
        .unwrap_or_default();
    format!(
        "SELECT time, frequency, rx_sign, rx_loc, snr, distance, power, tx_loc \
         FROM wspr.rx \
         WHERE tx_sign = '{callsign}' \
         AND time >= '{start}' AND time <= '{end}' \
         {minute_filter}\
         ORDER BY time DESC \
         FORMAT JSONCompact",
        start = window.sql_start(),
        end = window.sql_end(),
    )
}
