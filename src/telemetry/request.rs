use chrono::{DateTime, NaiveDate, Utc};

use super::correlate::MATCH_WINDOW;
use crate::window::TimeWindow;
use crate::wspr::{Band, Callsign, Channel, RequestError};

/// Validated enhanced-telemetry lookup.
#[derive(Debug, Clone)]
pub struct TelemetryRequest {
    pub callsign: Callsign,
    pub channel: Channel,
    pub band: Band,
    /// Window the caller asked for; results are clipped to it.
    pub window: TimeWindow,
    pub include_unmatched: bool,
}

impl TelemetryRequest {
    pub fn new(
        callsign: &str,
        channel: u32,
        band: Band,
        start: NaiveDate,
        end: Option<NaiveDate>,
        now: DateTime<Utc>,
    ) -> Result<Self, RequestError> {
        Ok(Self {
            callsign: Callsign::parse(callsign)?,
            channel: Channel::new(channel)?,
            band,
            window: TimeWindow::from_dates(start, end, now)?,
            include_unmatched: false,
        })
    }

    pub fn include_unmatched(mut self, include: bool) -> Self {
        self.include_unmatched = include;
        self
    }

    /// Whole-day window the streams are fetched over, reaching back one
    /// [`MATCH_WINDOW`] before the first day so a carrier at midnight still
    /// sees its telemetry.
    pub fn fetch_window(&self) -> TimeWindow {
        let days = self.window.widen_to_days();
        TimeWindow {
            start: days.start - MATCH_WINDOW,
            end: days.end,
        }
    }
}
