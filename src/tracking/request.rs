use chrono::{DateTime, NaiveDate, Utc};

use crate::window::TimeWindow;
use crate::wspr::{Callsign, RequestError};

#[derive(Debug, Clone)]
pub struct TrackRequest {
    pub callsign: Callsign,
    pub window: TimeWindow,
    /// Restrict to transmissions starting at this minute of each ten.
    pub minute: Option<u32>,
}

impl TrackRequest {
    pub fn new(
        callsign: &str,
        start: NaiveDate,
        end: Option<NaiveDate>,
        now: DateTime<Utc>,
        minute: Option<u32>,
    ) -> Result<Self, RequestError> {
        if let Some(m) = minute.filter(|&m| m >= 10) {
            return Err(RequestError::InvalidMinute(m));
        }
        Ok(Self {
            callsign: Callsign::parse(callsign)?,
            window: TimeWindow::from_dates(start, end, now)?,
            minute,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn minute_must_be_a_slot_offset() {
        let now = Utc.with_ymd_and_hms(2024, 3, 1, 0, 0, 0).unwrap();
        let start = NaiveDate::from_ymd_opt(2024, 2, 1).unwrap();

        assert!(TrackRequest::new("k1abc", start, None, now, Some(9)).is_ok());
        assert!(TrackRequest::new("k1abc", start, None, now, None).is_ok());
        assert!(matches!(
            TrackRequest::new("k1abc", start, None, now, Some(10)),
            Err(RequestError::InvalidMinute(10))
        ));
    }

    #[test]
    fn end_before_start_is_rejected() {
        let now = Utc.with_ymd_and_hms(2024, 3, 1, 0, 0, 0).unwrap();
        let start = NaiveDate::from_ymd_opt(2024, 2, 10).unwrap();
        let end = NaiveDate::from_ymd_opt(2024, 2, 9).unwrap();

        assert!(matches!(
            TrackRequest::new("k1abc", start, Some(end), now, None),
            Err(RequestError::InvertedRange { .. })
        ));
    }
}
