use chrono::{DateTime, Utc};
use std::fmt;

use super::types::TrackPoint;

const HOUR_SECS: i64 = 3_600;
const DAY_SECS: i64 = 24 * HOUR_SECS;
const MONTH_SECS: f64 = 30.44 * DAY_SECS as f64;

/// Elapsed time between the earliest and latest point of a track.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FlightTime {
    seconds: i64,
}

impl FlightTime {
    pub fn between(first: DateTime<Utc>, last: DateTime<Utc>) -> Self {
        Self {
            seconds: (last - first).num_seconds().abs(),
        }
    }

    pub fn months(&self) -> i64 {
        (self.seconds as f64 / MONTH_SECS).floor() as i64
    }

    /// Whole days left over after whole months.
    pub fn days(&self) -> i64 {
        ((self.seconds as f64 % MONTH_SECS) / DAY_SECS as f64).floor() as i64
    }

    /// Whole hours left over after whole days.
    pub fn hours(&self) -> i64 {
        (self.seconds % DAY_SECS) / HOUR_SECS
    }
}

impl fmt::Display for FlightTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (months, days, hours) = (self.months(), self.days(), self.hours());
        if months > 0 {
            write!(f, "{months}mo {days}d {hours}h")
        } else if days > 0 {
            write!(f, "{days}d {hours}h")
        } else {
            write!(f, "{hours}h")
        }
    }
}

/// `None` unless the track has at least two points.
pub fn flight_time(points: &[TrackPoint]) -> Option<FlightTime> {
    if points.len() < 2 {
        return None;
    }
    let first = points.iter().map(|p| p.timestamp).min()?;
    let last = points.iter().map(|p| p.timestamp).max()?;
    Some(FlightTime::between(first, last))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn point(timestamp: DateTime<Utc>) -> TrackPoint {
        TrackPoint {
            timestamp,
            locator: "JO22".to_string(),
            power_dbm: 13,
            longitude: 4.0,
            latitude: 52.0,
            receivers: Vec::new(),
        }
    }

    fn span(d: Duration) -> String {
        let start = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        FlightTime::between(start, start + d).to_string()
    }

    #[test]
    fn formats_by_largest_unit() {
        assert_eq!(span(Duration::minutes(59)), "0h");
        assert_eq!(span(Duration::hours(5) + Duration::minutes(30)), "5h");
        assert_eq!(span(Duration::days(3) + Duration::hours(4)), "3d 4h");
        assert_eq!(span(Duration::days(45) + Duration::hours(2)), "1mo 14d 2h");
    }

    #[test]
    fn month_is_thirty_point_four_four_days() {
        assert_eq!(span(Duration::days(30)), "30d 0h");
        assert_eq!(span(Duration::days(31)), "1mo 0d 0h");
    }

    #[test]
    fn needs_two_points() {
        let t = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        assert!(flight_time(&[]).is_none());
        assert!(flight_time(&[point(t)]).is_none());

        let points = [point(t + Duration::hours(30)), point(t)];
        assert_eq!(flight_time(&points).unwrap().to_string(), "1d 6h");
    }
}
