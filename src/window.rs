use chrono::{DateTime, Duration, NaiveDate, NaiveDateTime, NaiveTime, SubsecRound, Utc};
use serde::Serialize;

use crate::wspr::RequestError;

/// Timestamp layout used by the reception database, always UTC.
pub const SQL_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Inclusive UTC time range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TimeWindow {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl TimeWindow {
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> Result<Self, RequestError> {
        if end < start {
            return Err(RequestError::InvertedRange { start, end });
        }
        Ok(TimeWindow { start, end })
    }

    /// Window covering `start` from midnight to the last second of `end`, or
    /// up to `now` when no end date is given.
    pub fn from_dates(
        start: NaiveDate,
        end: Option<NaiveDate>,
        now: DateTime<Utc>,
    ) -> Result<Self, RequestError> {
        let end = match end {
            Some(date) => start_of_day(date) + Duration::days(1) - Duration::seconds(1),
            None => now.trunc_subsecs(0),
        };
        TimeWindow::new(start_of_day(start), end)
    }

    pub fn contains(&self, timestamp: DateTime<Utc>) -> bool {
        timestamp >= self.start && timestamp <= self.end
    }

    /// Whole-day fetch window: midnight of the first day to 23:59 of the last.
    pub fn widen_to_days(&self) -> TimeWindow {
        TimeWindow {
            start: start_of_day(self.start.date_naive()),
            end: start_of_day(self.end.date_naive()) + Duration::days(1) - Duration::minutes(1),
        }
    }

    pub fn sql_start(&self) -> String {
        self.start.format(SQL_TIME_FORMAT).to_string()
    }

    pub fn sql_end(&self) -> String {
        self.end.format(SQL_TIME_FORMAT).to_string()
    }
}

/// Parse a zone-less database timestamp as UTC.
pub fn parse_sql_time(value: &str) -> Result<DateTime<Utc>, chrono::ParseError> {
    NaiveDateTime::parse_from_str(value.trim(), SQL_TIME_FORMAT).map(|t| t.and_utc())
}

fn start_of_day(date: NaiveDate) -> DateTime<Utc> {
    date.and_time(NaiveTime::MIN).and_utc()
}
