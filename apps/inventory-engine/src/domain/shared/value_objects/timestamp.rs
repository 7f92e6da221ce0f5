//! Timestamp value object for temporal data.

use chrono::{DateTime, Days, FixedOffset, NaiveTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A UTC timestamp for order dates and record auditing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Timestamp(DateTime<Utc>);

impl Timestamp {
    /// Create a new Timestamp from a DateTime<Utc>.
    #[must_use]
    pub const fn new(dt: DateTime<Utc>) -> Self {
        Self(dt)
    }

    /// Get the current timestamp.
    #[must_use]
    pub fn now() -> Self {
        Self(Utc::now())
    }

    /// Parse from an RFC 3339 string.
    ///
    /// # Errors
    ///
    /// Returns error if the string is not a valid RFC 3339 timestamp.
    pub fn parse(s: &str) -> Result<Self, chrono::ParseError> {
        let dt = DateTime::parse_from_rfc3339(s)?;
        Ok(Self(dt.with_timezone(&Utc)))
    }

    /// Get the inner DateTime<Utc>.
    #[must_use]
    pub const fn as_datetime(&self) -> DateTime<Utc> {
        self.0
    }

    /// Format as RFC 3339 string.
    #[must_use]
    pub fn to_rfc3339(&self) -> String {
        self.0.to_rfc3339()
    }

    /// The calendar day containing this instant, as seen in `zone`.
    ///
    /// Returns `[start, end)` in UTC. `None` only if the day boundaries
    /// fall outside chrono's representable range.
    #[must_use]
    pub fn day_window(&self, zone: FixedOffset) -> Option<(Self, Self)> {
        let local_day = self.0.with_timezone(&zone).date_naive();
        let start = zone
            .from_local_datetime(&local_day.and_time(NaiveTime::MIN))
            .single()?;
        let next_day = local_day.checked_add_days(Days::new(1))?;
        let end = zone
            .from_local_datetime(&next_day.and_time(NaiveTime::MIN))
            .single()?;
        Some((
            Self(start.with_timezone(&Utc)),
            Self(end.with_timezone(&Utc)),
        ))
    }
}

impl Default for Timestamp {
    fn default() -> Self {
        Self::now()
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.to_rfc3339())
    }
}

impl From<DateTime<Utc>> for Timestamp {
    fn from(dt: DateTime<Utc>) -> Self {
        Self(dt)
    }
}

impl From<Timestamp> for DateTime<Utc> {
    fn from(ts: Timestamp) -> Self {
        ts.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timestamp_parse() {
        let ts = Timestamp::parse("2026-01-19T12:00:00Z").unwrap();
        assert_eq!(ts.to_rfc3339(), "2026-01-19T12:00:00+00:00");
    }

    #[test]
    fn timestamp_parse_invalid() {
        assert!(Timestamp::parse("not-a-date").is_err());
    }

    #[test]
    fn timestamp_ordering() {
        let earlier = Timestamp::parse("2026-01-19T12:00:00Z").unwrap();
        let later = Timestamp::parse("2026-01-19T12:00:01Z").unwrap();
        assert!(earlier < later);
    }

    #[test]
    fn day_window_in_utc() {
        let ts = Timestamp::parse("2026-03-10T15:30:00Z").unwrap();
        let (start, end) = ts.day_window(FixedOffset::east_opt(0).unwrap()).unwrap();
        assert_eq!(start, Timestamp::parse("2026-03-10T00:00:00Z").unwrap());
        assert_eq!(end, Timestamp::parse("2026-03-11T00:00:00Z").unwrap());
    }

    #[test]
    fn day_window_follows_reference_offset() {
        // 02:00 UTC is still the previous evening at UTC-5.
        let ts = Timestamp::parse("2026-03-10T02:00:00Z").unwrap();
        let zone = FixedOffset::west_opt(5 * 3600).unwrap();
        let (start, end) = ts.day_window(zone).unwrap();
        assert_eq!(start, Timestamp::parse("2026-03-09T05:00:00Z").unwrap());
        assert_eq!(end, Timestamp::parse("2026-03-10T05:00:00Z").unwrap());
    }
}
