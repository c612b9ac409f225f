//! Timestamp parsing and the day window.
//!
//! All conversions from timestamp strings to instants go through
//! [`parse_instant`], so a given string always yields the same instant and a
//! bad one is reported once, at the boundary, as
//! [`Error::MalformedTimestamp`].

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, NaiveTime, TimeDelta, TimeZone, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Length of the projection window in milliseconds.
pub const DAY_MS: i64 = 86_400_000;

/// Formats accepted for timestamps that carry no offset. They are read as UTC.
const NAIVE_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];

/// Parse a timestamp string into a UTC instant.
///
/// RFC 3339 (`2025-03-01T08:00:00Z`, `2025-03-01T08:00:00-05:00`) is the
/// canonical form. Offset-less ISO date-times are accepted and read as UTC.
///
/// # Errors
///
/// Returns [`Error::MalformedTimestamp`] tagged with `field` when the value
/// matches none of the accepted forms.
pub fn parse_instant(field: &'static str, value: &str) -> Result<DateTime<Utc>> {
    let trimmed = value.trim();
    let rfc3339_err = match DateTime::parse_from_rfc3339(trimmed) {
        Ok(dt) => return Ok(dt.with_timezone(&Utc)),
        Err(e) => e,
    };

    NAIVE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(trimmed, fmt).ok())
        .map(|naive| naive.and_utc())
        .ok_or_else(|| Error::malformed_timestamp(field, value, rfc3339_err))
}

/// One calendar day on the chart: `[local midnight, local midnight + 24h)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Day {
    date: NaiveDate,
    start: DateTime<Utc>,
}

impl Day {
    /// The day that begins at local midnight of `date` in `offset`.
    #[must_use]
    pub fn new(date: NaiveDate, offset: FixedOffset) -> Self {
        let local_midnight = date.and_time(NaiveTime::MIN);
        let utc = local_midnight - TimeDelta::seconds(i64::from(offset.local_minus_utc()));
        Self {
            date,
            start: Utc.from_utc_datetime(&utc),
        }
    }

    /// Parse a `YYYY-MM-DD` log date.
    ///
    /// A full timestamp is accepted as well; only its date part is used,
    /// which matches how log dates are sometimes serialized.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDate`] if no date can be read.
    pub fn parse(value: &str, offset: FixedOffset) -> Result<Self> {
        let trimmed = value.trim();
        let head = trimmed.get(..10).unwrap_or(trimmed);
        NaiveDate::parse_from_str(head, "%Y-%m-%d")
            .map(|date| Self::new(date, offset))
            .map_err(|source| Error::InvalidDate {
                value: value.to_string(),
                source,
            })
    }

    /// The local day that contains `instant`.
    #[must_use]
    pub fn containing(instant: DateTime<Utc>, offset: FixedOffset) -> Self {
        Self::new(instant.with_timezone(&offset).date_naive(), offset)
    }

    /// Calendar date of this day.
    #[must_use]
    pub fn date(&self) -> NaiveDate {
        self.date
    }

    /// Window start (inclusive).
    #[must_use]
    pub fn start(&self) -> DateTime<Utc> {
        self.start
    }

    /// Window end (exclusive).
    #[must_use]
    pub fn end(&self) -> DateTime<Utc> {
        self.start + TimeDelta::milliseconds(DAY_MS)
    }

    /// The following day.
    #[must_use]
    pub fn next(&self) -> Self {
        Self {
            date: self.date.succ_opt().unwrap_or(self.date),
            start: self.end(),
        }
    }

    /// Fraction of the day elapsed at `instant`, clamped to `[0, 1]`.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn progress(&self, instant: DateTime<Utc>) -> f64 {
        let elapsed = (instant - self.start).num_milliseconds() as f64;
        (elapsed / DAY_MS as f64).clamp(0.0, 1.0)
    }

    /// Whether `[start, end]` shares any time with this day.
    ///
    /// Touching the window from outside does not count: an entry ending at
    /// midnight belongs to the previous day only.
    #[must_use]
    pub fn overlaps(&self, start: DateTime<Utc>, end: DateTime<Utc>) -> bool {
        !(end <= self.start() || start >= self.end())
    }
}

impl std::fmt::Display for Day {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.date.format("%Y-%m-%d"))
    }
}
