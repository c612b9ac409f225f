//! Duty-status entries.
//!
//! A [`DutyStatusEntry`] is one interval of a driver's day in one of the four
//! Hours-of-Service statuses. Entries arrive as [`RawEntry`] values straight
//! from a trip document and are parsed once into typed instants.

use chrono::{DateTime, TimeDelta, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::time::parse_instant;

/// The four Hours-of-Service duty statuses, in chart order (top to bottom).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DutyStatus {
    /// Off duty.
    OffDuty,
    /// Resting in the sleeper berth.
    SleeperBerth,
    /// Behind the wheel.
    Driving,
    /// Working, but not driving (inspections, loading, fueling).
    OnDutyNotDriving,
}

impl DutyStatus {
    /// Every status, in lane order.
    pub const ALL: [Self; 4] = [
        Self::OffDuty,
        Self::SleeperBerth,
        Self::Driving,
        Self::OnDutyNotDriving,
    ];

    /// The wire code, e.g. `"ON_DUTY_NOT_DRIVING"`.
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Self::OffDuty => "OFF_DUTY",
            Self::SleeperBerth => "SLEEPER_BERTH",
            Self::Driving => "DRIVING",
            Self::OnDutyNotDriving => "ON_DUTY_NOT_DRIVING",
        }
    }

    /// Look up a status by its wire code. Exact match only.
    #[must_use]
    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.code() == code)
    }

    /// Short label printed beside the lane on the chart.
    #[must_use]
    pub fn lane_label(&self) -> &'static str {
        match self {
            Self::OffDuty => "Off Duty",
            Self::SleeperBerth => "Sleeper",
            Self::Driving => "Driving",
            Self::OnDutyNotDriving => "On Duty",
        }
    }

    /// Whether time in this status counts as on duty for the recap.
    #[must_use]
    pub fn is_on_duty(&self) -> bool {
        matches!(self, Self::Driving | Self::OnDutyNotDriving)
    }
}

impl std::fmt::Display for DutyStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(self.code())
    }
}

/// A duty status as it appeared in the input.
///
/// Upstream data may carry codes outside the four known statuses. Those are
/// kept verbatim rather than rejected: the projector skips them and the
/// remarks list shows them as-is.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum StatusCode {
    /// One of the four known statuses.
    Known(DutyStatus),
    /// Anything else.
    Unrecognized(String),
}

impl StatusCode {
    /// The known status, if any.
    #[must_use]
    pub fn known(&self) -> Option<DutyStatus> {
        match self {
            Self::Known(status) => Some(*status),
            Self::Unrecognized(_) => None,
        }
    }

    /// The raw code.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Known(status) => status.code(),
            Self::Unrecognized(code) => code,
        }
    }
}

impl From<DutyStatus> for StatusCode {
    fn from(status: DutyStatus) -> Self {
        Self::Known(status)
    }
}

impl From<&str> for StatusCode {
    fn from(code: &str) -> Self {
        DutyStatus::from_code(code).map_or_else(|| Self::Unrecognized(code.to_string()), Self::Known)
    }
}

impl From<String> for StatusCode {
    fn from(code: String) -> Self {
        match DutyStatus::from_code(&code) {
            Some(status) => Self::Known(status),
            None => Self::Unrecognized(code),
        }
    }
}

impl From<StatusCode> for String {
    fn from(code: StatusCode) -> Self {
        match code {
            StatusCode::Known(status) => status.code().to_string(),
            StatusCode::Unrecognized(code) => code,
        }
    }
}

impl std::fmt::Display for StatusCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(self.as_str())
    }
}

/// One duty-status interval with parsed instants.
///
/// [`DutyStatusEntry::new`], [`RawEntry::parse`] and deserialization (which
/// goes through [`RawEntry`]) all reject `end_time < start_time`. The fields
/// are public, so code that builds an entry by hand must keep that order.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawEntry")]
pub struct DutyStatusEntry {
    /// Status for the whole interval.
    pub duty_status: StatusCode,
    /// Interval start.
    pub start_time: DateTime<Utc>,
    /// Interval end.
    pub end_time: DateTime<Utc>,
    /// Free-text location.
    pub location: String,
    /// Optional free-text note ("Pre-trip inspection", "Fueling", ...).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl DutyStatusEntry {
    /// Create an entry, checking that it does not end before it starts.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvertedInterval`] if `end_time < start_time`.
    pub fn new(
        duty_status: impl Into<StatusCode>,
        start_time: DateTime<Utc>,
        end_time: DateTime<Utc>,
        location: impl Into<String>,
    ) -> Result<Self> {
        if end_time < start_time {
            return Err(Error::InvertedInterval {
                start: start_time.to_rfc3339(),
                end: end_time.to_rfc3339(),
            });
        }
        Ok(Self {
            duty_status: duty_status.into(),
            start_time,
            end_time,
            location: location.into(),
            notes: None,
        })
    }

    /// Attach a note.
    #[must_use]
    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }

    /// The known status, if any.
    #[must_use]
    pub fn status(&self) -> Option<DutyStatus> {
        self.duty_status.known()
    }

    /// Length of the interval.
    #[must_use]
    pub fn duration(&self) -> TimeDelta {
        self.end_time - self.start_time
    }

    /// Length of the interval in hours.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn hours(&self) -> f64 {
        self.duration().num_milliseconds() as f64 / 3_600_000.0
    }

    /// A copy of this entry restricted to `[start, end]`.
    ///
    /// Used when splitting an entry at midnight; the caller guarantees that
    /// the new bounds lie within the original interval.
    #[must_use]
    pub fn slice(&self, start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        Self {
            start_time: start,
            end_time: end,
            ..self.clone()
        }
    }
}

/// An entry exactly as the backend serializes it: strings all the way down.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawEntry {
    /// Status code, e.g. `"DRIVING"`.
    pub duty_status: String,
    /// Start timestamp.
    pub start_time: String,
    /// End timestamp.
    pub end_time: String,
    /// Free-text location.
    #[serde(default)]
    pub location: String,
    /// Optional note.
    #[serde(default)]
    pub notes: Option<String>,
}

impl RawEntry {
    /// Parse into a typed entry.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MalformedTimestamp`] if either timestamp cannot be
    /// parsed, or [`Error::InvertedInterval`] if the entry ends before it starts.
    pub fn parse(&self) -> Result<DutyStatusEntry> {
        let start = parse_instant("start_time", &self.start_time)?;
        let end = parse_instant("end_time", &self.end_time)?;
        if end < start {
            return Err(Error::InvertedInterval {
                start: self.start_time.clone(),
                end: self.end_time.clone(),
            });
        }
        Ok(DutyStatusEntry {
            duty_status: StatusCode::from(self.duty_status.as_str()),
            start_time: start,
            end_time: end,
            location: self.location.clone(),
            notes: self.notes.clone().filter(|n| !n.is_empty()),
        })
    }
}

impl TryFrom<RawEntry> for DutyStatusEntry {
    type Error = Error;

    fn try_from(raw: RawEntry) -> Result<Self> {
        raw.parse()
    }
}

/// Parse a list of raw entries, stopping at the first bad one.
///
/// # Errors
///
/// Propagates the first error from [`RawEntry::parse`].
pub fn parse_entries(raw: &[RawEntry]) -> Result<Vec<DutyStatusEntry>> {
    raw.iter().map(RawEntry::parse).collect()
}
