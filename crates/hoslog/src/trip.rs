//! Trip documents as returned by the backend.
//!
//! A trip carries a flat list of log entries and, usually, pre-split daily
//! logs. Everything here is wire-level: strings and loosely typed numbers.
//! Parsing into [`DutyStatusEntry`] and [`Day`] happens through the methods
//! below, which is where malformed timestamps surface.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::Config;
use crate::entry::{parse_entries, DutyStatusEntry, RawEntry};
use crate::error::{Error, Result};
use crate::projector::{Segment, TimelineProjector};
use crate::remarks::{collapse, Remark};
use crate::time::Day;

/// A number the backend may send either as JSON number or as a decimal string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Mileage {
    /// A JSON number.
    Number(f64),
    /// A decimal string such as `"412.50"`.
    Text(String),
}

impl Mileage {
    /// Numeric value; unparseable text reads as zero.
    #[must_use]
    pub fn as_f64(&self) -> f64 {
        match self {
            Self::Number(n) => *n,
            Self::Text(s) => s.trim().parse().unwrap_or(0.0),
        }
    }
}

impl Default for Mileage {
    fn default() -> Self {
        Self::Number(0.0)
    }
}

impl std::fmt::Display for Mileage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(s) => f.write_str(s),
        }
    }
}

/// Recap block as sent by the backend.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RawRecap {
    /// On-duty hours today.
    pub on_duty_today: f64,
    /// On-duty hours in the rolling window.
    pub total_last_8_days: f64,
    /// Hours available tomorrow.
    pub available_tomorrow: f64,
}

/// One day of a trip, as sent by the backend.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RawDailyLog {
    /// Log date, `YYYY-MM-DD`.
    pub date: String,
    /// Miles driven.
    pub total_miles_driving: Mileage,
    /// Total mileage.
    pub total_mileage_today: Mileage,
    /// Off-duty hours.
    pub total_off_duty: f64,
    /// Sleeper-berth hours.
    pub total_sleeper: f64,
    /// Driving hours.
    pub total_driving: f64,
    /// On-duty, not-driving hours.
    pub total_on_duty: f64,
    /// Entries for the day.
    pub log_entries: Vec<RawEntry>,
    /// Recap, if computed.
    pub recap: Option<RawRecap>,
}

impl RawDailyLog {
    /// The chart window for this log.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDate`] if `date` cannot be read.
    pub fn day(&self, config: &Config) -> Result<Day> {
        Day::parse(&self.date, config.display.offset())
    }

    /// Parsed entries.
    ///
    /// # Errors
    ///
    /// Returns the first timestamp or interval error among the entries.
    pub fn entries(&self) -> Result<Vec<DutyStatusEntry>> {
        parse_entries(&self.log_entries)
    }

    /// Project and collapse this log in one go.
    ///
    /// # Errors
    ///
    /// Returns an error if the date or any entry fails to parse.
    pub fn view(&self, config: &Config) -> Result<DayView> {
        let day = self.day(config)?;
        let entries = self.entries()?;
        Ok(DayView {
            segments: TimelineProjector::new(&config.layout).project(&entries, &day),
            remarks: collapse(&entries),
            day,
        })
    }
}

/// Everything needed to draw one day: its window, chart segments and remarks.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DayView {
    /// The day window.
    pub day: Day,
    /// Chart segments.
    pub segments: Vec<Segment>,
    /// Remarks list.
    pub remarks: Vec<Remark>,
}

/// A trip with its log entries and daily logs.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TripDetail {
    /// Trip identifier.
    pub id: String,
    /// Total route distance in miles, when the backend includes it.
    pub total_distance: Option<Mileage>,
    /// Flat, time-ordered entries for the whole trip.
    pub log_entries: Vec<RawEntry>,
    /// Per-day logs.
    pub daily_logs: Vec<RawDailyLog>,
}

impl TripDetail {
    /// Parse a trip from JSON text.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Json`] if the text is not a trip document.
    pub fn from_json(json: &str) -> Result<Self> {
        let trip: Self = serde_json::from_str(json)?;
        debug!(
            id = %trip.id,
            entries = trip.log_entries.len(),
            daily_logs = trip.daily_logs.len(),
            "loaded trip"
        );
        Ok(trip)
    }

    /// Read and parse a trip file.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] or [`Error::Json`].
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json(&text)
    }

    /// The daily log at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DayOutOfRange`] if there is no such log.
    pub fn daily_log(&self, index: usize) -> Result<&RawDailyLog> {
        self.daily_logs.get(index).ok_or(Error::DayOutOfRange {
            index,
            available: self.daily_logs.len(),
        })
    }

    /// Parsed trip-level entries.
    ///
    /// # Errors
    ///
    /// Returns the first timestamp or interval error among the entries.
    pub fn entries(&self) -> Result<Vec<DutyStatusEntry>> {
        parse_entries(&self.log_entries)
    }

    /// Total distance in miles, zero when absent.
    #[must_use]
    pub fn total_distance(&self) -> f64 {
        self.total_distance.as_ref().map_or(0.0, Mileage::as_f64)
    }
}
