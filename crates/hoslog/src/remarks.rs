//! Remarks: the list of status changes printed under the chart.
//!
//! Consecutive entries sharing a status collapse into one remark that keeps
//! the first entry's start time and location. The status code is carried
//! through untouched; turning `ON_DUTY_NOT_DRIVING` into "On Duty Not
//! Driving" happens only when the list is displayed.

use std::fmt::Write as _;
use std::sync::OnceLock;

use chrono::{DateTime, Utc};
use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::DisplayConfig;
use crate::entry::{DutyStatusEntry, StatusCode};

/// Fallback used if a configured time format cannot be rendered.
const FALLBACK_TIME_FORMAT: &str = "%H:%M";

/// One line of the remarks list.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Remark {
    /// Start time of the first entry in the run.
    pub time: DateTime<Utc>,
    /// Location of the first entry in the run.
    pub location: String,
    /// Status shared by the run, as supplied.
    pub status: StatusCode,
}

impl Remark {
    /// The remark time rendered in the configured offset and format.
    #[must_use]
    pub fn formatted_time(&self, display: &DisplayConfig) -> String {
        let local = self.time.with_timezone(&display.offset());
        let mut out = String::new();
        if write!(out, "{}", local.format(&display.time_format)).is_err() {
            out.clear();
            let _ = write!(out, "{}", local.format(FALLBACK_TIME_FORMAT));
        }
        out
    }

    /// Human-readable status, e.g. "Sleeper Berth".
    #[must_use]
    pub fn status_label(&self) -> String {
        format_status(self.status.as_str())
    }
}

impl From<&DutyStatusEntry> for Remark {
    fn from(entry: &DutyStatusEntry) -> Self {
        Self {
            time: entry.start_time,
            location: entry.location.clone(),
            status: entry.duty_status.clone(),
        }
    }
}

/// Collapse runs of same-status entries into remarks.
///
/// An entry starts a new remark when it is the first one or when its status
/// differs from the entry directly before it. Output order follows input
/// order, and a non-empty input always yields at least one remark.
#[must_use]
pub fn collapse(entries: &[DutyStatusEntry]) -> Vec<Remark> {
    let remarks: Vec<Remark> = entries
        .iter()
        .enumerate()
        .filter(|&(i, entry)| i == 0 || entry.duty_status != entries[i - 1].duty_status)
        .map(|(_, entry)| Remark::from(entry))
        .collect();

    debug!(
        entries = entries.len(),
        remarks = remarks.len(),
        "collapsed remarks"
    );
    remarks
}

/// Format a raw status code for display.
///
/// Underscores become spaces and every word is capitalized:
/// `"ON_DUTY_NOT_DRIVING"` → `"On Duty Not Driving"`. Unknown codes are
/// formatted the same way.
#[must_use]
pub fn format_status(code: &str) -> String {
    static WORD_START: OnceLock<Regex> = OnceLock::new();
    let word_start = WORD_START.get_or_init(|| Regex::new(r"\b\w").expect("valid word regex"));

    let spaced = code.replace('_', " ").to_lowercase();
    word_start
        .replace_all(&spaced, |caps: &regex::Captures<'_>| caps[0].to_uppercase())
        .into_owned()
}
