//! Daily log sheets.
//!
//! A trip produces one flat, time-ordered list of entries that may run for
//! several days. Each calendar day gets its own sheet: entries are cut at
//! local midnight, grouped by date, and summed per status for the totals
//! column and the recap.

use std::collections::BTreeMap;

use chrono::{FixedOffset, NaiveDate};
use serde::Serialize;
use tracing::debug;

use crate::config::RecapConfig;
use crate::entry::{DutyStatus, DutyStatusEntry};
use crate::time::Day;

/// Hours spent in each status on one day.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct StatusTotals {
    /// Off-duty hours.
    pub total_off_duty: f64,
    /// Sleeper-berth hours.
    pub total_sleeper: f64,
    /// Driving hours.
    pub total_driving: f64,
    /// On-duty, not-driving hours.
    pub total_on_duty: f64,
}

impl StatusTotals {
    fn add(&mut self, status: DutyStatus, hours: f64) {
        match status {
            DutyStatus::OffDuty => self.total_off_duty += hours,
            DutyStatus::SleeperBerth => self.total_sleeper += hours,
            DutyStatus::Driving => self.total_driving += hours,
            DutyStatus::OnDutyNotDriving => self.total_on_duty += hours,
        }
    }

    fn rounded(self) -> Self {
        Self {
            total_off_duty: round2(self.total_off_duty),
            total_sleeper: round2(self.total_sleeper),
            total_driving: round2(self.total_driving),
            total_on_duty: round2(self.total_on_duty),
        }
    }

    /// Driving plus on-duty-not-driving hours.
    #[must_use]
    pub fn on_duty_hours(&self) -> f64 {
        self.total_driving + self.total_on_duty
    }
}

/// The recap block in the corner of a log sheet.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Recap {
    /// On-duty hours today.
    pub on_duty_today: f64,
    /// On-duty hours over the rolling window. Only this trip is known, so
    /// this equals today's figure.
    pub total_last_8_days: f64,
    /// Cycle hours left for tomorrow.
    pub available_tomorrow: f64,
}

/// One day's log sheet.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DailyLogSheet {
    /// Calendar date.
    pub date: NaiveDate,
    /// Miles driven today.
    pub total_miles_driving: f64,
    /// Total mileage today.
    pub total_mileage_today: f64,
    /// Hours per status.
    #[serde(flatten)]
    pub totals: StatusTotals,
    /// Entries for this day, cut at midnight.
    #[serde(rename = "log_entries")]
    pub entries: Vec<DutyStatusEntry>,
    /// Free-text sheet remark.
    pub remarks: String,
    /// Recap figures.
    pub recap: Recap,
}

/// Cut entries at every local midnight they cross.
///
/// Pieces keep status, location and notes. An entry that ends exactly at
/// midnight is not split, and no zero-length piece is produced for the next
/// day. Zero-length input entries pass through unchanged.
#[must_use]
pub fn split_at_midnight(entries: &[DutyStatusEntry], offset: FixedOffset) -> Vec<DutyStatusEntry> {
    let mut pieces = Vec::with_capacity(entries.len());
    for entry in entries {
        let mut start = entry.start_time;
        loop {
            let boundary = Day::containing(start, offset).end();
            if entry.end_time <= boundary {
                break;
            }
            pieces.push(entry.slice(start, boundary));
            start = boundary;
        }
        pieces.push(entry.slice(start, entry.end_time));
    }
    pieces
}

/// Build one sheet per calendar day touched by `entries`.
///
/// `total_distance` is the trip's mileage; each day gets the share
/// proportional to its driving hours. Sheets come out in date order.
#[must_use]
pub fn build_daily_sheets(
    entries: &[DutyStatusEntry],
    total_distance: f64,
    offset: FixedOffset,
    recap: &RecapConfig,
) -> Vec<DailyLogSheet> {
    if entries.is_empty() {
        return Vec::new();
    }

    let pieces = split_at_midnight(entries, offset);
    let total_driving: f64 = pieces
        .iter()
        .filter(|e| e.status() == Some(DutyStatus::Driving))
        .map(DutyStatusEntry::hours)
        .sum();

    let mut by_date: BTreeMap<NaiveDate, Vec<DutyStatusEntry>> = BTreeMap::new();
    for piece in pieces {
        let date = Day::containing(piece.start_time, offset).date();
        by_date.entry(date).or_default().push(piece);
    }

    let sheets: Vec<DailyLogSheet> = by_date
        .into_iter()
        .enumerate()
        .map(|(i, (date, day_entries))| {
            let mut totals = StatusTotals::default();
            for entry in &day_entries {
                if let Some(status) = entry.status() {
                    totals.add(status, entry.hours());
                }
            }

            let miles = if total_driving > 0.0 {
                round2(totals.total_driving / total_driving * total_distance)
            } else {
                0.0
            };
            let on_duty_today = totals.on_duty_hours();

            DailyLogSheet {
                date,
                total_miles_driving: miles,
                total_mileage_today: miles,
                totals: totals.rounded(),
                entries: day_entries,
                remarks: format!("Day {} of trip", i + 1),
                recap: Recap {
                    on_duty_today: round2(on_duty_today),
                    total_last_8_days: round2(on_duty_today),
                    available_tomorrow: round2(recap.cycle_limit_hours - on_duty_today),
                },
            }
        })
        .collect();

    debug!(
        entries = entries.len(),
        sheets = sheets.len(),
        total_distance,
        "built daily log sheets"
    );
    sheets
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
