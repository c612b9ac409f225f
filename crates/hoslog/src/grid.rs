//! Chart furniture: hour lines, quarter-hour ticks and lane labels.
//!
//! These are fixed for a given [`LayoutConfig`] and do not depend on any
//! log data.

use serde::Serialize;

use crate::config::LayoutConfig;
use crate::entry::DutyStatus;

/// A vertical line at a whole hour, with its axis label.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HourLine {
    /// Hour index, `0..=hours`.
    pub hour: u32,
    /// Horizontal position.
    pub x: f64,
    /// Drawn heavier (every `major_hour_every` hours).
    pub major: bool,
    /// "Mid", "Noon" or the hour number.
    pub label: String,
}

/// Label at the left edge of a status lane.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LaneLabel {
    /// Status the lane belongs to.
    pub status: DutyStatus,
    /// Short label text.
    pub label: &'static str,
    /// Lane position.
    pub y: f64,
}

/// One line per hour boundary, both midnights included.
#[must_use]
pub fn hour_lines(layout: &LayoutConfig) -> Vec<HourLine> {
    (0..=layout.hours)
        .map(|hour| HourLine {
            hour,
            x: layout.x0 + f64::from(hour) / f64::from(layout.hours) * layout.width,
            major: hour % layout.major_hour_every == 0,
            label: hour_label(hour, layout.hours),
        })
        .collect()
}

/// X positions of the sub-hour ticks, skipping positions that fall on an hour.
#[must_use]
pub fn quarter_ticks(layout: &LayoutConfig) -> Vec<f64> {
    let per_hour = layout.ticks_per_hour;
    let total = layout.hours * per_hour;
    (0..total)
        .filter(|t| t % per_hour != 0)
        .map(|t| layout.x0 + f64::from(t) / f64::from(total) * layout.width)
        .collect()
}

/// The four lane labels in chart order.
#[must_use]
pub fn lane_labels(layout: &LayoutConfig) -> Vec<LaneLabel> {
    DutyStatus::ALL
        .into_iter()
        .map(|status| LaneLabel {
            status,
            label: status.lane_label(),
            y: layout.lane_y(status),
        })
        .collect()
}

fn hour_label(hour: u32, hours: u32) -> String {
    if hour == 0 || hour == hours {
        "Mid".to_string()
    } else if hour * 2 == hours {
        "Noon".to_string()
    } else {
        hour.to_string()
    }
}
