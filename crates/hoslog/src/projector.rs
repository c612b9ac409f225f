//! Timeline projection.
//!
//! Maps one day's duty-status entries onto the chart's horizontal axis and
//! emits drawable segments: a horizontal duration bar per entry, plus a
//! vertical connector between consecutive entries showing the status change.
//!
//! Entries that cross midnight are clipped to the day window. Entries that
//! overlap each other are all drawn; resolving contradictory logs is the
//! producer's job, so overlaps are only reported through `tracing`.

use serde::{Deserialize, Serialize};
use tracing::{debug, trace, warn};

use crate::config::LayoutConfig;
use crate::entry::{DutyStatus, DutyStatusEntry};
use crate::time::Day;

/// A drawable primitive on the 24-hour chart.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Segment {
    /// Continuous time in one status, clipped to the day.
    Duration {
        /// Status of the interval.
        status: DutyStatus,
        /// Left end of the bar.
        x_start: f64,
        /// Right end of the bar.
        x_end: f64,
        /// Lane of `status`.
        y: f64,
    },
    /// A change of status at one instant. Visual connector only.
    Transition {
        /// Position of the change.
        x: f64,
        /// Lane being left.
        y_from: f64,
        /// Lane being entered.
        y_to: f64,
    },
}

impl Segment {
    /// Whether this is a duration bar.
    #[must_use]
    pub fn is_duration(&self) -> bool {
        matches!(self, Self::Duration { .. })
    }

    /// Horizontal extent; zero for transitions.
    #[must_use]
    pub fn width(&self) -> f64 {
        match self {
            Self::Duration { x_start, x_end, .. } => x_end - x_start,
            Self::Transition { .. } => 0.0,
        }
    }
}

/// Projects entries onto the chart described by a [`LayoutConfig`].
#[derive(Debug, Clone, Copy)]
pub struct TimelineProjector<'a> {
    layout: &'a LayoutConfig,
}

impl<'a> TimelineProjector<'a> {
    /// Create a projector for the given layout.
    #[must_use]
    pub fn new(layout: &'a LayoutConfig) -> Self {
        Self { layout }
    }

    /// The layout in use.
    #[must_use]
    pub fn layout(&self) -> &LayoutConfig {
        self.layout
    }

    /// Horizontal position of `instant`, clamped to the day window.
    #[must_use]
    pub fn x(&self, day: &Day, instant: chrono::DateTime<chrono::Utc>) -> f64 {
        self.layout.x0 + day.progress(instant) * self.layout.width
    }

    /// Project `entries` onto `day`.
    ///
    /// Entries with no overlap with `[day, day + 24h)` are dropped. Each
    /// remaining entry with a known status yields one
    /// [`Segment::Duration`], followed by a [`Segment::Transition`] to the
    /// next remaining entry when that one also has a known status. The result
    /// holds at most `2 * entries.len()` segments, and every x lies within
    /// `[x0, x0 + width]`.
    #[must_use]
    pub fn project(&self, entries: &[DutyStatusEntry], day: &Day) -> Vec<Segment> {
        let retained: Vec<&DutyStatusEntry> = entries
            .iter()
            .filter(|entry| {
                let keep = day.overlaps(entry.start_time, entry.end_time);
                if !keep {
                    trace!(
                        day = %day,
                        start = %entry.start_time,
                        end = %entry.end_time,
                        "entry outside day window"
                    );
                }
                keep
            })
            .collect();

        let overlaps = retained
            .windows(2)
            .filter(|pair| pair[1].start_time < pair[0].end_time)
            .count();
        if overlaps > 0 {
            warn!(
                day = %day,
                overlaps,
                "overlapping duty-status entries; all are drawn"
            );
        }

        let mut segments = Vec::with_capacity(retained.len() * 2);
        for (i, entry) in retained.iter().enumerate() {
            let Some(status) = entry.status() else {
                trace!(code = %entry.duty_status, "no lane for status; skipped");
                continue;
            };

            let y = self.layout.lane_y(status);
            let x_start = self.x(day, entry.start_time);
            let x_end = self.x(day, entry.end_time);
            segments.push(Segment::Duration {
                status,
                x_start,
                x_end,
                y,
            });

            if let Some(next) = retained.get(i + 1).and_then(|next| next.status()) {
                segments.push(Segment::Transition {
                    x: x_end,
                    y_from: y,
                    y_to: self.layout.lane_y(next),
                });
            }
        }

        debug!(
            day = %day,
            entries = entries.len(),
            retained = retained.len(),
            segments = segments.len(),
            "projected day"
        );
        segments
    }
}
