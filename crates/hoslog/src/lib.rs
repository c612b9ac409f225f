//! `hoslog` - Hours-of-Service driver log engine
//!
//! This library turns a driver's duty-status entries into what a paper
//! logbook shows: the 24-hour grid chart with one lane per status, the
//! remarks list of status changes, and per-day log sheets with totals and
//! a recap. It can also plan a trip's duty schedule under hours-of-service
//! rules, producing the entries the rest of the crate draws.
//!
//! ```
//! use hoslog::{collapse, parse_entries, Day, LayoutConfig, RawEntry, TimelineProjector};
//! use chrono::{FixedOffset, NaiveDate};
//!
//! let raw: Vec<RawEntry> = serde_json::from_str(r#"[
//!     {"duty_status": "OFF_DUTY", "start_time": "2025-03-01T00:00:00Z", "end_time": "2025-03-01T08:00:00Z", "location": "Depot"},
//!     {"duty_status": "DRIVING", "start_time": "2025-03-01T08:00:00Z", "end_time": "2025-03-01T12:00:00Z", "location": "I-10"}
//! ]"#).unwrap();
//! let entries = parse_entries(&raw).unwrap();
//!
//! let utc = FixedOffset::east_opt(0).unwrap();
//! let day = Day::new(NaiveDate::from_ymd_opt(2025, 3, 1).unwrap(), utc);
//! let layout = LayoutConfig::default();
//! let segments = TimelineProjector::new(&layout).project(&entries, &day);
//!
//! assert_eq!(segments.len(), 3);
//! assert_eq!(collapse(&entries).len(), 2);
//! ```

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]
#![deny(unsafe_code)]

pub mod cli;
pub mod config;
pub mod entry;
pub mod error;
pub mod fingerprint;
pub mod grid;
pub mod logging;
pub mod planner;
pub mod projector;
pub mod remarks;
pub mod render;
pub mod sheets;
pub mod time;
pub mod trip;

pub use config::{Config, DisplayConfig, LaneConfig, LayoutConfig, PlannerConfig, RecapConfig};
pub use entry::{parse_entries, DutyStatus, DutyStatusEntry, RawEntry, StatusCode};
pub use error::{Error, Result};
pub use fingerprint::{Fingerprint, ProjectionCache};
pub use logging::init_logging;
pub use planner::{HosPlanner, Leg, RouteStop, StopType, TripPlan, TripRequest};
pub use projector::{Segment, TimelineProjector};
pub use remarks::{collapse, format_status, Remark};
pub use sheets::{build_daily_sheets, split_at_midnight, DailyLogSheet, Recap, StatusTotals};
pub use time::{parse_instant, Day};
pub use trip::{DayView, RawDailyLog, TripDetail};
