//! Configuration management for hoslog.
//!
//! Chart geometry, display preferences and recap limits are loaded with
//! figment from defaults, an optional TOML file and `HOSLOG_` environment
//! variables. The resulting [`LayoutConfig`] is handed explicitly to the
//! projector and the grid builder; nothing in the engine reads globals.

use std::path::PathBuf;

use chrono::format::{Item, StrftimeItems};
use chrono::{FixedOffset, Offset, Utc};
use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};

use crate::entry::DutyStatus;
use crate::error::{Error, Result};

/// Default configuration file name.
const CONFIG_FILE_NAME: &str = "config.toml";

/// Directory name under the platform config dir.
const CONFIG_DIR_NAME: &str = "hoslog";

/// Prefix for environment overrides, e.g. `HOSLOG_LAYOUT__WIDTH=900`.
const ENV_PREFIX: &str = "HOSLOG_";

/// Largest accepted magnitude for a UTC offset, in minutes.
const MAX_OFFSET_MINUTES: u32 = 24 * 60 - 1;

/// Upper bound for `layout.hours`.
const MAX_HOURS: u32 = 48;

/// Upper bound for `layout.ticks_per_hour` (one tick per minute).
const MAX_TICKS_PER_HOUR: u32 = 60;

/// Application configuration.
///
/// Loaded from (highest precedence first):
/// 1. Environment variables prefixed with `HOSLOG_`, nested with `__`
/// 2. TOML config file at `~/.config/hoslog/config.toml`
/// 3. Default values
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Chart geometry.
    pub layout: LayoutConfig,
    /// Time zone and formatting.
    pub display: DisplayConfig,
    /// Recap calculation limits.
    pub recap: RecapConfig,
    /// Hours-of-service rules used when planning a trip.
    pub planner: PlannerConfig,
}

/// Geometry of the 24-hour chart.
///
/// `x0` and `width` define the horizontal axis: midnight sits at `x0`, the
/// following midnight at `x0 + width`. Each duty status owns one lane.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// X coordinate of 0:00.
    pub x0: f64,
    /// Horizontal extent of the 24-hour axis.
    pub width: f64,
    /// Lane y positions, one per duty status.
    pub lanes: LaneConfig,
    /// Number of hour columns on the axis.
    pub hours: u32,
    /// Subdivisions drawn inside each hour.
    pub ticks_per_hour: u32,
    /// Every n-th hour line is drawn heavier.
    pub major_hour_every: u32,
    /// Top of the vertical grid lines.
    pub grid_top: f64,
    /// Bottom of the vertical grid lines.
    pub grid_bottom: f64,
    /// Baseline of the hour labels.
    pub label_y: f64,
    /// Width of the SVG view box.
    pub view_width: f64,
    /// Height of the SVG view box.
    pub view_height: f64,
}

/// Vertical position of each duty-status lane.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LaneConfig {
    /// Lane for [`DutyStatus::OffDuty`].
    pub off_duty: f64,
    /// Lane for [`DutyStatus::SleeperBerth`].
    pub sleeper_berth: f64,
    /// Lane for [`DutyStatus::Driving`].
    pub driving: f64,
    /// Lane for [`DutyStatus::OnDutyNotDriving`].
    pub on_duty_not_driving: f64,
}

/// Display preferences.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Offset from UTC that defines local midnight, in minutes.
    pub utc_offset_minutes: i32,
    /// `chrono` format string for remark times.
    pub time_format: String,
}

/// Limits used for the daily recap.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RecapConfig {
    /// On-duty hours allowed in the rolling cycle (70 hours / 8 days).
    pub cycle_limit_hours: f64,
}

/// Hours-of-service rules for trip planning (property-carrying driver,
/// 70 hours / 8 days). The cycle limit itself lives in [`RecapConfig`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlannerConfig {
    /// Speed used to turn miles into driving hours when a leg has no duration.
    pub average_speed_mph: f64,
    /// Driving allowed between daily rests.
    pub max_driving_hours: f64,
    /// On-duty hours allowed between daily rests.
    pub duty_window_hours: f64,
    /// Driving allowed before a break is required.
    pub break_after_driving_hours: f64,
    /// Length of the required break.
    pub break_hours: f64,
    /// Off-duty time that resets the daily limits.
    pub daily_rest_hours: f64,
    /// Off-duty time that resets the cycle.
    pub restart_hours: f64,
    /// Miles between fuel stops.
    pub fuel_interval_miles: f64,
    /// Length of a fuel stop (on duty).
    pub fuel_stop_hours: f64,
    /// Pre-trip and post-trip inspection length (on duty).
    pub inspection_hours: f64,
    /// Loading and unloading time at pickup and dropoff (on duty).
    pub load_hours: f64,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            x0: 120.0,
            width: 840.0,
            lanes: LaneConfig::default(),
            hours: 24,
            ticks_per_hour: 4,
            major_hour_every: 6,
            grid_top: 20.0,
            grid_bottom: 160.0,
            label_y: 180.0,
            view_width: 1000.0,
            view_height: 200.0,
        }
    }
}

impl Default for LaneConfig {
    fn default() -> Self {
        Self {
            off_duty: 30.0,
            sleeper_berth: 70.0,
            driving: 110.0,
            on_duty_not_driving: 150.0,
        }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            utc_offset_minutes: 0,
            time_format: "%H:%M".to_string(),
        }
    }
}

impl Default for RecapConfig {
    fn default() -> Self {
        Self {
            cycle_limit_hours: 70.0,
        }
    }
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            average_speed_mph: 55.0,
            max_driving_hours: 11.0,
            duty_window_hours: 14.0,
            break_after_driving_hours: 8.0,
            break_hours: 0.5,
            daily_rest_hours: 10.0,
            restart_hours: 34.0,
            fuel_interval_miles: 1000.0,
            fuel_stop_hours: 0.25,
            inspection_hours: 0.25,
            load_hours: 1.0,
        }
    }
}

impl LaneConfig {
    /// Lane y position for a duty status.
    #[must_use]
    pub fn y(&self, status: DutyStatus) -> f64 {
        match status {
            DutyStatus::OffDuty => self.off_duty,
            DutyStatus::SleeperBerth => self.sleeper_berth,
            DutyStatus::Driving => self.driving,
            DutyStatus::OnDutyNotDriving => self.on_duty_not_driving,
        }
    }
}

impl LayoutConfig {
    /// Right edge of the axis (24:00).
    #[must_use]
    pub fn x_end(&self) -> f64 {
        self.x0 + self.width
    }

    /// Lane y position for a duty status.
    #[must_use]
    pub fn lane_y(&self, status: DutyStatus) -> f64 {
        self.lanes.y(status)
    }
}

impl DisplayConfig {
    /// The configured UTC offset.
    ///
    /// Out-of-range values (rejected by [`Config::validate`]) fall back to UTC.
    #[must_use]
    pub fn offset(&self) -> FixedOffset {
        self.utc_offset_minutes
            .checked_mul(60)
            .and_then(FixedOffset::east_opt)
            .unwrap_or_else(|| Utc.fix())
    }
}

impl Config {
    /// Load configuration from all sources.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration loading, parsing or validation fails.
    pub fn load() -> Result<Self> {
        Self::load_from(None)
    }

    /// Load configuration with an optional custom config path.
    ///
    /// A missing file is not an error; defaults and environment still apply.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration loading, parsing or validation fails.
    pub fn load_from(config_path: Option<PathBuf>) -> Result<Self> {
        let config_file = config_path.unwrap_or_else(Self::default_config_path);

        let figment = Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Toml::file(&config_file))
            .merge(Env::prefixed(ENV_PREFIX).split("__"));

        let config: Config = figment.extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Get the default configuration file path.
    #[must_use]
    pub fn default_config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from(".config"))
            .join(CONFIG_DIR_NAME)
            .join(CONFIG_FILE_NAME)
    }

    /// Validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ConfigValidation`] naming the first offending value.
    pub fn validate(&self) -> Result<()> {
        let layout = &self.layout;

        if !layout.x0.is_finite() {
            return Err(Error::config_validation("layout.x0 must be finite"));
        }
        if !(layout.width.is_finite() && layout.width > 0.0) {
            return Err(Error::config_validation(format!(
                "layout.width must be positive, got {}",
                layout.width
            )));
        }
        if !(1..=MAX_HOURS).contains(&layout.hours) {
            return Err(Error::config_validation(format!(
                "layout.hours must be between 1 and {MAX_HOURS}, got {}",
                layout.hours
            )));
        }
        if !(1..=MAX_TICKS_PER_HOUR).contains(&layout.ticks_per_hour) {
            return Err(Error::config_validation(format!(
                "layout.ticks_per_hour must be between 1 and {MAX_TICKS_PER_HOUR}, got {}",
                layout.ticks_per_hour
            )));
        }
        if layout.major_hour_every == 0 {
            return Err(Error::config_validation(
                "layout.major_hour_every must be greater than 0",
            ));
        }

        let lanes = DutyStatus::ALL.map(|s| layout.lane_y(s));
        for (i, a) in lanes.iter().enumerate() {
            if !a.is_finite() {
                return Err(Error::config_validation("lane positions must be finite"));
            }
            if lanes[i + 1..].iter().any(|b| (a - b).abs() < f64::EPSILON) {
                return Err(Error::config_validation(format!(
                    "lane position {a} is used by more than one duty status"
                )));
            }
        }

        if self.display.utc_offset_minutes.unsigned_abs() > MAX_OFFSET_MINUTES {
            return Err(Error::config_validation(format!(
                "display.utc_offset_minutes ({}) must be within ±{MAX_OFFSET_MINUTES}",
                self.display.utc_offset_minutes
            )));
        }
        if self.display.time_format.trim().is_empty() {
            return Err(Error::config_validation("display.time_format must not be empty"));
        }
        if StrftimeItems::new(&self.display.time_format).any(|item| matches!(item, Item::Error)) {
            return Err(Error::config_validation(format!(
                "display.time_format is not a valid strftime pattern: {:?}",
                self.display.time_format
            )));
        }

        if !(self.recap.cycle_limit_hours.is_finite() && self.recap.cycle_limit_hours > 0.0) {
            return Err(Error::config_validation(
                "recap.cycle_limit_hours must be positive",
            ));
        }

        self.planner.validate()
    }
}

impl PlannerConfig {
    fn validate(&self) -> Result<()> {
        let positive = [
            ("average_speed_mph", self.average_speed_mph),
            ("max_driving_hours", self.max_driving_hours),
            ("duty_window_hours", self.duty_window_hours),
            ("break_after_driving_hours", self.break_after_driving_hours),
            ("break_hours", self.break_hours),
            ("daily_rest_hours", self.daily_rest_hours),
            ("restart_hours", self.restart_hours),
            ("fuel_interval_miles", self.fuel_interval_miles),
        ];
        for (name, value) in positive {
            if !(value.is_finite() && value > 0.0) {
                return Err(Error::config_validation(format!(
                    "planner.{name} must be positive, got {value}"
                )));
            }
        }

        let non_negative = [
            ("fuel_stop_hours", self.fuel_stop_hours),
            ("inspection_hours", self.inspection_hours),
            ("load_hours", self.load_hours),
        ];
        for (name, value) in non_negative {
            if !(value.is_finite() && value >= 0.0) {
                return Err(Error::config_validation(format!(
                    "planner.{name} must not be negative, got {value}"
                )));
            }
        }

        if self.restart_hours < self.daily_rest_hours {
            return Err(Error::config_validation(
                "planner.restart_hours must be at least planner.daily_rest_hours",
            ));
        }
        Ok(())
    }
}
