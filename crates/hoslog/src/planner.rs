//! Trip planning under hours-of-service rules.
//!
//! A trip is two driving legs (current location to pickup, pickup to
//! dropoff) framed by on-duty work: a pre-trip inspection, loading,
//! unloading and a post-trip inspection. While driving a leg the planner
//! inserts whatever the rules require before the next hour of driving:
//!
//! - a 34-hour restart once the cycle limit is used up,
//! - a fuel stop every `fuel_interval_miles`,
//! - a 30-minute break after `break_after_driving_hours` of driving,
//! - a 10-hour rest once the daily driving limit or the duty window is used.
//!
//! Routing is not done here: each leg arrives with its miles and,
//! optionally, its driving time. The output is a contiguous list of
//! duty-status entries plus the stops a driver would make, ready for
//! [`build_daily_sheets`].

use chrono::{DateTime, FixedOffset, TimeDelta, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::config::{Config, PlannerConfig, RecapConfig};
use crate::entry::{DutyStatus, DutyStatusEntry};
use crate::error::{Error, Result};
use crate::sheets::{build_daily_sheets, DailyLogSheet};
use crate::time::Day;

/// Hours below this are treated as zero when comparing against limits.
const EPS: f64 = 1e-9;

/// Local hour at which a trip starts when no start time is given.
const DEFAULT_START_HOUR: i64 = 8;

/// One driving leg.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Leg {
    /// Route distance in miles.
    pub miles: f64,
    /// Driving time in hours; derived from the average speed when absent.
    #[serde(default)]
    pub driving_hours: Option<f64>,
}

impl Leg {
    /// A leg with only a distance.
    #[must_use]
    pub fn miles(miles: f64) -> Self {
        Self {
            miles,
            driving_hours: None,
        }
    }

    fn hours(&self, average_speed_mph: f64) -> f64 {
        self.driving_hours
            .unwrap_or(self.miles / average_speed_mph)
    }

    fn check(&self, name: &str) -> Result<()> {
        if !(self.miles.is_finite() && self.miles >= 0.0) {
            return Err(Error::invalid_plan(format!(
                "{name}.miles must be a non-negative number, got {}",
                self.miles
            )));
        }
        if let Some(hours) = self.driving_hours {
            if !(hours.is_finite() && hours >= 0.0) {
                return Err(Error::invalid_plan(format!(
                    "{name}.driving_hours must be a non-negative number, got {hours}"
                )));
            }
        }
        Ok(())
    }
}

/// What the driver is asked to do.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TripRequest {
    /// Where the trip starts.
    pub current_location: String,
    /// Where the load is picked up.
    pub pickup_location: String,
    /// Where the load is delivered.
    pub dropoff_location: String,
    /// On-duty hours already used in the current cycle.
    pub current_cycle_used: f64,
    /// Current location to pickup.
    pub to_pickup: Leg,
    /// Pickup to dropoff.
    pub to_dropoff: Leg,
    /// Start of the pre-trip inspection.
    pub start_time: DateTime<Utc>,
}

/// Today at 08:00 local time.
#[must_use]
pub fn default_start(offset: FixedOffset) -> DateTime<Utc> {
    Day::containing(Utc::now(), offset).start() + TimeDelta::hours(DEFAULT_START_HOUR)
}

/// Kind of stop along the route.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StopType {
    /// Loading at the shipper.
    Pickup,
    /// Unloading at the receiver.
    Dropoff,
    /// Refueling.
    Fuel,
    /// Short break required after a driving stretch.
    Break,
    /// Daily rest or cycle restart.
    Rest,
}

/// A stop the driver makes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteStop {
    /// What kind of stop.
    pub stop_type: StopType,
    /// Where it happens.
    pub location: String,
    /// When the driver arrives.
    pub arrival_time: DateTime<Utc>,
    /// How long the stop lasts.
    pub duration_minutes: i64,
    /// Human-readable description.
    pub description: String,
}

/// Totals for the whole plan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteSummary {
    /// Miles over both legs.
    pub total_distance: f64,
    /// Elapsed hours from the pre-trip inspection to the end of the post-trip.
    pub total_time_hours: f64,
    /// Start of the first entry.
    pub start_time: DateTime<Utc>,
    /// End of the last entry.
    pub end_time: DateTime<Utc>,
}

/// A planned trip: summary, stops and the duty-status log.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TripPlan {
    /// Totals.
    pub route_summary: RouteSummary,
    /// Stops in arrival order.
    pub stops: Vec<RouteStop>,
    /// Contiguous, time-ordered entries.
    pub log_entries: Vec<DutyStatusEntry>,
}

/// A plan together with its daily log sheets, shaped like a trip document.
#[derive(Debug, Serialize)]
pub struct PlannedTrip<'a> {
    /// Miles over both legs.
    pub total_distance: f64,
    /// Totals.
    pub route_summary: &'a RouteSummary,
    /// Stops in arrival order.
    pub stops: &'a [RouteStop],
    /// Contiguous, time-ordered entries.
    pub log_entries: &'a [DutyStatusEntry],
    /// One sheet per calendar day.
    pub daily_logs: Vec<DailyLogSheet>,
}

impl TripPlan {
    /// Split the log into daily sheets.
    #[must_use]
    pub fn daily_sheets(&self, offset: FixedOffset, recap: &RecapConfig) -> Vec<DailyLogSheet> {
        build_daily_sheets(
            &self.log_entries,
            self.route_summary.total_distance,
            offset,
            recap,
        )
    }

    /// The plan as a trip document that `TripDetail` can read back.
    #[must_use]
    pub fn to_trip(&self, offset: FixedOffset, recap: &RecapConfig) -> PlannedTrip<'_> {
        PlannedTrip {
            total_distance: self.route_summary.total_distance,
            route_summary: &self.route_summary,
            stops: &self.stops,
            log_entries: &self.log_entries,
            daily_logs: self.daily_sheets(offset, recap),
        }
    }
}

/// Builds hours-of-service compliant schedules.
#[derive(Debug, Clone, Copy)]
pub struct HosPlanner<'a> {
    rules: &'a PlannerConfig,
    cycle_limit_hours: f64,
}

impl<'a> HosPlanner<'a> {
    /// Create a planner with the rules and cycle limit from `config`.
    #[must_use]
    pub fn new(config: &'a Config) -> Self {
        Self {
            rules: &config.planner,
            cycle_limit_hours: config.recap.cycle_limit_hours,
        }
    }

    /// Plan `request`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidPlan`] if the cycle hours or a leg are
    /// negative or not finite.
    pub fn plan(&self, request: &TripRequest) -> Result<TripPlan> {
        if !(request.current_cycle_used.is_finite() && request.current_cycle_used >= 0.0) {
            return Err(Error::invalid_plan(format!(
                "current_cycle_used must be a non-negative number, got {}",
                request.current_cycle_used
            )));
        }
        request.to_pickup.check("to_pickup")?;
        request.to_dropoff.check("to_dropoff")?;

        let rules = self.rules;
        let mut clock = DutyClock::new(self, request.start_time, request.current_cycle_used);

        clock.record(
            DutyStatus::OnDutyNotDriving,
            rules.inspection_hours,
            &request.current_location,
            Some("Pre-trip inspection"),
        );
        clock.drive(
            request.to_pickup.hours(rules.average_speed_mph),
            "En route to Pickup",
        );

        clock.stop(
            StopType::Pickup,
            &request.pickup_location,
            rules.load_hours,
            "Loading Cargo",
        );
        clock.record(
            DutyStatus::OnDutyNotDriving,
            rules.load_hours,
            &request.pickup_location,
            Some("Loading"),
        );
        clock.drive(
            request.to_dropoff.hours(rules.average_speed_mph),
            "En route to Dropoff",
        );

        clock.stop(
            StopType::Dropoff,
            &request.dropoff_location,
            rules.load_hours,
            "Unloading Cargo",
        );
        clock.record(
            DutyStatus::OnDutyNotDriving,
            rules.load_hours,
            &request.dropoff_location,
            Some("Unloading"),
        );
        clock.record(
            DutyStatus::OnDutyNotDriving,
            rules.inspection_hours,
            &request.dropoff_location,
            Some("Post-trip inspection"),
        );

        let total_distance = request.to_pickup.miles + request.to_dropoff.miles;
        let plan = TripPlan {
            route_summary: RouteSummary {
                total_distance,
                total_time_hours: hours_between(request.start_time, clock.now),
                start_time: request.start_time,
                end_time: clock.now,
            },
            stops: clock.stops,
            log_entries: clock.entries,
        };

        debug!(
            total_distance,
            entries = plan.log_entries.len(),
            stops = plan.stops.len(),
            hours = plan.route_summary.total_time_hours,
            "planned trip"
        );
        Ok(plan)
    }
}

/// Running schedule plus the counters the limits are checked against.
struct DutyClock<'a> {
    rules: &'a PlannerConfig,
    cycle_limit_hours: f64,
    now: DateTime<Utc>,
    driving_since_rest: f64,
    duty_since_rest: f64,
    driving_since_break: f64,
    cycle_hours: f64,
    miles_since_fuel: f64,
    entries: Vec<DutyStatusEntry>,
    stops: Vec<RouteStop>,
}

impl<'a> DutyClock<'a> {
    fn new(planner: &HosPlanner<'a>, start: DateTime<Utc>, cycle_used: f64) -> Self {
        Self {
            rules: planner.rules,
            cycle_limit_hours: planner.cycle_limit_hours,
            now: start,
            driving_since_rest: 0.0,
            duty_since_rest: 0.0,
            driving_since_break: 0.0,
            cycle_hours: cycle_used,
            miles_since_fuel: 0.0,
            entries: Vec::new(),
            stops: Vec::new(),
        }
    }

    /// Append an entry starting now and update the counters.
    fn record(&mut self, status: DutyStatus, hours: f64, location: &str, notes: Option<&str>) {
        if hours <= 0.0 {
            return;
        }

        let end = self.now + duration(hours);
        self.entries.push(DutyStatusEntry {
            duty_status: status.into(),
            start_time: self.now,
            end_time: end,
            location: location.to_string(),
            notes: notes.map(str::to_string),
        });
        self.now = end;

        match status {
            DutyStatus::Driving => {
                self.driving_since_rest += hours;
                self.driving_since_break += hours;
                self.duty_since_rest += hours;
                self.cycle_hours += hours;
            }
            DutyStatus::OnDutyNotDriving => {
                self.duty_since_rest += hours;
                self.cycle_hours += hours;
            }
            DutyStatus::OffDuty | DutyStatus::SleeperBerth => {
                if hours >= self.rules.daily_rest_hours - EPS {
                    self.driving_since_rest = 0.0;
                    self.duty_since_rest = 0.0;
                    self.driving_since_break = 0.0;
                    if hours >= self.rules.restart_hours - EPS {
                        self.cycle_hours = 0.0;
                    }
                }
            }
        }

        if status != DutyStatus::Driving && hours >= self.rules.break_hours - EPS {
            self.driving_since_break = 0.0;
        }
    }

    fn stop(&mut self, stop_type: StopType, location: &str, hours: f64, description: &str) {
        self.stops.push(RouteStop {
            stop_type,
            location: location.to_string(),
            arrival_time: self.now,
            duration_minutes: minutes(hours),
            description: description.to_string(),
        });
    }

    fn stop_and_record(
        &mut self,
        stop_type: StopType,
        status: DutyStatus,
        hours: f64,
        location: &str,
        description: &str,
        notes: &str,
    ) {
        trace!(?stop_type, hours, at = %self.now, "inserting stop");
        self.stop(stop_type, location, hours, description);
        self.record(status, hours, location, Some(notes));
    }

    fn driving_headroom(&self) -> f64 {
        self.rules.max_driving_hours - self.driving_since_rest
    }

    fn duty_headroom(&self) -> f64 {
        self.rules.duty_window_hours - self.duty_since_rest
    }

    fn break_headroom(&self) -> f64 {
        self.rules.break_after_driving_hours - self.driving_since_break
    }

    fn cycle_headroom(&self) -> f64 {
        self.cycle_limit_hours - self.cycle_hours
    }

    fn fuel_headroom(&self) -> f64 {
        (self.rules.fuel_interval_miles - self.miles_since_fuel) / self.rules.average_speed_mph
    }

    /// Drive `hours` in stretches, stopping whenever a limit is reached.
    fn drive(&mut self, hours: f64, location: &str) {
        let speed = self.rules.average_speed_mph;
        let mut remaining = hours;

        while remaining > EPS {
            if self.cycle_headroom() <= EPS {
                self.stop_and_record(
                    StopType::Rest,
                    DutyStatus::OffDuty,
                    self.rules.restart_hours,
                    location,
                    "34-Hour Cycle Restart",
                    "34-Hour Restart",
                );
                continue;
            }

            let stretch = remaining
                .min(self.driving_headroom())
                .min(self.duty_headroom())
                .min(self.break_headroom())
                .min(self.cycle_headroom())
                .min(self.fuel_headroom());

            if stretch > EPS {
                self.record(DutyStatus::Driving, stretch, location, None);
                self.miles_since_fuel += stretch * speed;
                remaining -= stretch;
            }
            if remaining <= EPS {
                break;
            }

            if self.fuel_headroom() <= EPS {
                self.stop_and_record(
                    StopType::Fuel,
                    DutyStatus::OnDutyNotDriving,
                    self.rules.fuel_stop_hours,
                    location,
                    "Fueling Stop",
                    "Fueling",
                );
                self.miles_since_fuel = 0.0;
            } else if self.break_headroom() <= EPS {
                self.stop_and_record(
                    StopType::Break,
                    DutyStatus::OffDuty,
                    self.rules.break_hours,
                    location,
                    "30-Minute Rest Break",
                    "30-Min Break",
                );
            } else if self.driving_headroom() <= EPS || self.duty_headroom() <= EPS {
                self.stop_and_record(
                    StopType::Rest,
                    DutyStatus::OffDuty,
                    self.rules.daily_rest_hours,
                    location,
                    "10-Hour Daily Rest",
                    "10-Hour Rest",
                );
            }
        }
    }
}

#[allow(clippy::cast_possible_truncation)]
fn duration(hours: f64) -> TimeDelta {
    TimeDelta::milliseconds((hours * 3_600_000.0).round() as i64)
}

#[allow(clippy::cast_possible_truncation)]
fn minutes(hours: f64) -> i64 {
    (hours * 60.0).round() as i64
}

#[allow(clippy::cast_precision_loss)]
fn hours_between(start: DateTime<Utc>, end: DateTime<Utc>) -> f64 {
    (end - start).num_milliseconds() as f64 / 3_600_000.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::time::parse_instant;

    const TOL: f64 = 1e-6;

    fn request(cycle_used: f64, to_pickup_hours: f64, to_dropoff_hours: f64) -> TripRequest {
        TripRequest {
            current_location: "Los Angeles, CA".to_string(),
            pickup_location: "Phoenix, AZ".to_string(),
            dropoff_location: "Dallas, TX".to_string(),
            current_cycle_used: cycle_used,
            to_pickup: Leg {
                miles: to_pickup_hours * 55.0,
                driving_hours: Some(to_pickup_hours),
            },
            to_dropoff: Leg {
                miles: to_dropoff_hours * 55.0,
                driving_hours: Some(to_dropoff_hours),
            },
            start_time: parse_instant("start_time", "2025-03-01T08:00:00Z").unwrap(),
        }
    }

    fn plan_with(config: &Config, request: &TripRequest) -> TripPlan {
        HosPlanner::new(config).plan(request).unwrap()
    }

    fn plan(request: &TripRequest) -> TripPlan {
        plan_with(&Config::default(), request)
    }

    fn shape(plan: &TripPlan) -> Vec<(DutyStatus, f64)> {
        plan.log_entries
            .iter()
            .map(|e| (e.status().unwrap(), e.hours()))
            .collect()
    }

    fn assert_shape(plan: &TripPlan, expected: &[(DutyStatus, f64)]) {
        let actual = shape(plan);
        assert_eq!(actual.len(), expected.len(), "entries: {actual:?}");
        for (i, ((status, hours), (want_status, want_hours))) in
            actual.iter().zip(expected).enumerate()
        {
            assert_eq!(status, want_status, "entry {i}: {actual:?}");
            assert!(
                (hours - want_hours).abs() < TOL,
                "entry {i}: expected {want_hours}h, got {hours}h"
            );
        }
    }

    fn stop_types(plan: &TripPlan) -> Vec<StopType> {
        plan.stops.iter().map(|s| s.stop_type).collect()
    }

    use DutyStatus::{Driving as D, OffDuty as OFF, OnDutyNotDriving as ON};

    #[test]
    fn test_short_trip_needs_no_stops() {
        let plan = plan(&request(0.0, 3.0, 4.0));

        assert_shape(
            &plan,
            &[(ON, 0.25), (D, 3.0), (ON, 1.0), (D, 4.0), (ON, 1.0), (ON, 0.25)],
        );
        assert_eq!(stop_types(&plan), [StopType::Pickup, StopType::Dropoff]);
        assert_eq!(
            plan.stops[0].arrival_time,
            parse_instant("t", "2025-03-01T11:15:00Z").unwrap()
        );
        assert_eq!(plan.stops[0].duration_minutes, 60);
        assert_eq!(
            plan.route_summary.end_time,
            parse_instant("t", "2025-03-01T17:30:00Z").unwrap()
        );
        assert!((plan.route_summary.total_time_hours - 9.5).abs() < TOL);
        assert!((plan.route_summary.total_distance - 385.0).abs() < TOL);
        assert_eq!(plan.log_entries[0].notes.as_deref(), Some("Pre-trip inspection"));
        assert_eq!(
            plan.log_entries.last().unwrap().notes.as_deref(),
            Some("Post-trip inspection")
        );
    }

    #[test]
    fn test_break_after_eight_hours_driving() {
        let plan = plan(&request(0.0, 9.0, 1.0));

        assert_shape(
            &plan,
            &[
                (ON, 0.25),
                (D, 8.0),
                (OFF, 0.5),
                (D, 1.0),
                (ON, 1.0),
                (D, 1.0),
                (ON, 1.0),
                (ON, 0.25),
            ],
        );
        assert_eq!(plan.log_entries[2].notes.as_deref(), Some("30-Min Break"));
        assert_eq!(plan.stops[0].stop_type, StopType::Break);
        assert_eq!(plan.stops[0].duration_minutes, 30);
    }

    #[test]
    fn test_daily_rest_after_eleven_hours_driving() {
        let plan = plan(&request(0.0, 12.0, 1.0));

        assert_shape(
            &plan,
            &[
                (ON, 0.25),
                (D, 8.0),
                (OFF, 0.5),
                (D, 3.0),
                (OFF, 10.0),
                (D, 1.0),
                (ON, 1.0),
                (D, 1.0),
                (ON, 1.0),
                (ON, 0.25),
            ],
        );
        assert_eq!(plan.log_entries[4].notes.as_deref(), Some("10-Hour Rest"));
        assert_eq!(
            stop_types(&plan),
            [
                StopType::Break,
                StopType::Rest,
                StopType::Pickup,
                StopType::Dropoff
            ]
        );
    }

    #[test]
    fn test_daily_rest_when_duty_window_runs_out() {
        let mut config = Config::default();
        config.planner.load_hours = 4.0;
        let plan = plan_with(&config, &request(0.0, 4.0, 8.0));

        // 0.25 + 4 + 4 on duty leaves 5.75h of the 14h window.
        assert_shape(
            &plan,
            &[
                (ON, 0.25),
                (D, 4.0),
                (ON, 4.0),
                (D, 5.75),
                (OFF, 10.0),
                (D, 2.25),
                (ON, 4.0),
                (ON, 0.25),
            ],
        );
    }

    #[test]
    fn test_restart_when_cycle_runs_out_mid_leg() {
        let plan = plan(&request(69.0, 3.0, 0.0));

        assert_shape(
            &plan,
            &[
                (ON, 0.25),
                (D, 0.75),
                (OFF, 34.0),
                (D, 2.25),
                (ON, 1.0),
                (ON, 1.0),
                (ON, 0.25),
            ],
        );
        assert_eq!(plan.log_entries[2].notes.as_deref(), Some("34-Hour Restart"));
        assert_eq!(plan.stops[0].stop_type, StopType::Rest);
        assert_eq!(plan.stops[0].duration_minutes, 34 * 60);
        assert_eq!(plan.stops[0].description, "34-Hour Cycle Restart");
    }

    #[test]
    fn test_restart_before_driving_when_cycle_is_spent() {
        let plan = plan(&request(70.0, 2.0, 0.0));

        assert_eq!(plan.log_entries[1].status(), Some(OFF));
        assert!((plan.log_entries[1].hours() - 34.0).abs() < TOL);
        assert_eq!(plan.log_entries[2].status(), Some(D));
    }

    #[test]
    fn test_fuel_stop_at_interval() {
        let mut config = Config::default();
        config.planner.fuel_interval_miles = 300.0;
        let plan = plan_with(&config, &request(0.0, 7.0, 0.0));

        let to_fuel = 300.0 / 55.0;
        assert_shape(
            &plan,
            &[
                (ON, 0.25),
                (D, to_fuel),
                (ON, 0.25),
                (D, 7.0 - to_fuel),
                (ON, 1.0),
                (ON, 1.0),
                (ON, 0.25),
            ],
        );
        assert_eq!(plan.log_entries[2].notes.as_deref(), Some("Fueling"));
        assert_eq!(stop_types(&plan)[0], StopType::Fuel);
        assert_eq!(plan.stops[0].duration_minutes, 15);
    }

    #[test]
    fn test_leg_hours_default_to_average_speed() {
        let mut req = request(0.0, 0.0, 0.0);
        req.to_pickup = Leg::miles(110.0);
        let plan = plan(&req);

        assert_shape(&plan, &[(ON, 0.25), (D, 2.0), (ON, 1.0), (ON, 1.0), (ON, 0.25)]);
    }

    #[test]
    fn test_long_haul_respects_every_limit() {
        let rules = PlannerConfig::default();
        let plan = plan(&request(20.0, 6.0, 40.0));

        let driving: f64 = plan
            .log_entries
            .iter()
            .filter(|e| e.status() == Some(D))
            .map(DutyStatusEntry::hours)
            .sum();
        assert!((driving - 46.0).abs() < 1e-3);

        let (mut since_rest, mut since_break, mut miles) = (0.0, 0.0, 0.0);
        for (prev, next) in plan.log_entries.iter().zip(&plan.log_entries[1..]) {
            assert_eq!(prev.end_time, next.start_time);
        }
        for entry in &plan.log_entries {
            let hours = entry.hours();
            match entry.status() {
                Some(D) => {
                    since_rest += hours;
                    since_break += hours;
                    miles += hours * rules.average_speed_mph;
                }
                Some(OFF) if hours >= rules.daily_rest_hours => {
                    since_rest = 0.0;
                    since_break = 0.0;
                }
                _ if hours >= rules.break_hours => since_break = 0.0,
                _ => {}
            }
            if entry.notes.as_deref() == Some("Fueling") {
                miles = 0.0;
            }
            assert!(since_rest <= rules.max_driving_hours + 1e-3);
            assert!(since_break <= rules.break_after_driving_hours + 1e-3);
            assert!(miles <= rules.fuel_interval_miles + 1e-3);
        }
        assert!(plan.stops.iter().any(|s| s.stop_type == StopType::Fuel));
    }

    #[test]
    fn test_rejects_negative_leg() {
        let mut req = request(0.0, 1.0, 1.0);
        req.to_dropoff.miles = -5.0;

        let err = HosPlanner::new(&Config::default()).plan(&req).unwrap_err();
        assert!(matches!(err, Error::InvalidPlan { .. }));
        assert!(err.to_string().contains("to_dropoff.miles"));
    }

    #[test]
    fn test_rejects_non_finite_cycle() {
        let err = HosPlanner::new(&Config::default())
            .plan(&request(f64::NAN, 1.0, 1.0))
            .unwrap_err();
        assert!(err.to_string().contains("current_cycle_used"));
    }

    #[test]
    fn test_daily_sheets_cover_every_day() {
        let plan = plan(&request(0.0, 12.0, 1.0));
        let sheets = plan.daily_sheets(FixedOffset::east_opt(0).unwrap(), &RecapConfig::default());

        assert_eq!(sheets.len(), 2);
        let driving: f64 = sheets.iter().map(|s| s.totals.total_driving).sum();
        assert!((driving - 13.0).abs() < 0.02);
    }

    #[test]
    fn test_default_start_is_eight_local() {
        let offset = FixedOffset::west_opt(5 * 3600).unwrap();
        let start = default_start(offset).with_timezone(&offset);
        assert_eq!(start.format("%H:%M").to_string(), "08:00");
    }
}
