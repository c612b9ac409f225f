//! `hoslog` - CLI for the Hours-of-Service log engine
//!
//! Reads a trip document and prints day charts, remarks lists and daily log
//! sheets, or plans a new trip's duty schedule.

#![warn(missing_debug_implementations)]
#![deny(unsafe_code)]

use std::path::Path;

use anyhow::Context;
use clap::Parser;
use tracing::{debug, info};

use hoslog::cli::{
    ChartCommand, ChartFormat, Cli, Command, ConfigCommand, OutputFormat, PlanCommand,
    RemarksCommand, SheetsCommand,
};
use hoslog::planner::default_start;
use hoslog::render::{render_remarks, render_svg, render_text};
use hoslog::{
    build_daily_sheets, format_status, init_logging, parse_instant, Config, DayView, HosPlanner,
    Leg, TripDetail, TripRequest,
};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbosity());

    let config = Config::load_from(cli.config.clone()).context("failed to load configuration")?;

    match cli.command {
        Command::Chart(cmd) => handle_chart(&config, &cmd),
        Command::Remarks(cmd) => handle_remarks(&config, &cmd),
        Command::Sheets(cmd) => handle_sheets(&config, &cmd),
        Command::Plan(cmd) => handle_plan(&config, cmd),
        Command::Config(cmd) => handle_config(&config, cmd),
    }
}

fn load_trip(path: &Path) -> anyhow::Result<TripDetail> {
    let trip = TripDetail::from_path(path)
        .with_context(|| format!("failed to read trip from {}", path.display()))?;
    info!(path = %path.display(), id = %trip.id, "trip loaded");
    Ok(trip)
}

fn day_view(config: &Config, trip: &TripDetail, index: usize) -> anyhow::Result<DayView> {
    let log = trip.daily_log(index)?;
    let view = log
        .view(config)
        .with_context(|| format!("daily log {index} ({}) is malformed", log.date))?;
    debug!(
        day = %view.day,
        segments = view.segments.len(),
        remarks = view.remarks.len(),
        "day view built"
    );
    Ok(view)
}

fn handle_chart(config: &Config, cmd: &ChartCommand) -> anyhow::Result<()> {
    let trip = load_trip(&cmd.trip)?;
    let view = day_view(config, &trip, cmd.day)?;

    match cmd.format {
        ChartFormat::Svg => print!("{}", render_svg(&view.segments, &config.layout)),
        ChartFormat::Json => println!("{}", serde_json::to_string_pretty(&view.segments)?),
        ChartFormat::Text => {
            println!("{}", view.day);
            print!("{}", render_text(&view.segments));
        }
    }
    Ok(())
}

fn handle_remarks(config: &Config, cmd: &RemarksCommand) -> anyhow::Result<()> {
    let trip = load_trip(&cmd.trip)?;
    let view = day_view(config, &trip, cmd.day)?;

    match cmd.format {
        OutputFormat::Plain => {
            if view.remarks.is_empty() {
                println!("No remarks for {}.", view.day);
            } else {
                print!("{}", render_remarks(&view.remarks, &config.display));
            }
        }
        OutputFormat::Json => {
            let remarks: Vec<serde_json::Value> = view
                .remarks
                .iter()
                .map(|r| {
                    serde_json::json!({
                        "time": r.formatted_time(&config.display),
                        "location": r.location,
                        "status": r.status,
                        "label": r.status_label(),
                    })
                })
                .collect();
            println!("{}", serde_json::to_string_pretty(&remarks)?);
        }
    }
    Ok(())
}

fn handle_sheets(config: &Config, cmd: &SheetsCommand) -> anyhow::Result<()> {
    let trip = load_trip(&cmd.trip)?;
    let entries = trip.entries().context("trip log entries are malformed")?;
    let distance = cmd.distance.unwrap_or_else(|| trip.total_distance());

    let sheets = build_daily_sheets(&entries, distance, config.display.offset(), &config.recap);

    if cmd.json {
        println!("{}", serde_json::to_string_pretty(&sheets)?);
        return Ok(());
    }

    if sheets.is_empty() {
        println!("Trip has no log entries.");
        return Ok(());
    }

    println!(
        "{:<10}  {:>7}  {:>7}  {:>7}  {:>7}  {:>8}  {:>9}",
        "Date", "Off", "Sleeper", "Driving", "On Duty", "Miles", "Available"
    );
    for sheet in &sheets {
        println!(
            "{:<10}  {:>7.2}  {:>7.2}  {:>7.2}  {:>7.2}  {:>8.1}  {:>9.2}",
            sheet.date.to_string(),
            sheet.totals.total_off_duty,
            sheet.totals.total_sleeper,
            sheet.totals.total_driving,
            sheet.totals.total_on_duty,
            sheet.total_miles_driving,
            sheet.recap.available_tomorrow,
        );
    }
    Ok(())
}

fn handle_plan(config: &Config, cmd: PlanCommand) -> anyhow::Result<()> {
    let offset = config.display.offset();
    let start_time = match cmd.start.as_deref() {
        Some(value) => parse_instant("start", value)?,
        None => default_start(offset),
    };
    let request = TripRequest {
        current_location: cmd.from,
        pickup_location: cmd.pickup,
        dropoff_location: cmd.dropoff,
        current_cycle_used: cmd.cycle_used,
        to_pickup: Leg {
            miles: cmd.pickup_miles,
            driving_hours: cmd.pickup_hours,
        },
        to_dropoff: Leg {
            miles: cmd.dropoff_miles,
            driving_hours: cmd.dropoff_hours,
        },
        start_time,
    };

    let plan = HosPlanner::new(config).plan(&request)?;
    info!(
        entries = plan.log_entries.len(),
        stops = plan.stops.len(),
        "trip planned"
    );

    if cmd.json {
        let trip = plan.to_trip(offset, &config.recap);
        println!("{}", serde_json::to_string_pretty(&trip)?);
        return Ok(());
    }

    let summary = &plan.route_summary;
    println!(
        "{:.1} mi, {:.2} h ({} to {})",
        summary.total_distance,
        summary.total_time_hours,
        summary.start_time.with_timezone(&offset).format("%Y-%m-%d %H:%M"),
        summary.end_time.with_timezone(&offset).format("%Y-%m-%d %H:%M"),
    );
    println!();
    println!("Stops");
    for stop in &plan.stops {
        println!(
            "  {}  {:<8}  {:>5} min  {}  ({})",
            stop.arrival_time.with_timezone(&offset).format("%m-%d %H:%M"),
            format!("{:?}", stop.stop_type),
            stop.duration_minutes,
            stop.location,
            stop.description,
        );
    }
    println!();
    println!("Log");
    for entry in &plan.log_entries {
        println!(
            "  {}  {:>6.2} h  {:<20}  {}{}",
            entry.start_time.with_timezone(&offset).format("%m-%d %H:%M"),
            entry.hours(),
            format_status(entry.duty_status.as_str()),
            entry.location,
            entry
                .notes
                .as_deref()
                .map(|n| format!(" - {n}"))
                .unwrap_or_default(),
        );
    }
    Ok(())
}

fn handle_config(config: &Config, cmd: ConfigCommand) -> anyhow::Result<()> {
    match cmd {
        ConfigCommand::Show { json } => {
            if json {
                println!("{}", serde_json::to_string_pretty(config)?);
            } else {
                let lanes = &config.layout.lanes;
                println!("Current Configuration");
                println!("=====================");
                println!();
                println!("[Layout]");
                println!("  Grid x0:            {}", config.layout.x0);
                println!("  Grid width:         {}", config.layout.width);
                println!("  Hours:              {}", config.layout.hours);
                println!("  Ticks per hour:     {}", config.layout.ticks_per_hour);
                println!(
                    "  Lanes (y):          off={} sleeper={} driving={} on={}",
                    lanes.off_duty, lanes.sleeper_berth, lanes.driving, lanes.on_duty_not_driving
                );
                println!();
                println!("[Display]");
                println!("  UTC offset (min):   {}", config.display.utc_offset_minutes);
                println!("  Time format:        {}", config.display.time_format);
                println!();
                println!("[Recap]");
                println!("  Cycle limit (h):    {}", config.recap.cycle_limit_hours);
                println!();
                println!("[Planner]");
                println!("  Average speed:      {} mph", config.planner.average_speed_mph);
                println!(
                    "  Driving / duty (h): {} / {}",
                    config.planner.max_driving_hours, config.planner.duty_window_hours
                );
                println!(
                    "  Break after (h):    {}",
                    config.planner.break_after_driving_hours
                );
                println!("  Fuel every (mi):    {}", config.planner.fuel_interval_miles);
            }
        }
        ConfigCommand::Path => {
            println!("{}", Config::default_config_path().display());
        }
        ConfigCommand::Validate { file } => {
            let path = file.unwrap_or_else(Config::default_config_path);
            println!("Validating configuration: {}", path.display());
            match Config::load_from(Some(path)) {
                Ok(_) => println!("Configuration is valid."),
                Err(e) => println!("Configuration error: {e}"),
            }
        }
    }
    Ok(())
}
