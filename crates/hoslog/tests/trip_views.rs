//! End-to-end checks over a two-day trip document.

use hoslog::{
    build_daily_sheets, collapse, parse_instant, Config, DutyStatus, HosPlanner, Leg,
    ProjectionCache, Segment, TripDetail, TripRequest,
};

const TRIP: &str = r#"{
    "id": "trip-42",
    "total_distance": 600,
    "log_entries": [
        {"duty_status": "OFF_DUTY", "start_time": "2025-03-01T00:00:00Z", "end_time": "2025-03-01T08:00:00Z", "location": "Depot"},
        {"duty_status": "ON_DUTY_NOT_DRIVING", "start_time": "2025-03-01T08:00:00Z", "end_time": "2025-03-01T09:00:00Z", "location": "Depot", "notes": "Pre-trip inspection"},
        {"duty_status": "DRIVING", "start_time": "2025-03-01T09:00:00Z", "end_time": "2025-03-01T17:00:00Z", "location": "I-10"},
        {"duty_status": "OFF_DUTY", "start_time": "2025-03-01T17:00:00Z", "end_time": "2025-03-02T06:00:00Z", "location": "Motel"},
        {"duty_status": "DRIVING", "start_time": "2025-03-02T06:00:00Z", "end_time": "2025-03-02T10:00:00Z", "location": "I-40"}
    ],
    "daily_logs": [
        {
            "date": "2025-03-01",
            "log_entries": [
                {"duty_status": "OFF_DUTY", "start_time": "2025-03-01T00:00:00Z", "end_time": "2025-03-01T08:00:00Z", "location": "Depot"},
                {"duty_status": "ON_DUTY_NOT_DRIVING", "start_time": "2025-03-01T08:00:00Z", "end_time": "2025-03-01T09:00:00Z", "location": "Depot"},
                {"duty_status": "DRIVING", "start_time": "2025-03-01T09:00:00Z", "end_time": "2025-03-01T17:00:00Z", "location": "I-10"},
                {"duty_status": "OFF_DUTY", "start_time": "2025-03-01T17:00:00Z", "end_time": "2025-03-02T06:00:00Z", "location": "Motel"}
            ]
        },
        {
            "date": "2025-03-02",
            "log_entries": [
                {"duty_status": "OFF_DUTY", "start_time": "2025-03-01T17:00:00Z", "end_time": "2025-03-02T06:00:00Z", "location": "Motel"},
                {"duty_status": "DRIVING", "start_time": "2025-03-02T06:00:00Z", "end_time": "2025-03-02T10:00:00Z", "location": "I-40"}
            ]
        }
    ]
}"#;

fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}

fn durations(segments: &[Segment]) -> Vec<(DutyStatus, f64, f64)> {
    segments
        .iter()
        .filter_map(|s| match *s {
            Segment::Duration {
                status,
                x_start,
                x_end,
                ..
            } => Some((status, x_start, x_end)),
            Segment::Transition { .. } => None,
        })
        .collect()
}

#[test]
fn test_first_day_fills_the_grid() {
    let config = Config::default();
    let trip = TripDetail::from_json(TRIP).unwrap();
    let view = trip.daily_log(0).unwrap().view(&config).unwrap();

    let bars = durations(&view.segments);
    assert_eq!(bars.len(), 4);
    assert_eq!(view.segments.len(), 7);

    assert_close(bars[0].1, 120.0);
    assert_close(bars[0].2, 400.0);
    assert_close(bars[2].1, 435.0);
    assert_close(bars[2].2, 715.0);
    // The overnight rest is clipped at the right edge.
    assert_eq!(bars[3].0, DutyStatus::OffDuty);
    assert_close(bars[3].2, 960.0);

    let total: f64 = bars.iter().map(|(_, a, b)| b - a).sum();
    assert_close(total, 840.0);
}

#[test]
fn test_second_day_clips_carried_over_rest() {
    let config = Config::default();
    let trip = TripDetail::from_json(TRIP).unwrap();
    let view = trip.daily_log(1).unwrap().view(&config).unwrap();

    let bars = durations(&view.segments);
    assert_eq!(bars.len(), 2);
    assert_close(bars[0].1, 120.0);
    assert_close(bars[0].2, 330.0);
    assert_close(bars[1].2, 470.0);

    assert!(view.segments.contains(&Segment::Transition {
        x: 330.0,
        y_from: 30.0,
        y_to: 110.0,
    }));

    assert_eq!(view.remarks.len(), 2);
    assert_eq!(view.remarks[0].location, "Motel");
}

#[test]
fn test_segments_stay_inside_the_grid() {
    let config = Config::default();
    let trip = TripDetail::from_json(TRIP).unwrap();
    let (lo, hi) = (config.layout.x0, config.layout.x_end());

    for index in 0..trip.daily_logs.len() {
        let view = trip.daily_log(index).unwrap().view(&config).unwrap();
        for segment in &view.segments {
            match *segment {
                Segment::Duration { x_start, x_end, .. } => {
                    assert!(lo <= x_start && x_start <= x_end && x_end <= hi);
                }
                Segment::Transition { x, .. } => assert!(lo <= x && x <= hi),
            }
        }
    }
}

#[test]
fn test_remarks_over_whole_trip() {
    let trip = TripDetail::from_json(TRIP).unwrap();
    let entries = trip.entries().unwrap();
    let remarks = collapse(&entries);

    assert_eq!(remarks.len(), 5);
    assert_eq!(collapse(&entries), remarks);
}

#[test]
fn test_sheets_split_trip_by_day() {
    let config = Config::default();
    let trip = TripDetail::from_json(TRIP).unwrap();
    let entries = trip.entries().unwrap();

    let sheets = build_daily_sheets(
        &entries,
        trip.total_distance(),
        config.display.offset(),
        &config.recap,
    );

    assert_eq!(sheets.len(), 2);

    let first = &sheets[0];
    assert_close(first.totals.total_off_duty, 15.0);
    assert_close(first.totals.total_on_duty, 1.0);
    assert_close(first.totals.total_driving, 8.0);
    assert_close(first.total_miles_driving, 400.0);
    assert_close(first.recap.available_tomorrow, 61.0);
    assert_eq!(first.remarks, "Day 1 of trip");

    let second = &sheets[1];
    assert_close(second.totals.total_off_duty, 6.0);
    assert_close(second.totals.total_driving, 4.0);
    assert_close(second.total_miles_driving, 200.0);
    assert_close(second.recap.available_tomorrow, 66.0);
    assert_eq!(second.remarks, "Day 2 of trip");
}

#[test]
fn test_cache_matches_direct_projection() {
    let config = Config::default();
    let trip = TripDetail::from_json(TRIP).unwrap();
    let log = trip.daily_log(0).unwrap();
    let entries = log.entries().unwrap();
    let day = log.day(&config).unwrap();
    let expected = log.view(&config).unwrap().segments;

    let mut cache = ProjectionCache::new(config.layout.clone());
    assert_eq!(cache.project(&entries, &day), expected.as_slice());
    assert_eq!(cache.project(&entries, &day), expected.as_slice());
    assert_eq!(cache.hits(), 1);
    assert_eq!(cache.misses(), 1);
}

#[test]
fn test_out_of_range_day() {
    let trip = TripDetail::from_json(TRIP).unwrap();
    let err = trip.daily_log(9).unwrap_err();
    assert!(err.to_string().contains("2 daily log(s)"));
}

#[test]
fn test_planned_trip_reads_back_as_trip_document() {
    let config = Config::default();
    let request = TripRequest {
        current_location: "Los Angeles, CA".to_string(),
        pickup_location: "Phoenix, AZ".to_string(),
        dropoff_location: "Dallas, TX".to_string(),
        current_cycle_used: 10.0,
        to_pickup: Leg::miles(372.0),
        to_dropoff: Leg::miles(1065.0),
        start_time: parse_instant("start_time", "2025-03-01T08:00:00Z").unwrap(),
    };
    let plan = HosPlanner::new(&config).plan(&request).unwrap();
    let document = plan.to_trip(config.display.offset(), &config.recap);
    let json = serde_json::to_string(&document).unwrap();

    let trip = TripDetail::from_json(&json).unwrap();
    assert_close(trip.total_distance(), 1437.0);
    assert_eq!(trip.entries().unwrap(), plan.log_entries);
    assert!(trip.daily_logs.len() >= 2);

    let (lo, hi) = (config.layout.x0, config.layout.x_end());
    for index in 0..trip.daily_logs.len() {
        let view = trip.daily_log(index).unwrap().view(&config).unwrap();
        assert!(!view.segments.is_empty());
        assert!(!view.remarks.is_empty());
        for segment in &view.segments {
            if let Segment::Duration { x_start, x_end, .. } = *segment {
                assert!(lo <= x_start && x_start <= x_end && x_end <= hi);
            }
        }
    }
}
