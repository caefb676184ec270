use approx::assert_abs_diff_eq;

use windgill::config::ExportConfig;
use windgill::error::WindError;
use windgill::report::{MaxStamp, ReportModel};
use windgill::series::{Sample, SampleSeries};

fn series(samples: &[(f64, f64, f64)]) -> SampleSeries {
    SampleSeries::new(
        samples
            .iter()
            .map(|&(s, e, v)| Sample::new(s, e, v))
            .collect(),
    )
}

/// Two speed plateaus and a fixed 90 degree direction over a 20 second range.
fn two_plateau_report() -> ReportModel {
    let speed = series(&[(0.0, 10.0, 5.0), (10.0, 20.0, 7.0)]);
    let direction = series(&[(0.0, 20.0, 90.0)]);
    ReportModel::build(&speed, &direction, &ExportConfig::default()).unwrap()
}

#[test]
fn test_zero_order_hold_on_quarter_second_grid() {
    let report = two_plateau_report();
    assert_eq!(report.rows.len(), 80);

    // 5.0 holds for t in [0, 10), 7.0 from the sample arriving at t=10.
    for (idx, row) in report.rows.iter().enumerate() {
        let expected = if idx < 40 { 5.0 } else { 7.0 };
        assert_eq!(row.speed, Some(expected), "row {idx}");
    }

    // Raw columns only hold values on the ticks where a sample landed.
    assert_eq!(report.rows[0].raw_speed, Some(5.0));
    assert_eq!(report.rows[0].raw_direction, Some(90.0));
    assert_eq!(report.rows[1].raw_speed, None);
    assert_eq!(report.rows[40].raw_speed, Some(7.0));
    assert_eq!(report.rows[41].raw_speed, None);
}

#[test]
fn test_vectors_point_west_east_at_90_degrees() {
    let report = two_plateau_report();
    for row in &report.rows {
        let vector = row.vector.unwrap();
        assert_abs_diff_eq!(vector.x, 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(vector.y, row.speed.unwrap(), epsilon = 1e-12);
    }
}

#[test]
fn test_one_second_window_across_plateau_boundary() {
    let report = two_plateau_report();
    // windows[1] is the 1s window (4 ticks).
    let window = 1;

    // First three rows have too little history.
    for idx in 0..3 {
        assert_eq!(report.rows[idx].windows[window].speed, None);
    }
    assert_eq!(report.rows[3].windows[window].speed, Some(5.0));
    assert_eq!(report.rows[3].windows[window].direction, Some(90.0));

    // t=10.5 spans [5, 7, 7, 7]; t=10.75 spans only 7s.
    assert_eq!(report.rows[42].windows[window].speed, Some(6.5));
    assert_eq!(report.rows[43].windows[window].speed, Some(7.0));
}

#[test]
fn test_held_values_never_revert() {
    // Speed starts five seconds after direction.
    let speed = series(&[(5.0, 10.0, 3.0)]);
    let direction = series(&[(0.0, 10.0, 45.0)]);
    let report = ReportModel::build(&speed, &direction, &ExportConfig::default()).unwrap();

    assert_eq!(report.rows.len(), 40);
    for (idx, row) in report.rows.iter().enumerate() {
        if idx < 20 {
            assert_eq!(row.speed, None, "row {idx} before first speed sample");
            assert_eq!(row.vector, None);
        } else {
            assert_eq!(row.speed, Some(3.0), "row {idx} after first speed sample");
        }
    }

    // The 0.5s window needs its whole span inside the populated region.
    assert_eq!(report.rows[20].windows[0].speed, None);
    assert_eq!(report.rows[21].windows[0].speed, Some(3.0));
}

#[test]
fn test_circular_mean_across_north_wrap() {
    // Equal time at 350 and 10 degrees, constant speed.
    let speed = series(&[(0.0, 20.0, 2.0)]);
    let direction = series(&[(0.0, 10.0, 350.0), (10.0, 20.0, 10.0)]);
    let report = ReportModel::build(&speed, &direction, &ExportConfig::default()).unwrap();

    let summary = report.summary.unwrap();
    assert_eq!(summary.speed, 2.0);
    assert!(
        summary.direction == 0.0 || summary.direction == 360.0,
        "wrap-straddling mean should be north, got {}",
        summary.direction
    );
}

#[test]
fn test_zero_vector_window_carries_direction() {
    // Real wind, then calm below the deadband.
    let speed = series(&[(0.0, 10.0, 1.0), (10.0, 20.0, 0.01)]);
    let direction = series(&[(0.0, 20.0, 90.0)]);
    let report = ReportModel::build(&speed, &direction, &ExportConfig::default()).unwrap();

    // By t=12 the 0.5s window holds only zero vectors.
    let row = &report.rows[48];
    assert_eq!(row.windows[0].speed, Some(0.01));
    assert_eq!(row.windows[0].direction, Some(90.0));

    // And it keeps reporting the carried heading to the end of the range.
    let last = report.rows.last().unwrap();
    assert_eq!(last.windows[0].direction, Some(90.0));
}

#[test]
fn test_insufficient_data() {
    let direction = series(&[(0.0, 10.0, 90.0)]);
    let err =
        ReportModel::build(&SampleSeries::default(), &direction, &ExportConfig::default())
            .unwrap_err();
    assert!(matches!(err, WindError::InsufficientData { series: "speed" }));
}

#[test]
fn test_report_is_deterministic() {
    let a = two_plateau_report();
    let b = two_plateau_report();
    assert_eq!(a, b);
}

#[test]
fn test_maxima_running_max_and_ties() {
    let report = two_plateau_report();

    // Instantaneous max: the first 7.0 tick, with the held direction.
    let inst = &report.maxima[0];
    assert_eq!(inst.speed, Some(7.0));
    assert_eq!(inst.direction, Some(90.0));
    assert_eq!(inst.stamp, Some(MaxStamp::Tick(10.0)));

    // 0.5s window first reaches 7.0 at t=10.25 ([7, 7]); the later equal
    // averages must not displace it.
    let half_second = &report.maxima[1];
    assert_eq!(half_second.speed, Some(7.0));
    assert_eq!(half_second.stamp, Some(MaxStamp::Tick(10.25)));

    // Global average over 40 ticks of 5.0 and 40 of 7.0.
    let global = &report.maxima[10];
    assert_eq!(global.speed, Some(6.0));
    assert_eq!(global.direction, Some(90.0));
    assert_eq!(global.stamp, Some(MaxStamp::Day));
}

#[test]
fn test_sentinel_values_are_ignored() {
    let speed = series(&[(0.0, 5.0, 5.0), (5.0, 10.0, -1.0), (10.0, 20.0, 6.0)]);
    let direction = series(&[(0.0, 20.0, 0.0)]);
    let report = ReportModel::build(&speed, &direction, &ExportConfig::default()).unwrap();

    // The sentinel tick keeps the previous value and leaves raw empty.
    assert_eq!(report.rows[20].raw_speed, None);
    assert_eq!(report.rows[20].speed, Some(5.0));
    assert_eq!(report.rows[40].speed, Some(6.0));
}
