mod common;
use chrono::{NaiveDate, NaiveDateTime};
use common::{basic_rows, day_rows, export_text};
use glucograph::core::loader::parse_export;
use glucograph::core::window::select_window;
use glucograph::errors::AppError;
use glucograph::models::Dataset;

fn ts(d: u32, m: u32, y: i32, h: u32, min: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(y, m, d)
        .unwrap()
        .and_hms_opt(h, min, 0)
        .unwrap()
}

#[test]
fn test_window_includes_both_rows_of_basic_scenario() {
    let ds = parse_export(&export_text(&basic_rows())).unwrap();
    let w = select_window(&ds, 24).unwrap();

    assert_eq!(w.end, ts(1, 1, 2023, 12, 0));
    assert_eq!(w.start, ts(31, 12, 2022, 12, 0));
    assert_eq!(w.len(), 2);
}

#[test]
fn test_window_bounds_are_inclusive() {
    let rows = vec![
        ("01/01/2023 09:59", "4.0", ""), // just outside
        ("01/01/2023 10:00", "5.0", ""), // exactly T - 24h
        ("01/01/2023 22:00", "6.0", ""),
        ("02/01/2023 10:00", "7.0", ""), // T
    ];
    let ds = parse_export(&export_text(&rows)).unwrap();
    let w = select_window(&ds, 24).unwrap();

    let hist: Vec<_> = w.readings.iter().map(|r| r.historic_mmol_l).collect();
    assert_eq!(hist, vec![Some(5.0), Some(6.0), Some(7.0)]);
}

#[test]
fn test_window_keeps_file_order_and_contains_max_row() {
    let rows = vec![
        ("02/01/2023 10:00", "7.0", ""),
        ("01/01/2023 20:00", "6.0", ""),
        ("02/01/2023 01:00", "5.0", ""),
    ];
    let ds = parse_export(&export_text(&rows)).unwrap();
    let w = select_window(&ds, 24).unwrap();

    let hist: Vec<_> = w.readings.iter().map(|r| r.historic_mmol_l).collect();
    assert_eq!(hist, vec![Some(7.0), Some(6.0), Some(5.0)]);

    let sorted: Vec<_> = w.sorted().iter().map(|r| r.historic_mmol_l).collect();
    assert_eq!(sorted, vec![Some(6.0), Some(5.0), Some(7.0)]);
}

#[test]
fn test_shorter_window() {
    let ds = parse_export(&export_text(&day_rows())).unwrap();
    let w = select_window(&ds, 6).unwrap();

    // 00:00, 03:00, 06:00 on the 2nd
    assert_eq!(w.len(), 3);
    assert!(w.readings.iter().all(|r| r.device_timestamp >= w.start));
}

#[test]
fn test_empty_dataset_is_error() {
    let ds = Dataset::default();
    assert!(matches!(select_window(&ds, 24), Err(AppError::EmptyDataset)));
}

#[test]
fn test_non_positive_hours_rejected() {
    let ds = parse_export(&export_text(&basic_rows())).unwrap();
    assert!(matches!(select_window(&ds, 0), Err(AppError::Config(_))));
    assert!(matches!(select_window(&ds, -3), Err(AppError::Config(_))));
}
