mod common;
use common::{basic_rows, export_text};
use glucograph::core::loader::parse_export;
use glucograph::core::resolver::{newest_reading, resolve_latest};
use glucograph::errors::AppError;
use glucograph::models::{Dataset, GlucoseStatus, GlucoseValue};

#[test]
fn test_scan_used_when_historic_missing() {
    let ds = parse_export(&export_text(&basic_rows())).unwrap();
    let latest = resolve_latest(&ds).unwrap();

    assert_eq!(latest.value, GlucoseValue::Scan(6.0));
    assert_eq!(latest.glucose_str(), "6.0");
    assert_eq!(latest.timestamp_str(), "2023-01-01 12:00:00");
}

#[test]
fn test_historic_preferred_over_scan() {
    let rows = vec![
        ("01/01/2023 00:00", "5.0", ""),
        ("01/01/2023 12:00", "7.2", "9.9"),
    ];
    let ds = parse_export(&export_text(&rows)).unwrap();
    assert_eq!(resolve_latest(&ds).unwrap().value, GlucoseValue::Historic(7.2));
}

#[test]
fn test_no_value_gives_sentinel() {
    let rows = vec![("01/01/2023 00:00", "5.0", ""), ("01/01/2023 12:00", "", "")];
    let ds = parse_export(&export_text(&rows)).unwrap();
    let latest = resolve_latest(&ds).unwrap();

    assert_eq!(latest.value, GlucoseValue::NotAvailable);
    assert_eq!(latest.glucose_str(), "Data Not Available");
}

#[test]
fn test_latest_taken_from_whole_dataset_not_file_end() {
    let rows = vec![
        ("03/01/2023 08:00", "8.0", ""),
        ("01/01/2023 08:00", "5.0", ""),
    ];
    let ds = parse_export(&export_text(&rows)).unwrap();
    let latest = resolve_latest(&ds).unwrap();
    assert_eq!(latest.value, GlucoseValue::Historic(8.0));
    assert_eq!(latest.timestamp_str(), "2023-01-03 08:00:00");
}

#[test]
fn test_first_row_wins_on_equal_timestamps() {
    let rows = vec![
        ("01/01/2023 08:00", "", "6.5"),
        ("01/01/2023 08:00", "5.5", ""),
    ];
    let ds = parse_export(&export_text(&rows)).unwrap();
    assert_eq!(newest_reading(&ds).unwrap().scan_mmol_l, Some(6.5));
    assert_eq!(resolve_latest(&ds).unwrap().value, GlucoseValue::Scan(6.5));
}

#[test]
fn test_empty_dataset_is_error() {
    assert!(matches!(
        resolve_latest(&Dataset::default()),
        Err(AppError::EmptyDataset)
    ));
}

#[test]
fn test_value_display_keeps_decimals() {
    assert_eq!(GlucoseValue::Historic(5.55).to_string(), "5.55");
    assert_eq!(GlucoseValue::Historic(10.0).to_string(), "10.0");
    assert_eq!(GlucoseValue::Scan(7.1).to_string(), "7.1");
}

#[test]
fn test_status_classification() {
    // 6.0 mmol/L = 108 mg/dL, 6.9 mmol/L = 124.2 mg/dL, 7.0 = 126
    assert_eq!(
        GlucoseStatus::classify(&GlucoseValue::Historic(6.0), 120.0, 5.0),
        GlucoseStatus::Normal
    );
    assert_eq!(
        GlucoseStatus::classify(&GlucoseValue::Historic(6.9), 120.0, 5.0),
        GlucoseStatus::Normal
    );
    assert_eq!(
        GlucoseStatus::classify(&GlucoseValue::Scan(7.0), 120.0, 5.0),
        GlucoseStatus::High
    );
    assert_eq!(
        GlucoseStatus::classify(&GlucoseValue::NotAvailable, 120.0, 5.0),
        GlucoseStatus::Unknown
    );
}

#[test]
fn test_mg_dl_conversion() {
    for v in [3.9, 5.0, 6.1, 10.0, 22.2] {
        let mg = GlucoseValue::Historic(v).mg_dl().unwrap();
        assert!((mg - v * 18.0).abs() < 1e-9);
    }
    assert_eq!(GlucoseValue::NotAvailable.mg_dl(), None);
}
