//! CSV ingestion of a glucose-monitor export.
//!
//! The export starts with one metadata line (patient/device info), the real
//! header is on the second line. Only three columns are interpreted, every
//! other cell is kept verbatim in `Reading::extra`.

use crate::errors::{AppError, AppResult};
use crate::models::reading::DEVICE_TIMESTAMP_FORMAT;
use crate::models::{Dataset, Reading};
use chrono::NaiveDateTime;
use std::collections::BTreeMap;
use std::fs::File;
use std::io::{self, BufRead, BufReader, Read};
use std::path::Path;

pub const COL_DEVICE_TIMESTAMP: &str = "Device Timestamp";
pub const COL_HISTORIC_GLUCOSE: &str = "Historic Glucose mmol/L";
pub const COL_SCAN_GLUCOSE: &str = "Scan Glucose mmol/L";

/// Lines preceding the first data row (metadata + header).
const LINES_BEFORE_DATA: usize = 2;

/// Load an export from disk, skipping its metadata line.
pub fn load_dataset(path: &Path) -> AppResult<Dataset> {
    let file = File::open(path).map_err(|e| {
        AppError::Io(io::Error::new(
            e.kind(),
            format!("cannot open '{}': {}", path.display(), e),
        ))
    })?;

    let mut reader = BufReader::new(file);
    let mut metadata = String::new();
    reader.read_line(&mut metadata)?;

    parse_records(reader)
}

/// Parse export text, including the leading metadata line.
pub fn parse_export(text: &str) -> AppResult<Dataset> {
    let body = match text.split_once('\n') {
        Some((_, rest)) => rest,
        None => "",
    };
    parse_records(body.as_bytes())
}

/// Parse CSV whose first line is the header row.
pub fn parse_records<R: Read>(input: R) -> AppResult<Dataset> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(input);

    let columns: Vec<String> = rdr.headers()?.iter().map(str::to_string).collect();

    let ts_idx = column_index(&columns, COL_DEVICE_TIMESTAMP)?;
    let hist_idx = column_index(&columns, COL_HISTORIC_GLUCOSE)?;
    let scan_idx = column_index(&columns, COL_SCAN_GLUCOSE)?;

    let mut readings = Vec::new();

    for (i, record) in rdr.records().enumerate() {
        let record = record?;
        let row = i + LINES_BEFORE_DATA + 1;

        let raw_ts = record.get(ts_idx).unwrap_or("");
        let device_timestamp = parse_device_timestamp(raw_ts).ok_or_else(|| {
            AppError::InvalidTimestamp {
                row,
                value: raw_ts.to_string(),
            }
        })?;

        let historic = parse_optional_number(&record, hist_idx, COL_HISTORIC_GLUCOSE, row)?;
        let scan = parse_optional_number(&record, scan_idx, COL_SCAN_GLUCOSE, row)?;

        let mut reading = Reading::new(device_timestamp, historic, scan);
        reading.extra = passthrough_cells(&columns, &record, &[ts_idx, hist_idx, scan_idx]);
        readings.push(reading);
    }

    Ok(Dataset::new(columns, readings))
}

pub fn parse_device_timestamp(s: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(s.trim(), DEVICE_TIMESTAMP_FORMAT).ok()
}

fn column_index(columns: &[String], name: &str) -> AppResult<usize> {
    columns
        .iter()
        .position(|c| c == name)
        .ok_or_else(|| AppError::MissingColumn(name.to_string()))
}

/// Empty or absent cell → `None`.
fn parse_optional_number(
    record: &csv::StringRecord,
    idx: usize,
    column: &str,
    row: usize,
) -> AppResult<Option<f64>> {
    let cell = record.get(idx).unwrap_or("").trim();
    if cell.is_empty() {
        return Ok(None);
    }

    match cell.parse::<f64>() {
        Ok(v) if v.is_nan() => Ok(None),
        Ok(v) if v.is_finite() => Ok(Some(v)),
        // "inf" / "-infinity" parse but are not readings
        _ => Err(AppError::InvalidNumber {
            row,
            column: column.to_string(),
            value: cell.to_string(),
        }),
    }
}

fn passthrough_cells(
    columns: &[String],
    record: &csv::StringRecord,
    skip: &[usize],
) -> BTreeMap<String, String> {
    columns
        .iter()
        .enumerate()
        .filter(|(i, _)| !skip.contains(i))
        .filter_map(|(i, name)| {
            record
                .get(i)
                .filter(|v| !v.is_empty())
                .map(|v| (name.clone(), v.to_string()))
        })
        .collect()
}
