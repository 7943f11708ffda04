// src/export/model.rs

use crate::models::{GlucoseStatus, LatestReading, Reading};
use serde::Serialize;

/// Flat row used for window export (CSV / JSON).
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct ReadingExport {
    pub timestamp: String,
    pub historic_mmol_l: Option<f64>,
    pub scan_mmol_l: Option<f64>,
    pub historic_mg_dl: Option<f64>,
}

impl From<&Reading> for ReadingExport {
    fn from(r: &Reading) -> Self {
        Self {
            timestamp: r.timestamp_str(),
            historic_mmol_l: r.historic_mmol_l,
            scan_mmol_l: r.scan_mmol_l,
            historic_mg_dl: r.historic_mg_dl(),
        }
    }
}

/// JSON shape of `latest --json`.
#[derive(Serialize, Clone, Debug)]
pub struct LatestExport {
    pub glucose: String,
    pub glucose_mmol_l: Option<f64>,
    pub glucose_mg_dl: Option<f64>,
    pub source: &'static str,
    pub timestamp: String,
    pub status: GlucoseStatus,
}

impl LatestExport {
    pub fn new(latest: &LatestReading, status: GlucoseStatus) -> Self {
        Self {
            glucose: latest.glucose_str(),
            glucose_mmol_l: latest.value.mmol_l(),
            glucose_mg_dl: latest.value.mg_dl(),
            source: latest.value.source(),
            timestamp: latest.timestamp_str(),
            status,
        }
    }
}

/// Header for the window table.
pub(crate) fn get_headers() -> Vec<&'static str> {
    vec!["timestamp", "historic mmol/L", "scan mmol/L", "historic mg/dL"]
}

pub(crate) fn reading_to_row(r: &ReadingExport) -> Vec<String> {
    vec![
        r.timestamp.clone(),
        fmt_opt(r.historic_mmol_l, 1),
        fmt_opt(r.scan_mmol_l, 1),
        fmt_opt(r.historic_mg_dl, 0),
    ]
}

fn fmt_opt(v: Option<f64>, decimals: usize) -> String {
    v.map(|x| format!("{:.*}", decimals, x))
        .unwrap_or_else(|| "--".to_string())
}
