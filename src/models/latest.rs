use super::reading::{DISPLAY_TIMESTAMP_FORMAT, MMOL_TO_MG_DL};
use chrono::NaiveDateTime;
use serde::Serialize;
use std::fmt;

/// Sentinel written when neither historic nor scan glucose is available.
pub const NOT_AVAILABLE: &str = "Data Not Available";

/// Glucose value chosen for the newest reading, in mmol/L.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GlucoseValue {
    Historic(f64),
    Scan(f64),
    NotAvailable,
}

impl GlucoseValue {
    /// Historic first, then scan, then the sentinel.
    pub fn resolve(historic: Option<f64>, scan: Option<f64>) -> Self {
        match (historic, scan) {
            (Some(h), _) => GlucoseValue::Historic(h),
            (None, Some(s)) => GlucoseValue::Scan(s),
            (None, None) => GlucoseValue::NotAvailable,
        }
    }

    pub fn mmol_l(&self) -> Option<f64> {
        match self {
            GlucoseValue::Historic(v) | GlucoseValue::Scan(v) => Some(*v),
            GlucoseValue::NotAvailable => None,
        }
    }

    pub fn mg_dl(&self) -> Option<f64> {
        self.mmol_l().map(|v| v * MMOL_TO_MG_DL)
    }

    pub fn source(&self) -> &'static str {
        match self {
            GlucoseValue::Historic(_) => "historic",
            GlucoseValue::Scan(_) => "scan",
            GlucoseValue::NotAvailable => "none",
        }
    }
}

impl fmt::Display for GlucoseValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.mmol_l() {
            // 6 → "6.0", 5.55 → "5.55"
            Some(v) if v.is_finite() && v.fract() == 0.0 => write!(f, "{:.1}", v),
            Some(v) => write!(f, "{}", v),
            None => write!(f, "{}", NOT_AVAILABLE),
        }
    }
}

/// Qualifier shown next to the latest value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum GlucoseStatus {
    Normal,
    High,
    Unknown,
}

impl GlucoseStatus {
    /// `Normal` below `threshold + band` (mg/dL), `High` otherwise.
    pub fn classify(value: &GlucoseValue, threshold_mg_dl: f64, band_mg_dl: f64) -> Self {
        match value.mg_dl() {
            Some(v) if v < threshold_mg_dl + band_mg_dl => GlucoseStatus::Normal,
            Some(_) => GlucoseStatus::High,
            None => GlucoseStatus::Unknown,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            GlucoseStatus::Normal => "Normal",
            GlucoseStatus::High => "High",
            GlucoseStatus::Unknown => "Unknown",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct LatestReading {
    pub value: GlucoseValue,
    pub timestamp: NaiveDateTime,
}

impl LatestReading {
    pub fn glucose_str(&self) -> String {
        self.value.to_string()
    }

    pub fn timestamp_str(&self) -> String {
        self.timestamp.format(DISPLAY_TIMESTAMP_FORMAT).to_string()
    }
}
