use chrono::NaiveDateTime;
use std::collections::BTreeMap;

/// Conversion factor mmol/L → mg/dL.
pub const MMOL_TO_MG_DL: f64 = 18.0;

/// Format of the `Device Timestamp` column (e.g. `24/10/2012 13:05`).
pub const DEVICE_TIMESTAMP_FORMAT: &str = "%d/%m/%Y %H:%M";

/// Human readable timestamp used in summaries and tables.
pub const DISPLAY_TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

#[derive(Debug, Clone, PartialEq)]
pub struct Reading {
    pub device_timestamp: NaiveDateTime, // ⇔ "Device Timestamp"
    pub historic_mmol_l: Option<f64>,    // ⇔ "Historic Glucose mmol/L"
    pub scan_mmol_l: Option<f64>,        // ⇔ "Scan Glucose mmol/L"

    /// Every other non-empty cell of the row, keyed by header name.
    pub extra: BTreeMap<String, String>,
}

impl Reading {
    pub fn new(
        device_timestamp: NaiveDateTime,
        historic_mmol_l: Option<f64>,
        scan_mmol_l: Option<f64>,
    ) -> Self {
        Self {
            device_timestamp,
            historic_mmol_l,
            scan_mmol_l,
            extra: BTreeMap::new(),
        }
    }

    /// Historic value converted to mg/dL, if present.
    pub fn historic_mg_dl(&self) -> Option<f64> {
        self.historic_mmol_l.map(|v| v * MMOL_TO_MG_DL)
    }

    pub fn timestamp_str(&self) -> String {
        self.device_timestamp
            .format(DISPLAY_TIMESTAMP_FORMAT)
            .to_string()
    }
}
