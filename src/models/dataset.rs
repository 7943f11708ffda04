use super::reading::Reading;
use chrono::NaiveDateTime;

/// All readings of one export, in file order (not necessarily sorted).
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    pub columns: Vec<String>,
    pub readings: Vec<Reading>,
}

impl Dataset {
    pub fn new(columns: Vec<String>, readings: Vec<Reading>) -> Self {
        Self { columns, readings }
    }

    pub fn len(&self) -> usize {
        self.readings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.readings.is_empty()
    }

    pub fn min_timestamp(&self) -> Option<NaiveDateTime> {
        self.readings.iter().map(|r| r.device_timestamp).min()
    }

    pub fn max_timestamp(&self) -> Option<NaiveDateTime> {
        self.readings.iter().map(|r| r.device_timestamp).max()
    }
}

/// Readings falling in `[start, end]`, where `end` is the newest timestamp
/// of the dataset. File order is preserved.
#[derive(Debug, Clone)]
pub struct Window {
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
    pub readings: Vec<Reading>,
}

impl Window {
    pub fn len(&self) -> usize {
        self.readings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.readings.is_empty()
    }

    /// Window readings ordered by timestamp (stable on ties).
    pub fn sorted(&self) -> Vec<&Reading> {
        let mut out: Vec<&Reading> = self.readings.iter().collect();
        out.sort_by_key(|r| r.device_timestamp);
        out
    }
}
