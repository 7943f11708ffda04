// src/export/summary.rs

use super::fs_utils::ensure_parent_dir;
use crate::errors::{AppError, AppResult};
use crate::models::LatestReading;
use std::fs::{self, File};
use std::io::Write;
use std::path::Path;

const GLUCOSE_PREFIX: &str = "Glucose: ";
const GLUCOSE_UNIT_SUFFIX: &str = " mmol/L";
const TIMESTAMP_PREFIX: &str = "Timestamp: ";

/// The two summary lines as written to disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryLines {
    pub glucose: String,
    pub timestamp: String,
}

impl From<&LatestReading> for SummaryLines {
    fn from(latest: &LatestReading) -> Self {
        Self {
            glucose: latest.glucose_str(),
            timestamp: latest.timestamp_str(),
        }
    }
}

pub fn format_summary(lines: &SummaryLines) -> String {
    format!(
        "{GLUCOSE_PREFIX}{}{GLUCOSE_UNIT_SUFFIX}\n{TIMESTAMP_PREFIX}{}",
        lines.glucose, lines.timestamp
    )
}

/// Overwrite `path` with the latest reading (two lines, no append).
pub fn write_summary(path: &Path, latest: &LatestReading) -> AppResult<()> {
    let text = format_summary(&SummaryLines::from(latest));

    ensure_parent_dir(path)?;
    let mut file = File::create(path)?;
    file.write_all(text.as_bytes())?;
    file.flush()?;
    Ok(())
}

pub fn read_summary(path: &Path) -> AppResult<SummaryLines> {
    let content = fs::read_to_string(path)?;
    parse_summary(&content)
}

pub fn parse_summary(content: &str) -> AppResult<SummaryLines> {
    let mut lines = content.lines();

    let glucose = lines
        .next()
        .and_then(|l| l.strip_prefix(GLUCOSE_PREFIX))
        .and_then(|l| l.strip_suffix(GLUCOSE_UNIT_SUFFIX))
        .ok_or_else(|| AppError::Summary("missing 'Glucose:' line".into()))?;

    let timestamp = lines
        .next()
        .and_then(|l| l.strip_prefix(TIMESTAMP_PREFIX))
        .ok_or_else(|| AppError::Summary("missing 'Timestamp:' line".into()))?;

    Ok(SummaryLines {
        glucose: glucose.to_string(),
        timestamp: timestamp.to_string(),
    })
}
