// src/export/mod.rs

pub mod chart;
mod fs_utils;
pub mod logic;
pub mod model;
pub mod summary;

pub use logic::ExportLogic;
pub use model::{LatestExport, ReadingExport};

use crate::ui::messages::success;
use clap::ValueEnum;
use std::path::Path;

/// Helper comune per messaggi di completamento export.
pub(crate) fn notify_export_success(label: &str, path: &Path) {
    success(format!("{label} export completed: {}", path.display()));
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    Csv,
    Json,
}

