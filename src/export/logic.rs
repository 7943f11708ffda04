// src/export/logic.rs

use crate::errors::{AppError, AppResult};
use crate::export::ExportFormat;
use crate::export::fs_utils::{ensure_parent_dir, ensure_writable};
use crate::export::model::ReadingExport;
use crate::export::notify_export_success;
use crate::models::Window;
use crate::ui::messages::{info, warning};
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Logica di alto livello per l'export della finestra.
pub struct ExportLogic;

impl ExportLogic {
    /// Export the window readings, ordered by timestamp.
    ///
    /// - `format`: csv | json
    /// - `file`: output path (relative paths resolve against the cwd)
    /// - `force`: overwrite an existing file
    pub fn export(window: &Window, format: ExportFormat, file: &Path, force: bool) -> AppResult<()> {
        ensure_writable(file, force)?;

        let rows = Self::rows(window);

        if rows.is_empty() {
            warning("No readings in the selected window. Nothing to export.");
            return Ok(());
        }

        ensure_parent_dir(file)?;

        match format {
            ExportFormat::Csv => Self::write_csv(&rows, file)?,
            ExportFormat::Json => Self::write_json(&rows, file)?,
        }

        Ok(())
    }

    pub fn rows(window: &Window) -> Vec<ReadingExport> {
        window
            .sorted()
            .into_iter()
            .map(ReadingExport::from)
            .collect()
    }

    /// One array of reading objects, indented.
    fn write_json(rows: &[ReadingExport], path: &Path) -> AppResult<()> {
        info(format!("Writing {} readings as JSON: {}", rows.len(), path.display()));

        let body = serde_json::to_string_pretty(rows)
            .map_err(|e| AppError::Export(format!("cannot encode readings: {e}")))?;
        File::create(path)?.write_all(body.as_bytes())?;

        notify_export_success("JSON", path);
        Ok(())
    }

    /// Header row comes from the `ReadingExport` field names.
    fn write_csv(rows: &[ReadingExport], path: &Path) -> AppResult<()> {
        info(format!("Writing {} readings as CSV: {}", rows.len(), path.display()));

        let mut wtr = csv::Writer::from_path(path)?;
        for row in rows {
            wtr.serialize(row)?;
        }
        wtr.flush()?;

        notify_export_success("CSV", path);
        Ok(())
    }
}
