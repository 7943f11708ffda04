//! load → window → resolve_latest → write_summary → render_chart

use super::{loader, resolver, window};
use crate::config::Config;
use crate::errors::AppResult;
use crate::export::chart::{self, ChartOptions};
use crate::export::summary;
use crate::models::{Dataset, GlucoseStatus, LatestReading, Window};
use std::path::PathBuf;

/// Everything a run produced, for reporting.
#[derive(Debug)]
pub struct RunReport {
    pub dataset: Dataset,
    pub window: Window,
    pub latest: LatestReading,
    pub status: GlucoseStatus,
    pub summary_path: PathBuf,
    pub chart_path: PathBuf,
}

/// Pure part of the pipeline: load, window and resolve.
pub fn analyze(cfg: &Config) -> AppResult<(Dataset, Window, LatestReading)> {
    let dataset = loader::load_dataset(&cfg.input_path())?;
    let window = window::select_window(&dataset, cfg.window_hours)?;
    let latest = resolver::resolve_latest(&dataset)?;
    Ok((dataset, window, latest))
}

/// Full run: analysis plus the two output artifacts.
pub fn run_pipeline(cfg: &Config) -> AppResult<RunReport> {
    let (dataset, window, latest) = analyze(cfg)?;

    let summary_path = cfg.summary_path();
    summary::write_summary(&summary_path, &latest)?;

    let chart_path = cfg.chart_path();
    chart::render_chart(&window, &chart_path, &ChartOptions::from_config(cfg))?;

    let status = GlucoseStatus::classify(&latest.value, cfg.threshold_mg_dl, cfg.band_mg_dl);

    Ok(RunReport {
        dataset,
        window,
        latest,
        status,
        summary_path,
        chart_path,
    })
}
