// src/export/chart.rs

//! Line chart of the window in mg/dL.
//!
//! Two styles:
//! - `masked`: the full series plus two overlays, one keeping only the
//!   points above the threshold and one keeping the points at or below it.
//!   Masked or missing points break the line.
//! - `banded`: every segment between two consecutive readings is colored by
//!   its midpoint (below / around / above the threshold).

use super::fs_utils::ensure_parent_dir;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::models::Window;
use crate::utils::path::extension_lower;
use clap::ValueEnum;
use plotters::coord::Shift;
use plotters::prelude::*;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Range;
use std::panic;
use std::path::Path;

/// Tick labels of the fixed x-axis scale, oldest to newest.
pub const FIXED_TICK_LABELS: [&str; 9] =
    ["-24", "-21", "-18", "-15", "-12", "-9", "-6", "-3", "NOW"];

const FIXED_SCALE_MAX: f64 = (FIXED_TICK_LABELS.len() - 1) as f64;

pub const BASELINE_COLOR: RGBColor = RGBColor(191, 191, 0);
pub const HIGH_COLOR: RGBColor = RGBColor(220, 30, 30);
pub const LOW_COLOR: RGBColor = RGBColor(30, 160, 60);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum AxisLabels {
    /// Nine evenly spaced labels from -24 to NOW, whatever the data spans
    #[default]
    Fixed,
    /// Hours relative to the latest reading
    Relative,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ChartStyle {
    /// Full series plus above/below-threshold overlays
    #[default]
    Masked,
    /// Segments colored by their midpoint against threshold ± band
    Banded,
}

impl fmt::Display for AxisLabels {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AxisLabels::Fixed => write!(f, "fixed"),
            AxisLabels::Relative => write!(f, "relative"),
        }
    }
}

impl fmt::Display for ChartStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChartStyle::Masked => write!(f, "masked"),
            ChartStyle::Banded => write!(f, "banded"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ChartOptions {
    pub width: u32,
    pub height: u32,
    pub threshold_mg_dl: f64,
    pub band_mg_dl: f64,
    pub window_hours: i64,
    pub axis: AxisLabels,
    pub style: ChartStyle,
}

impl ChartOptions {
    pub fn from_config(cfg: &Config) -> Self {
        Self {
            width: cfg.chart_width,
            height: cfg.chart_height,
            threshold_mg_dl: cfg.threshold_mg_dl,
            band_mg_dl: cfg.band_mg_dl,
            window_hours: cfg.window_hours,
            axis: cfg.axis_labels,
            style: cfg.chart_style,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ChartKind {
    Bitmap,
    Svg,
}

impl ChartKind {
    fn from_path(path: &Path) -> AppResult<Self> {
        match extension_lower(path).as_deref() {
            Some("svg") => Ok(ChartKind::Svg),
            Some("png" | "jpg" | "jpeg" | "bmp") => Ok(ChartKind::Bitmap),
            other => Err(AppError::Chart(format!(
                "unsupported chart format '{}' (use .png or .svg)",
                other.unwrap_or("")
            ))),
        }
    }
}

/// One plotted position; `mg_dl` is `None` where the historic value is missing
/// or not finite.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartPoint {
    pub x: f64,
    pub mg_dl: Option<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SegmentBand {
    Low,
    Near,
    High,
}

impl SegmentBand {
    pub fn classify(mid_mg_dl: f64, threshold_mg_dl: f64, band_mg_dl: f64) -> Self {
        if mid_mg_dl < threshold_mg_dl - band_mg_dl {
            SegmentBand::Low
        } else if mid_mg_dl <= threshold_mg_dl + band_mg_dl {
            SegmentBand::Near
        } else {
            SegmentBand::High
        }
    }

    fn color(&self) -> RGBColor {
        match self {
            SegmentBand::Low => LOW_COLOR,
            SegmentBand::Near => BASELINE_COLOR,
            SegmentBand::High => HIGH_COLOR,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub from: (f64, f64),
    pub to: (f64, f64),
    pub band: SegmentBand,
}

/// Map the window to x positions (timestamp order) and historic mg/dL values.
///
/// - fixed: the data span is stretched over `0..=8`, one unit per label
/// - relative: hours before the latest reading (`-24..=0` for a day)
pub fn chart_points(window: &Window, axis: AxisLabels) -> Vec<ChartPoint> {
    let sorted = window.sorted();
    let Some(first) = sorted.first() else {
        return Vec::new();
    };
    let t_min = first.device_timestamp;
    let span = (window.end - t_min).num_seconds() as f64;

    sorted
        .iter()
        .map(|r| {
            let x = match axis {
                AxisLabels::Fixed if span > 0.0 => {
                    FIXED_SCALE_MAX * (r.device_timestamp - t_min).num_seconds() as f64 / span
                }
                AxisLabels::Fixed => FIXED_SCALE_MAX,
                AxisLabels::Relative => {
                    (r.device_timestamp - window.end).num_seconds() as f64 / 3600.0
                }
            };
            ChartPoint {
                x,
                mg_dl: r.historic_mg_dl().filter(|v| v.is_finite()),
            }
        })
        .collect()
}

/// Contiguous runs of points whose value satisfies `keep`.
pub fn masked_runs<F>(points: &[ChartPoint], keep: F) -> Vec<Vec<(f64, f64)>>
where
    F: Fn(f64) -> bool,
{
    let mut runs = Vec::new();
    let mut current = Vec::new();

    for p in points {
        match p.mg_dl {
            Some(v) if keep(v) => current.push((p.x, v)),
            _ => {
                if !current.is_empty() {
                    runs.push(std::mem::take(&mut current));
                }
            }
        }
    }
    if !current.is_empty() {
        runs.push(current);
    }

    runs
}

/// The three masked series, drawn in this order: the full series, the points
/// strictly above the threshold, and the points at or below it.
pub fn masked_layers(points: &[ChartPoint], threshold_mg_dl: f64) -> [(Vec<Vec<(f64, f64)>>, RGBColor); 3] {
    [
        (masked_runs(points, |_| true), BASELINE_COLOR),
        (masked_runs(points, |v| v > threshold_mg_dl), HIGH_COLOR),
        (masked_runs(points, |v| v <= threshold_mg_dl), LOW_COLOR),
    ]
}

/// Segments between consecutive points that both carry a value.
pub fn banded_segments(points: &[ChartPoint], threshold_mg_dl: f64, band_mg_dl: f64) -> Vec<Segment> {
    points
        .windows(2)
        .filter_map(|w| match (w[0].mg_dl, w[1].mg_dl) {
            (Some(a), Some(b)) => Some(Segment {
                from: (w[0].x, a),
                to: (w[1].x, b),
                band: SegmentBand::classify((a + b) / 2.0, threshold_mg_dl, band_mg_dl),
            }),
            _ => None,
        })
        .collect()
}

/// Label for an x position on the fixed scale; blank between ticks.
pub fn fixed_tick_label(v: f64) -> String {
    let idx = v.round();
    if (v - idx).abs() > 1e-6 || idx < 0.0 || idx > FIXED_SCALE_MAX {
        return String::new();
    }
    FIXED_TICK_LABELS[idx as usize].to_string()
}

/// Label for an x position in hours before the latest reading.
/// Whole hours print as integers, anything else with one decimal.
pub fn relative_tick_label(v: f64) -> String {
    let rounded = v.round();
    if (v - rounded).abs() < 1e-6 {
        if rounded == 0.0 {
            "NOW".to_string()
        } else {
            format!("{}", rounded as i64)
        }
    } else {
        format!("{:.1}", v)
    }
}

fn x_range(opts: &ChartOptions) -> Range<f64> {
    match opts.axis {
        AxisLabels::Fixed => 0.0..FIXED_SCALE_MAX,
        AxisLabels::Relative => -(opts.window_hours as f64)..0.0,
    }
}

fn x_tick_count(opts: &ChartOptions) -> usize {
    match opts.axis {
        AxisLabels::Fixed => FIXED_TICK_LABELS.len(),
        AxisLabels::Relative => ((opts.window_hours / 3) as usize + 1).clamp(2, 25),
    }
}

fn y_range(points: &[ChartPoint], threshold_mg_dl: f64) -> Range<f64> {
    let values = points.iter().filter_map(|p| p.mg_dl).filter(|v| v.is_finite());
    let (lo, hi) = values.fold((threshold_mg_dl, threshold_mg_dl), |(lo, hi), v| {
        (lo.min(v), hi.max(v))
    });
    let pad = ((hi - lo) * 0.1).max(10.0);
    (lo - pad).max(0.0)..(hi + pad)
}

fn chart_err<E: fmt::Display>(e: E) -> AppError {
    AppError::Chart(e.to_string())
}

/// Render the window to `path` (PNG/JPEG/BMP via bitmap backend, SVG otherwise).
pub fn render_chart(window: &Window, path: &Path, opts: &ChartOptions) -> AppResult<()> {
    if window.is_empty() {
        return Err(AppError::EmptyDataset);
    }

    let kind = ChartKind::from_path(path)?;
    ensure_parent_dir(path)?;

    let points = chart_points(window, opts.axis);
    let size = (opts.width, opts.height);

    let render = || -> AppResult<()> {
        match kind {
            ChartKind::Bitmap => {
                let root = BitMapBackend::new(path, size).into_drawing_area();
                draw_chart(root, &points, opts)
            }
            ChartKind::Svg => {
                let root = SVGBackend::new(path, size).into_drawing_area();
                draw_chart(root, &points, opts)
            }
        }
    };

    // font lookup in the bitmap backend may panic on hosts without fonts
    panic::catch_unwind(panic::AssertUnwindSafe(render))
        .map_err(|_| AppError::Chart("plotting backend panicked".to_string()))?
}

fn draw_chart<DB>(root: DrawingArea<DB, Shift>, points: &[ChartPoint], opts: &ChartOptions) -> AppResult<()>
where
    DB: DrawingBackend,
    DB::ErrorType: 'static,
{
    root.fill(&WHITE).map_err(chart_err)?;

    let mut chart = ChartBuilder::on(&root)
        .margin(20)
        .set_label_area_size(LabelAreaPosition::Left, 60)
        .set_label_area_size(LabelAreaPosition::Bottom, 50)
        .build_cartesian_2d(x_range(opts), y_range(points, opts.threshold_mg_dl))
        .map_err(chart_err)?;

    let label_fn: fn(f64) -> String = match opts.axis {
        AxisLabels::Fixed => fixed_tick_label,
        AxisLabels::Relative => relative_tick_label,
    };

    chart
        .configure_mesh()
        .x_labels(x_tick_count(opts))
        .x_label_formatter(&|v| label_fn(*v))
        .y_label_formatter(&|v| format!("{:.0}", v))
        .x_desc("Time (hours)")
        .y_desc("Glucose (mg/dl)")
        .draw()
        .map_err(chart_err)?;

    let threshold = opts.threshold_mg_dl;
    let layers: Vec<(Vec<Vec<(f64, f64)>>, RGBColor)> = match opts.style {
        ChartStyle::Masked => masked_layers(points, threshold).into(),
        ChartStyle::Banded => banded_segments(points, threshold, opts.band_mg_dl)
            .into_iter()
            .map(|s| (vec![vec![s.from, s.to]], s.band.color()))
            .collect(),
    };

    for (runs, color) in layers {
        for run in runs {
            chart
                .draw_series(LineSeries::new(run, color.stroke_width(2)))
                .map_err(chart_err)?;
        }
    }

    root.present().map_err(chart_err)?;
    Ok(())
}
