/// ANSI color helper utilities for terminal output.
use crate::models::GlucoseStatus;

pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";
pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";

/// Normal → green, High → red, Unknown → grey.
pub fn color_for_status(status: GlucoseStatus) -> &'static str {
    match status {
        GlucoseStatus::Normal => GREEN,
        GlucoseStatus::High => RED,
        GlucoseStatus::Unknown => GREY,
    }
}

/// Color of a mg/dL value against the chart threshold:
/// \> threshold → red, ≤ threshold → green, missing → grey.
pub fn color_for_mg_dl(value: Option<f64>, threshold_mg_dl: f64) -> &'static str {
    match value {
        Some(v) if v > threshold_mg_dl => RED,
        Some(_) => GREEN,
        None => GREY,
    }
}

pub fn colorize(value: &str, color: &str) -> String {
    format!("{color}{value}{RESET}")
}

/// Missing cells ("--" or blank) are greyed out.
pub fn colorize_optional(value: &str) -> String {
    if value.trim().is_empty() || value.trim() == "--" {
        colorize(value, GREY)
    } else {
        value.to_string()
    }
}
