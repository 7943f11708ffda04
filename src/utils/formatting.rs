//! Formatting utilities used for CLI and export outputs.

use regex::Regex;
use std::sync::LazyLock;
use unicode_width::UnicodeWidthStr;

static ANSI_RE: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"\x1B\[[0-9;]*[mK]").ok());

/// mg/dL values are shown without decimals, e.g. "108 mg/dL".
pub fn mg_dl_readable(v: Option<f64>) -> String {
    match v {
        Some(x) => format!("{:.0} mg/dL", x),
        None => "--".to_string(),
    }
}

/// Strip ANSI color sequences (`ESC [ ... m` / `ESC [ ... K`).
pub fn strip_ansi(s: &str) -> String {
    match ANSI_RE.as_ref() {
        Some(re) => re.replace_all(s, "").into_owned(),
        None => s.to_string(),
    }
}

/// Terminal columns taken by `s` once colors are stripped (wide glyphs count 2).
pub fn visible_width(s: &str) -> usize {
    UnicodeWidthStr::width(strip_ansi(s).as_str())
}
