#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub const METADATA_LINE: &str =
    "Glucose Data,Generated on,24/10/2012 10:00 UTC,Generated by,JohnDoe";
pub const HEADER_LINE: &str = "Device,Serial Number,Device Timestamp,Record Type,Historic Glucose mmol/L,Scan Glucose mmol/L,Notes";

pub fn glg() -> Command {
    cargo_bin_cmd!("glucograph")
}

/// Unique path inside the system temp dir; any existing file is removed
pub fn temp_path(name: &str, ext: &str) -> PathBuf {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("glucograph_{}.{}", name, ext));
    fs::remove_file(&path).ok();
    path
}

/// Build a full export (metadata + header + rows).
/// Each row is `(timestamp, historic, scan)` with "" for a missing value.
pub fn export_text(rows: &[(&str, &str, &str)]) -> String {
    let mut out = format!("{METADATA_LINE}\n{HEADER_LINE}\n");
    for (ts, hist, scan) in rows {
        let record_type = if hist.is_empty() { "1" } else { "0" };
        out.push_str(&format!(
            "FreeStyle LibreLink,ABC-123,{ts},{record_type},{hist},{scan},\n"
        ));
    }
    out
}

pub fn write_export(name: &str, rows: &[(&str, &str, &str)]) -> PathBuf {
    let path = temp_path(name, "csv");
    fs::write(&path, export_text(rows)).expect("write fixture");
    path
}

/// The two-row dataset used across tests.
pub fn basic_rows() -> Vec<(&'static str, &'static str, &'static str)> {
    vec![
        ("01/01/2023 00:00", "5.0", ""),
        ("01/01/2023 12:00", "", "6.0"),
    ]
}

/// A day of readings every 3 hours, crossing the threshold twice.
pub fn day_rows() -> Vec<(&'static str, &'static str, &'static str)> {
    vec![
        ("01/03/2023 06:00", "5.5", ""),
        ("01/03/2023 09:00", "6.2", ""),
        ("01/03/2023 12:00", "7.4", ""),
        ("01/03/2023 13:10", "", "7.9"),
        ("01/03/2023 15:00", "8.1", ""),
        ("01/03/2023 18:00", "6.0", ""),
        ("01/03/2023 21:00", "5.1", ""),
        ("02/03/2023 00:00", "4.8", ""),
        ("02/03/2023 03:00", "5.0", ""),
        ("02/03/2023 06:00", "5.6", ""),
    ]
}

/// Config file pointing every artifact into the temp dir, viewer disabled.
pub fn write_config(name: &str, input: &PathBuf, chart_ext: &str) -> (PathBuf, PathBuf, PathBuf) {
    let cfg_path = temp_path(&format!("{name}_config"), "yaml");
    let summary = temp_path(&format!("{name}_summary"), "txt");
    let chart = temp_path(&format!("{name}_chart"), chart_ext);

    let yaml = format!(
        "input_file: {}\nsummary_file: {}\nchart_file: {}\nshow_chart: false\nchart_width: 640\nchart_height: 480\n",
        input.display(),
        summary.display(),
        chart.display()
    );
    fs::write(&cfg_path, yaml).expect("write config");

    (cfg_path, summary, chart)
}
