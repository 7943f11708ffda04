use crate::cli::commands::{latest::print_latest, window::print_window};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::pipeline::{RunReport, run_pipeline};
use crate::errors::AppResult;
use crate::models::reading::DISPLAY_TIMESTAMP_FORMAT;
use crate::ui::messages::{detail, field, info, is_verbose, success, warning};
use crate::utils::viewer::open_in_viewer;

/// Handle the `run` command (also the default when no command is given)
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Run {
        summary,
        chart,
        hours,
        threshold,
        axis,
        style,
        no_show,
    } = cmd
    {
        let mut cfg = cfg.clone();

        // override da riga di comando
        if let Some(s) = summary {
            cfg.summary_file = s.clone();
        }
        if let Some(c) = chart {
            cfg.chart_file = c.clone();
        }
        if let Some(h) = hours {
            cfg.window_hours = *h;
        }
        if let Some(t) = threshold {
            cfg.threshold_mg_dl = *t;
        }
        if let Some(a) = axis {
            cfg.axis_labels = *a;
        }
        if let Some(st) = style {
            cfg.chart_style = *st;
        }
        if *no_show {
            cfg.show_chart = false;
        }
        cfg.validate()?;

        info(format!("Reading {}", cfg.input_path().display()));

        let report = run_pipeline(&cfg)?;
        print_report(&report, &cfg);

        success(format!("Latest reading saved to {}", report.summary_path.display()));
        success(format!("Chart saved to {}", report.chart_path.display()));

        // il viewer è facoltativo: un errore qui non invalida il run
        if cfg.show_chart
            && let Err(e) = open_in_viewer(&report.chart_path)
        {
            warning(format!("Could not open the chart viewer: {}", e));
        }
    }
    Ok(())
}

fn print_report(report: &RunReport, cfg: &Config) {
    let fmt = |ts: Option<chrono::NaiveDateTime>| {
        ts.map(|t| t.format(DISPLAY_TIMESTAMP_FORMAT).to_string())
            .unwrap_or_else(|| "--".to_string())
    };

    field("Min Device Timestamp", fmt(report.dataset.min_timestamp()));
    field("Max Device Timestamp", fmt(report.dataset.max_timestamp()));
    field(
        format!("Device Timestamp {} Hours Ago", cfg.window_hours),
        fmt(Some(report.window.start)),
    );
    field(
        "Selected readings",
        format!("{} of {}", report.window.len(), report.dataset.len()),
    );

    if is_verbose() {
        print_window(&report.window, cfg.threshold_mg_dl);
    }

    print_latest(&report.latest, report.status);

    detail(format!("Columns: {}", report.dataset.columns.join(", ")));
}
