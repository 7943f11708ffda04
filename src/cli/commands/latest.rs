use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::{loader::load_dataset, resolver::resolve_latest};
use crate::errors::{AppError, AppResult};
use crate::export::LatestExport;
use crate::export::summary::write_summary;
use crate::models::{GlucoseStatus, LatestReading};
use crate::ui::messages::{field, success};
use crate::utils::colors::{color_for_status, colorize};
use crate::utils::mg_dl_readable;
use crate::utils::path::expand_tilde;

/// Handle the `latest` command
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Latest {
        json,
        write,
        summary,
    } = cmd
    {
        let dataset = load_dataset(&cfg.input_path())?;
        let latest = resolve_latest(&dataset)?;
        let status = GlucoseStatus::classify(&latest.value, cfg.threshold_mg_dl, cfg.band_mg_dl);

        if *json {
            let out = serde_json::to_string_pretty(&LatestExport::new(&latest, status))
                .map_err(|e| AppError::Export(format!("JSON serialization error: {e}")))?;
            println!("{}", out);
        } else {
            print_latest(&latest, status);
        }

        if *write {
            let path = summary
                .as_deref()
                .map(expand_tilde)
                .unwrap_or_else(|| cfg.summary_path());
            write_summary(&path, &latest)?;

            if !*json {
                success(format!("Latest reading saved to {}", path.display()));
            }
        }
    }
    Ok(())
}

/// "Latest Glucose Data" block, same wording as the summary file.
pub(crate) fn print_latest(latest: &LatestReading, status: GlucoseStatus) {
    println!("Latest Glucose Data:");
    println!("Glucose: {} mmol/L", latest.glucose_str());
    println!("Timestamp: {}", latest.timestamp_str());
    field(
        "Status",
        format!(
            "{} ({}, {})",
            colorize(status.as_str(), color_for_status(status)),
            mg_dl_readable(latest.value.mg_dl()),
            latest.value.source()
        ),
    );
}
