use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::{loader::load_dataset, window::select_window};
use crate::errors::AppResult;
use crate::export::ExportLogic;
use crate::export::model::{get_headers, reading_to_row};
use crate::models::Window;
use crate::models::reading::DISPLAY_TIMESTAMP_FORMAT;
use crate::ui::messages::{field, header};
use crate::utils::colors::{color_for_mg_dl, colorize, colorize_optional};
use crate::utils::date::describe_span;
use crate::utils::path::expand_tilde;
use crate::utils::table::Table;

/// Handle the `window` command
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Window {
        hours,
        export,
        format,
        force,
    } = cmd
    {
        let hours = hours.unwrap_or(cfg.window_hours);

        let dataset = load_dataset(&cfg.input_path())?;
        let window = select_window(&dataset, hours)?;

        header(format!(
            "Last {}h: {} → {}",
            hours,
            window.start.format(DISPLAY_TIMESTAMP_FORMAT),
            window.end.format(DISPLAY_TIMESTAMP_FORMAT)
        ));

        print_window(&window, cfg.threshold_mg_dl);

        field("Readings", format!("{} of {}", window.len(), dataset.len()));
        if let Some(first) = window.sorted().first() {
            field("Span", describe_span(first.device_timestamp, window.end));
        }

        if let Some(file) = export {
            ExportLogic::export(&window, *format, &expand_tilde(file), *force)?;
        }
    }
    Ok(())
}

/// Table of the window readings in timestamp order; mg/dL colored by threshold.
pub(crate) fn print_window(window: &Window, threshold_mg_dl: f64) {
    let mut table = Table::with_headers(&get_headers());

    for row in ExportLogic::rows(window) {
        let mg_dl_color = color_for_mg_dl(row.historic_mg_dl, threshold_mg_dl);
        let mut cells = reading_to_row(&row);
        if let Some(last) = cells.last_mut() {
            *last = colorize(last, mg_dl_color);
        }
        let cells = cells.iter().map(|c| colorize_optional(c)).collect();
        table.add_row(cells);
    }

    print!("{}", table.render());
}
