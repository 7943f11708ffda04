use crate::export::ExportFormat;
use crate::export::chart::{AxisLabels, ChartStyle};
use clap::{Parser, Subcommand};

/// Command-line interface definition for glucograph
/// CLI application that summarizes and plots a glucose-monitor CSV export
#[derive(Parser)]
#[command(
    name = "glucograph",
    version = env!("CARGO_PKG_VERSION"),
    about = "Read a glucose-monitor CSV export, save the latest reading and plot the last 24 hours",
    long_about = None
)]
pub struct Cli {
    /// Use this configuration file instead of ~/.glucograph/glucograph.conf
    #[arg(global = true, long = "config", value_name = "FILE")]
    pub config: Option<String>,

    /// Override the input CSV export
    #[arg(global = true, long = "input", short = 'i', value_name = "FILE")]
    pub input: Option<String>,

    /// Print extra diagnostics (window rows, CSV columns)
    #[arg(global = true, long = "verbose", short = 'v')]
    pub verbose: bool,

    /// Defaults to `run` when omitted
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Clone, Debug)]
pub enum Commands {
    /// Full pipeline: write the latest reading and render the chart
    Run {
        /// Summary text file (default: latest_glucose_data.txt)
        #[arg(long = "summary", value_name = "FILE")]
        summary: Option<String>,

        /// Chart image, .png or .svg (default: graph.png)
        #[arg(long = "chart", value_name = "FILE")]
        chart: Option<String>,

        /// Window length in hours (default: 24)
        #[arg(long = "hours", value_name = "N")]
        hours: Option<i64>,

        /// Threshold in mg/dL separating the two colors (default: 120)
        #[arg(long = "threshold", value_name = "MGDL")]
        threshold: Option<f64>,

        /// X-axis labels: fixed -24..NOW scale or hours relative to the latest reading
        #[arg(long = "axis", value_enum)]
        axis: Option<AxisLabels>,

        /// Chart coloring style
        #[arg(long = "style", value_enum)]
        style: Option<ChartStyle>,

        /// Do not open the chart in the image viewer
        #[arg(long = "no-show")]
        no_show: bool,
    },

    /// Print the latest reading
    Latest {
        /// Print as JSON
        #[arg(long = "json")]
        json: bool,

        /// Also write the summary text file
        #[arg(long = "write")]
        write: bool,

        /// Summary text file used with --write
        #[arg(long = "summary", value_name = "FILE", requires = "write")]
        summary: Option<String>,
    },

    /// List (or export) the readings of the time window
    Window {
        /// Window length in hours (default: 24)
        #[arg(long = "hours", value_name = "N")]
        hours: Option<i64>,

        /// Write the window readings to this file
        #[arg(long = "export", value_name = "FILE")]
        export: Option<String>,

        /// Export format
        #[arg(long = "format", value_enum, default_value = "csv")]
        format: ExportFormat,

        /// Overwrite the export file if it exists
        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Print or create the configuration file
    Config {
        /// Print the effective configuration
        #[arg(long = "print", help = "Print the effective configuration")]
        print_config: bool,

        /// Write a default configuration file (at --config, or the standard path)
        #[arg(long = "init", help = "Write a default configuration file")]
        init: bool,
    },
}

impl Commands {
    /// `run` with no overrides.
    pub fn default_run() -> Self {
        Commands::Run {
            summary: None,
            chart: None,
            hours: None,
            threshold: None,
            axis: None,
            style: None,
            no_show: false,
        }
    }
}
