//! glucograph library root.
//! Exposes the CLI parser, the high-level run() function and the pipeline
//! modules (load → window → latest reading → summary file → chart).

pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod export;
pub mod models;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;
use std::path::Path;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    let command = cli.command.clone().unwrap_or_else(Commands::default_run);
    let config_path = cli.config.as_deref().map(Path::new);

    match &command {
        Commands::Run { .. } => cli::commands::run::handle(&command, cfg),
        Commands::Latest { .. } => cli::commands::latest::handle(&command, cfg),
        Commands::Window { .. } => cli::commands::window::handle(&command, cfg),
        Commands::Config { .. } => cli::commands::config::handle(&command, cfg, config_path),
    }
}

/// Entry point usato da main.rs
pub fn run() -> AppResult<()> {
    // 1️⃣ parse CLI
    let cli = Cli::parse();
    ui::messages::set_verbose(cli.verbose);

    // 2️⃣ carica config UNA sola volta (config --init può partire senza file)
    let creating_config = matches!(cli.command, Some(Commands::Config { init: true, .. }));
    let config_path = cli.config.as_deref().map(Path::new);
    let mut cfg = if creating_config && config_path.is_some_and(|p| !p.exists()) {
        Config::default()
    } else {
        Config::load(config_path)?
    };

    // 3️⃣ applica eventuale override dell'input da riga di comando
    if let Some(input) = &cli.input {
        cfg.input_file = input.clone();
    }

    // 4️⃣ passa tutto al dispatcher
    dispatch(&cli, &cfg)
}
