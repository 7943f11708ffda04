use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{info, success, warning};
use std::path::Path;

/// Handle the `config` subcommand
pub fn handle(cmd: &Commands, cfg: &Config, config_path: Option<&Path>) -> AppResult<()> {
    if let Commands::Config { print_config, init } = cmd {
        // ---- INIT CONFIG ----
        if *init {
            match Config::init_file(config_path)? {
                Some(p) => success(format!("Config file created: {}", p.display())),
                None => warning(format!(
                    "Config file already exists: {}",
                    config_path
                        .map(Path::to_path_buf)
                        .unwrap_or_else(Config::config_file)
                        .display()
                )),
            }
        }

        // ---- PRINT CONFIG ----
        if *print_config {
            println!("📄 Current configuration:\n");
            println!("{}", cfg.to_yaml()?);
        }

        if !*init && !*print_config {
            info("Nothing to do: use --print or --init");
        }
    }

    Ok(())
}
