use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, success, warning};

use crate::cli::parser::Commands;
use std::fs;
use std::path::Path;

/// Handle the `config` subcommand
pub fn handle(cmd: &Commands, cfg: &Config, path: &Path) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        check,
    } = cmd
    {
        // ---- PRINT CONFIG ----
        if *print_config {
            info(format!("Configuration ({}):", path.display()));
            println!("{}", cfg.to_yaml()?);
        }

        // ---- CHECK CONFIG ----
        if *check {
            if !path.exists() {
                warning(format!(
                    "No configuration file at {}; defaults are in use",
                    path.display()
                ));
                return Ok(());
            }

            let content = fs::read_to_string(path).map_err(|_| AppError::ConfigLoad)?;
            let missing = Config::missing_keys(&content)?;
            if missing.is_empty() {
                success("Configuration is complete");
            } else {
                for key in &missing {
                    warning(format!("Missing field '{key}' (default used)"));
                }
            }
        }
    }

    Ok(())
}
