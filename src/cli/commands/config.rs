use crate::cli::parser::Commands;
use crate::config::{Config, migrate};
use crate::errors::AppResult;
use crate::ui::messages::{info, success, warning};
use std::fs;
use std::path::Path;

/// Handle the `config` subcommand
pub fn handle(cmd: &Commands, cfg: &Config, path: &Path) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        check,
        migrate: run_migrate,
        init,
    } = cmd
    {
        // ---- INIT ----
        if *init {
            if Config::init_file(path)? {
                success(format!("Config file created: {}", path.display()));
            } else {
                info(format!("Config file already exists: {}", path.display()));
            }
        }

        // ---- PRINT CONFIG ----
        if *print_config {
            println!("📄 Current configuration ({}):\n", path.display());
            println!("{}", cfg.to_yaml()?);
        }

        // ---- CHECK ----
        if *check {
            let content = if path.exists() {
                fs::read_to_string(path)?
            } else {
                String::new()
            };
            let missing = migrate::missing_keys(&content)?;
            if missing.is_empty() {
                success("Configuration file is complete.");
            } else {
                warning(format!("Missing fields: {}", missing.join(", ")));
            }
        }

        // ---- MIGRATE ----
        if *run_migrate {
            let added = migrate::fill_missing(path)?;
            if added.is_empty() {
                info("No configuration migration needed.");
            } else {
                success(format!("Added fields: {}", added.join(", ")));
            }
        }
    }

    Ok(())
}
