//! rAttendance library root.
//! Exposes the CLI parser, the aggregation engine, and the high-level run() function.

pub mod api;
pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod export;
pub mod models;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::context::{Context, resolve_config};
use cli::parser::{Cli, Commands};
use errors::{AppError, AppResult};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Central command dispatcher
pub async fn dispatch(cli: &Cli) -> AppResult<()> {
    // `config` must work even when no data source can be built
    if let Commands::Config { .. } = &cli.command {
        let (cfg, path) = resolve_config(cli)?;
        return cli::commands::config::handle(&cli.command, &cfg, &path);
    }

    let ctx = Context::from_cli(cli)?;
    let outcome = match &cli.command {
        Commands::Day { .. } => cli::commands::day::handle(&cli.command, &ctx).await,
        Commands::Week { .. } => cli::commands::week::handle(&cli.command, &ctx).await,
        Commands::Month { .. } => cli::commands::month::handle(&cli.command, &ctx).await,
        Commands::Stats { .. } => cli::commands::stats::handle(&cli.command, &ctx).await,
        Commands::Recent { .. } => cli::commands::recent::handle(&cli.command, &ctx).await,
        Commands::Status => cli::commands::status::handle(&ctx).await,
        Commands::Watch { .. } => cli::commands::watch::handle(&cli.command, &ctx).await,
        Commands::Export { .. } => cli::commands::export::handle(&cli.command, &ctx).await,
        // already handled without a data source
        Commands::Config { .. } => Ok(()),
    };

    match outcome {
        // nessun profilo: guida l'utente invece di fallire
        Err(AppError::MissingProfile) => {
            ui::messages::missing_profile_guidance();
            Ok(())
        }
        other => other,
    }
}

/// Diagnostics go to stderr, filtered by RUST_LOG (default: warn).
fn init_tracing() {
    let _ = tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .try_init();
}

/// Entry point usato da main.rs
pub async fn run() -> AppResult<()> {
    init_tracing();

    let cli = Cli::parse();
    tracing::debug!(config = ?cli.config, data = ?cli.data, "starting");

    dispatch(&cli).await
}
