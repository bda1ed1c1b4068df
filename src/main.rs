//! Vastu Desk - numerology reports, Vastu remedies and consultation booking
//!
//! Binary entry point. Without a subcommand the interactive TUI starts;
//! subcommands run a single request and print NDJSON events.

mod cli;
mod headless;

use std::process::ExitCode;

use clap::Parser;
use tracing::{info, warn};

use vastu_app::config::{self, Settings};
use vastu_backend::RpcBackend;

use cli::Args;

#[tokio::main]
async fn main() -> color_eyre::Result<ExitCode> {
    color_eyre::install()?;
    let args = Args::parse();

    if let Err(e) = vastu_core::logging::init() {
        eprintln!("Warning: file logging disabled: {}", e);
    }

    let settings = load_settings(&args)?;
    let backend = RpcBackend::new(settings.backend.url.clone());

    let code = match &args.command {
        Some(command) => {
            let status = headless::run(&backend, command).await;
            backend.disconnect().await;
            status.exit_code()
        }
        None => {
            vastu_tui::run(backend, settings).await?;
            ExitCode::SUCCESS
        }
    };

    Ok(code)
}

/// Settings from `--config` or the default location, with `--backend` applied
fn load_settings(args: &Args) -> color_eyre::Result<Settings> {
    let path = match &args.config {
        Some(path) => Some(path.clone()),
        None => {
            let path = config::default_config_path();
            if let Some(path) = &path {
                if let Err(e) = config::init_config_file(path) {
                    warn!("Could not write default config: {}", e);
                }
            }
            path
        }
    };

    let settings = match path {
        Some(path) => {
            info!("Loading settings from {}", path.display());
            config::load_settings(&path)
        }
        None => Settings::default(),
    };

    Ok(settings.with_backend_override(args.backend.as_deref())?)
}
