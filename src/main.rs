#![warn(clippy::pedantic)]

use crate::cli::{Cli, Command};
use crate::logging::configure_logging;
use anyhow::{Context, Result};
use clap::Parser;
use launch_at_login::{AutoLaunch, AutoLaunchOptions};
use log::{error, info};

mod cli;
mod logging;
mod shared;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    let _logger = match configure_logging(cli.log_level.as_deref(), cli.log_file) {
        Ok(handle) => handle,
        Err(e) => {
            eprintln!("Error configuring logging: {e:#}");
            std::process::exit(1);
        }
    };
    if let Err(e) = run(cli).await {
        error!("{e:#}");
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<()> {
    let base = match &cli.config {
        Some(file) => AutoLaunchOptions::load(file)
            .await
            .with_context(|| format!("loading {}", file.display()))?,
        None => AutoLaunchOptions::default(),
    };
    let launcher = AutoLaunch::new(cli.options(base)).context("resolving login entry")?;
    info!(
        "{} -> {} ({} backend)",
        launcher.app_name(),
        launcher.path(),
        launcher.backend().os()
    );
    match cli.command {
        Command::Enable => {
            launcher.enable().await?;
            println!("Enabled launch at login for {}", launcher.app_name());
        }
        Command::Disable => {
            launcher.disable().await?;
            println!("Disabled launch at login for {}", launcher.app_name());
        }
        Command::Status => {
            let state = if launcher.is_enabled().await? {
                "enabled"
            } else {
                "disabled"
            };
            println!("{state}");
        }
    }
    Ok(())
}
