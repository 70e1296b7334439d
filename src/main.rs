//! Acctdeck main entry point

use acctdeck_api::{start_server, AppState};
use acctdeck_config::{Config, ConfigError};
use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;
use tokio::runtime::Runtime;

#[derive(Parser, Debug)]
#[command(name = "acctdeck")]
#[command(author = "Acctdeck Contributors")]
#[command(version = "0.1.0")]
#[command(about = "A lightweight account selection web interface", long_about = None)]
struct Args {
    /// Configuration file path
    #[arg(short, long, default_value = "config.yaml")]
    config: PathBuf,

    /// Print the default configuration and exit
    #[arg(long)]
    print_default_config: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    if args.print_default_config {
        print!("{}", Config::generate_default());
        return Ok(());
    }

    let (config, missing) = match Config::load(&args.config) {
        Ok(config) => (config, false),
        Err(ConfigError::FileNotFound { .. }) => (Config::default(), true),
        Err(e) => {
            anyhow::bail!("Failed to load {}\n{}", args.config.display(), e.to_details());
        }
    };

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(&config.logging.level)).init();

    if missing {
        log::warn!("Config file not found: {}, using defaults", args.config.display());
    } else {
        log::info!("Config loaded from {}", args.config.display());
    }
    log::info!("Seeded {} accounts", config.accounts.len());

    let rt = Runtime::new().context("Failed to start tokio runtime")?;
    rt.block_on(start_server(AppState::new(config)))
        .context("Server error")?;

    Ok(())
}
