//! `brewlog` — log caffeinated drinks and check your streak.
//!
//! # Usage
//!
//! ```text
//! brewlog add "Red Bull" 0.25
//! brewlog add "Cold brew" 0,3 --density 45 --day yesterday
//! brewlog day --day 2024-06-01
//! brewlog streak
//! brewlog suggest monster
//! ```

mod commands;
mod settings;

use std::{io, path::PathBuf};

use anyhow::{Context as _, Result};
use brewlog_core::{catalog::Catalog, log::DrinkLog};
use brewlog_store_sqlite::SqliteStore;
use clap::Parser;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

use commands::Command;
use settings::Settings;

#[derive(Parser, Debug)]
#[command(name = "brewlog", version, about = "Caffeine intake log")]
struct Cli {
  /// Path to the TOML configuration file.
  #[arg(short, long, default_value = "brewlog.toml")]
  config: PathBuf,

  #[command(subcommand)]
  command: Command,
}

#[tokio::main]
async fn main() -> Result<()> {
  // Logs go to stderr; stdout is reserved for command output.
  tracing_subscriber::fmt()
    .with_writer(io::stderr)
    .with_env_filter(
      EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy(),
    )
    .init();

  let cli = Cli::parse();
  let settings = Settings::load(&cli.config)?;

  let catalog = Catalog::load_or_empty(settings.catalog_path());

  let store_path = settings.store_path();
  let store = SqliteStore::open(&store_path)
    .await
    .with_context(|| format!("failed to open store at {store_path:?}"))?;

  let log = DrinkLog::new(store)
    .with_policy(settings.day_policy()?)
    .with_default_density(settings.default_caffeine_per_100ml)
    .context("invalid default_caffeine_per_100ml")?;

  let mut stdout = io::stdout().lock();
  commands::run(cli.command, &log, &catalog, log.today(), &mut stdout).await
}
