//! Host configuration: file first, then `BREWLOG_*` environment variables.

use std::path::{Path, PathBuf};

use anyhow::Context as _;
use brewlog_core::{calendar::DayPolicy, drink::DEFAULT_CAFFEINE_PER_100ML};
use serde::Deserialize;

/// Runtime settings, deserialised from `brewlog.toml` and the environment.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Settings {
  /// SQLite file; a leading `~/` is expanded.
  pub store_path:                 PathBuf,
  /// JSON array of known drinks.
  pub catalog_path:               PathBuf,
  pub default_caffeine_per_100ml: u32,
  /// Offset east of UTC used to decide which day a drink belongs to.
  pub utc_offset_minutes:         i32,
}

impl Default for Settings {
  fn default() -> Self {
    Self {
      store_path:                 PathBuf::from("~/.local/share/brewlog/drinks.sqlite3"),
      catalog_path:               PathBuf::from("energy_drinks.json"),
      default_caffeine_per_100ml: DEFAULT_CAFFEINE_PER_100ML,
      utc_offset_minutes:         0,
    }
  }
}

impl Settings {
  /// Layer the optional file at `path` under `BREWLOG_*` variables.
  pub fn load(path: &Path) -> anyhow::Result<Self> {
    let settings = config::Config::builder()
      .add_source(config::File::from(path).required(false))
      .add_source(config::Environment::with_prefix("BREWLOG"))
      .build()
      .context("failed to read config file")?;

    settings
      .try_deserialize()
      .context("failed to deserialise Settings")
  }

  pub fn day_policy(&self) -> anyhow::Result<DayPolicy> {
    DayPolicy::from_offset_minutes(self.utc_offset_minutes)
      .context("invalid utc_offset_minutes")
  }

  pub fn store_path(&self) -> PathBuf { expand_tilde(&self.store_path) }

  pub fn catalog_path(&self) -> PathBuf { expand_tilde(&self.catalog_path) }
}

/// Expand a leading `~` to the user's home directory.
fn expand_tilde(path: &Path) -> PathBuf {
  let s = path.to_string_lossy();
  if let Some(rest) = s.strip_prefix("~/")
    && let Ok(home) = std::env::var("HOME")
  {
    return PathBuf::from(home).join(rest);
  }
  path.to_path_buf()
}
