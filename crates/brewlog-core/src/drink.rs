//! Drink records — the only thing the log stores.
//!
//! A record is written once and never updated. Its caffeine content is fixed
//! at creation time from the volume and a caffeine density.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{Error, Result};

/// Density used when a drink matches nothing in the catalog and the caller
/// supplies no density of its own.
pub const DEFAULT_CAFFEINE_PER_100ML: u32 = 32;

// ─── Record ──────────────────────────────────────────────────────────────────

/// One logged drink.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DrinkRecord {
  pub drink_id:      Uuid,
  /// Calendar day the drink counts towards, normalised when written.
  pub day:           NaiveDate,
  pub name:          String,
  pub volume_liters: f64,
  pub caffeine_mg:   u32,
  /// Set by the log on insertion; not used for day bucketing.
  pub recorded_at:   DateTime<Utc>,
}

// ─── Input ───────────────────────────────────────────────────────────────────

/// Where the caffeine density for a new drink comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CaffeineSource {
  /// Milligrams per 100 ml, usually read from a matched catalog entry.
  PerHundredMl(u32),
  /// The log's configured fallback density.
  #[default]
  Default,
}

/// Input to [`crate::log::DrinkLog::add`].
/// The id, `recorded_at` and caffeine content are always set by the log.
#[derive(Debug, Clone)]
pub struct NewDrink {
  pub day:           NaiveDate,
  pub name:          String,
  pub volume_liters: f64,
  pub caffeine:      CaffeineSource,
}

impl NewDrink {
  /// Convenience constructor using the default caffeine density.
  pub fn new(day: NaiveDate, name: impl Into<String>, volume_liters: f64) -> Self {
    Self {
      day,
      name: name.into(),
      volume_liters,
      caffeine: CaffeineSource::Default,
    }
  }

  pub fn with_density(mut self, caffeine_per_100ml: u32) -> Self {
    self.caffeine = CaffeineSource::PerHundredMl(caffeine_per_100ml);
    self
  }
}

// ─── Caffeine arithmetic ─────────────────────────────────────────────────────

/// Caffeine in a drink: `round(liters * 1000 / 100 * mg_per_100ml)`.
///
/// The volume must already be validated with [`validate_volume`].
pub fn caffeine_mg(volume_liters: f64, caffeine_per_100ml: u32) -> u32 {
  let mg = (volume_liters * 10.0 * f64::from(caffeine_per_100ml)).round();
  // Float-to-int `as` saturates, so absurd volumes clamp instead of wrapping.
  mg as u32
}

/// Reject volumes that are not finite and strictly positive.
pub fn validate_volume(volume_liters: f64) -> Result<f64> {
  if volume_liters.is_finite() && volume_liters > 0.0 {
    Ok(volume_liters)
  } else {
    Err(Error::InvalidInput(format!(
      "volume must be a positive number of liters, got {volume_liters}"
    )))
  }
}

/// Parse user-typed volume text in liters.
///
/// Accepts either `.` or `,` as the decimal separator.
pub fn parse_volume(text: &str) -> Result<f64> {
  let trimmed = text.trim();
  let normalised = trimmed.replace(',', ".");
  let value: f64 = normalised
    .parse()
    .map_err(|_| Error::InvalidInput(format!("not a volume: {trimmed:?}")))?;
  validate_volume(value)
}
