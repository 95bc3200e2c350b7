//! Encoding and decoding helpers between drink records and the plain-text
//! representations stored in SQLite columns.
//!
//! Days are ISO 8601 dates (`2024-06-01`) so they compare correctly as text.
//! Timestamps are RFC 3339 strings. UUIDs are hyphenated lowercase strings.

use brewlog_core::drink::DrinkRecord;
use chrono::{DateTime, NaiveDate, Utc};
use uuid::Uuid;

use crate::{Error, Result};

// ─── Uuid ─────────────────────────────────────────────────────────────────────

pub fn encode_uuid(id: Uuid) -> String { id.hyphenated().to_string() }

pub fn decode_uuid(s: &str) -> Result<Uuid> { Ok(Uuid::parse_str(s)?) }

// ─── NaiveDate ────────────────────────────────────────────────────────────────

pub fn encode_day(day: NaiveDate) -> String { day.format("%Y-%m-%d").to_string() }

pub fn decode_day(s: &str) -> Result<NaiveDate> {
  NaiveDate::parse_from_str(s, "%Y-%m-%d").map_err(|e| Error::DateParse(e.to_string()))
}

// ─── DateTime<Utc> ────────────────────────────────────────────────────────────

pub fn encode_dt(dt: DateTime<Utc>) -> String { dt.to_rfc3339() }

pub fn decode_dt(s: &str) -> Result<DateTime<Utc>> {
  DateTime::parse_from_rfc3339(s)
    .map(|dt| dt.with_timezone(&Utc))
    .map_err(|e| Error::DateParse(e.to_string()))
}

// ─── Row type ────────────────────────────────────────────────────────────────

/// Column list matching the field order of [`RawDrink::from_row`].
pub const DRINK_COLUMNS: &str =
  "drink_id, day, name, volume_liters, caffeine_mg, recorded_at";

/// Raw values read directly from a `drinks` row.
pub struct RawDrink {
  pub drink_id:      String,
  pub day:           String,
  pub name:          String,
  pub volume_liters: f64,
  pub caffeine_mg:   i64,
  pub recorded_at:   String,
}

impl RawDrink {
  pub fn from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Self> {
    Ok(Self {
      drink_id:      row.get(0)?,
      day:           row.get(1)?,
      name:          row.get(2)?,
      volume_liters: row.get(3)?,
      caffeine_mg:   row.get(4)?,
      recorded_at:   row.get(5)?,
    })
  }

  pub fn into_record(self) -> Result<DrinkRecord> {
    let caffeine_mg = u32::try_from(self.caffeine_mg).map_err(|_| Error::CorruptRow {
      drink_id: self.drink_id.clone(),
      reason:   format!("caffeine_mg out of range: {}", self.caffeine_mg),
    })?;

    Ok(DrinkRecord {
      drink_id: decode_uuid(&self.drink_id)?,
      day: decode_day(&self.day)?,
      name: self.name,
      volume_liters: self.volume_liters,
      caffeine_mg,
      recorded_at: decode_dt(&self.recorded_at)?,
    })
  }
}
