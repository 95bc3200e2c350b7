//! Day normalisation.
//!
//! Every record is bucketed into a calendar day exactly once, when it is
//! written. All bucketing goes through a single [`DayPolicy`] so that day
//! comparisons never mix time zones.

use chrono::{DateTime, FixedOffset, NaiveDate, Offset as _, Utc};

use crate::{Error, Result};

/// The calendar reference used to turn instants into days: a fixed offset
/// from UTC.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayPolicy {
  offset: FixedOffset,
}

impl Default for DayPolicy {
  fn default() -> Self { Self::utc() }
}

impl DayPolicy {
  pub fn utc() -> Self {
    Self { offset: Utc.fix() }
  }

  /// Build a policy from an offset in minutes east of UTC.
  ///
  /// Offsets outside ±24h are rejected.
  pub fn from_offset_minutes(minutes: i32) -> Result<Self> {
    minutes
      .checked_mul(60)
      .and_then(FixedOffset::east_opt)
      .map(|offset| Self { offset })
      .ok_or_else(|| {
        Error::InvalidInput(format!("utc offset out of range: {minutes} minutes"))
      })
  }

  pub fn offset(&self) -> FixedOffset { self.offset }

  /// The calendar day `instant` falls on under this policy.
  pub fn day_of(&self, instant: DateTime<Utc>) -> NaiveDate {
    instant.with_timezone(&self.offset).date_naive()
  }

  /// The current calendar day under this policy.
  pub fn today(&self) -> NaiveDate { self.day_of(Utc::now()) }
}
