//! [`DrinkLog`] — day-scoped aggregation over a [`DrinkStore`].

use chrono::{NaiveDate, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::{
  Error, Result,
  calendar::DayPolicy,
  drink::{
    CaffeineSource, DEFAULT_CAFFEINE_PER_100ML, DrinkRecord, NewDrink, caffeine_mg,
    validate_volume,
  },
  store::DrinkStore,
};

/// Everything a host needs to show for one day.
#[derive(Debug, Clone, Serialize)]
pub struct DaySummary {
  pub day:               NaiveDate,
  /// Most recent first.
  pub records:           Vec<DrinkRecord>,
  pub total_caffeine_mg: u64,
  pub streak_days:       u32,
}

/// The drink log. Owns its store and the calendar used to bucket records.
pub struct DrinkLog<S> {
  store:             S,
  policy:            DayPolicy,
  default_per_100ml: u32,
}

impl<S: DrinkStore> DrinkLog<S> {
  /// A log over `store` using UTC days and the built-in default density.
  pub fn new(store: S) -> Self {
    Self {
      store,
      policy: DayPolicy::default(),
      default_per_100ml: DEFAULT_CAFFEINE_PER_100ML,
    }
  }

  pub fn with_policy(mut self, policy: DayPolicy) -> Self {
    self.policy = policy;
    self
  }

  /// Override the density used for [`CaffeineSource::Default`].
  pub fn with_default_density(mut self, caffeine_per_100ml: u32) -> Result<Self> {
    self.default_per_100ml = positive_density(caffeine_per_100ml)?;
    Ok(self)
  }

  pub fn store(&self) -> &S { &self.store }

  pub fn policy(&self) -> DayPolicy { self.policy }

  pub fn default_density(&self) -> u32 { self.default_per_100ml }

  /// The current day under this log's calendar.
  pub fn today(&self) -> NaiveDate { self.policy.today() }

  // ── Writes ────────────────────────────────────────────────────────────────

  /// Validate `input`, compute its caffeine content and store it under a
  /// fresh id.
  pub async fn add(&self, input: NewDrink) -> Result<DrinkRecord> {
    let volume_liters = validate_volume(input.volume_liters)?;
    let density = match input.caffeine {
      CaffeineSource::PerHundredMl(d) => positive_density(d)?,
      CaffeineSource::Default => self.default_per_100ml,
    };

    let record = DrinkRecord {
      drink_id: Uuid::new_v4(),
      day: input.day,
      name: input.name,
      volume_liters,
      caffeine_mg: caffeine_mg(volume_liters, density),
      recorded_at: Utc::now(),
    };

    self.store.insert(record.clone()).await.map_err(Error::store)?;
    tracing::debug!(
      drink_id = %record.drink_id,
      day = %record.day,
      caffeine_mg = record.caffeine_mg,
      "logged drink"
    );
    Ok(record)
  }

  /// Delete the record with `drink_id`.
  ///
  /// An unknown id is a no-op and yields `Ok(None)`.
  pub async fn remove(&self, drink_id: Uuid) -> Result<Option<DrinkRecord>> {
    let removed = self.store.delete(drink_id).await.map_err(Error::store)?;
    match &removed {
      Some(r) => tracing::debug!(%drink_id, day = %r.day, "removed drink"),
      None => tracing::debug!(%drink_id, "remove: no such drink"),
    }
    Ok(removed)
  }

  // ── Reads ─────────────────────────────────────────────────────────────────

  pub async fn get(&self, drink_id: Uuid) -> Result<Option<DrinkRecord>> {
    self.store.get(drink_id).await.map_err(Error::store)
  }

  /// Records logged for `day`, most recent first.
  pub async fn records_on(&self, day: NaiveDate) -> Result<Vec<DrinkRecord>> {
    self.store.records_on(day).await.map_err(Error::store)
  }

  /// Milligrams of caffeine logged for `day`; zero for an empty day.
  pub async fn total_caffeine_on(&self, day: NaiveDate) -> Result<u64> {
    self.store.daily_total(day).await.map_err(Error::store)
  }

  /// Number of consecutive days ending at `reference_day` (inclusive) that
  /// each have some caffeine logged.
  pub async fn current_streak(&self, reference_day: NaiveDate) -> Result<u32> {
    let mut streak = 0;
    let mut cursor = Some(reference_day);
    while let Some(day) = cursor {
      if self.total_caffeine_on(day).await? == 0 {
        break;
      }
      streak += 1;
      cursor = day.pred_opt();
    }
    Ok(streak)
  }

  /// Records, total and streak for `day` in one call.
  pub async fn day_summary(&self, day: NaiveDate) -> Result<DaySummary> {
    let records = self.records_on(day).await?;
    let total_caffeine_mg: u64 = records.iter().map(|r| u64::from(r.caffeine_mg)).sum();
    let streak_days = if total_caffeine_mg == 0 {
      0
    } else {
      self.current_streak(day).await?
    };
    Ok(DaySummary { day, records, total_caffeine_mg, streak_days })
  }
}

fn positive_density(caffeine_per_100ml: u32) -> Result<u32> {
  if caffeine_per_100ml == 0 {
    return Err(Error::InvalidInput(
      "caffeine density must be positive".to_owned(),
    ));
  }
  Ok(caffeine_per_100ml)
}
