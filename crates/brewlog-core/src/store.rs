//! The `DrinkStore` trait.
//!
//! Implemented by storage backends ([`crate::memory::MemoryStore`],
//! `brewlog-store-sqlite`). [`crate::log::DrinkLog`] depends on this
//! abstraction, never on a concrete backend.

use std::future::Future;

use chrono::NaiveDate;
use uuid::Uuid;

use crate::drink::DrinkRecord;

/// An ordered record store keyed by drink id.
///
/// Records arrive fully built; the store never assigns ids or computes
/// caffeine. It only has to remember insertion order so that day queries can
/// return the most recent record first.
pub trait DrinkStore: Send + Sync {
  type Error: std::error::Error + Send + Sync + 'static;

  /// Persist a new record. Fails if the id is already present.
  fn insert(
    &self,
    record: DrinkRecord,
  ) -> impl Future<Output = Result<(), Self::Error>> + Send + '_;

  /// Delete a record by id. Returns the deleted record, or `None` if no
  /// record had that id.
  fn delete(
    &self,
    drink_id: Uuid,
  ) -> impl Future<Output = Result<Option<DrinkRecord>, Self::Error>> + Send + '_;

  /// Retrieve a record by id.
  fn get(
    &self,
    drink_id: Uuid,
  ) -> impl Future<Output = Result<Option<DrinkRecord>, Self::Error>> + Send + '_;

  /// All records whose normalised day equals `day`, most recently inserted
  /// first.
  fn records_on(
    &self,
    day: NaiveDate,
  ) -> impl Future<Output = Result<Vec<DrinkRecord>, Self::Error>> + Send + '_;

  /// Total caffeine in milligrams over [`DrinkStore::records_on`].
  ///
  /// Backends with a cheaper aggregate should override this.
  fn daily_total(
    &self,
    day: NaiveDate,
  ) -> impl Future<Output = Result<u64, Self::Error>> + Send + '_ {
    async move {
      let records = self.records_on(day).await?;
      Ok(records.iter().map(|r| u64::from(r.caffeine_mg)).sum())
    }
  }
}
