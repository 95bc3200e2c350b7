//! [`MemoryStore`] — an in-process [`DrinkStore`].
//!
//! Used by tests and by hosts that do not need persistence. Writes take the
//! lock exclusively; reads share it.

use std::sync::Arc;

use chrono::NaiveDate;
use thiserror::Error;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::{drink::DrinkRecord, store::DrinkStore};

#[derive(Debug, Error)]
pub enum MemoryStoreError {
  #[error("drink {0} already exists")]
  DuplicateId(Uuid),
}

/// Records kept in insertion order behind a single writer lock.
///
/// Cloning is cheap and clones share the same records.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
  records: Arc<RwLock<Vec<DrinkRecord>>>,
}

impl MemoryStore {
  pub fn new() -> Self { Self::default() }

  /// Number of records across all days.
  pub async fn len(&self) -> usize { self.records.read().await.len() }

  pub async fn is_empty(&self) -> bool { self.records.read().await.is_empty() }
}

impl DrinkStore for MemoryStore {
  type Error = MemoryStoreError;

  async fn insert(&self, record: DrinkRecord) -> Result<(), MemoryStoreError> {
    let mut records = self.records.write().await;
    if records.iter().any(|r| r.drink_id == record.drink_id) {
      return Err(MemoryStoreError::DuplicateId(record.drink_id));
    }
    records.push(record);
    Ok(())
  }

  async fn delete(&self, drink_id: Uuid) -> Result<Option<DrinkRecord>, MemoryStoreError> {
    let mut records = self.records.write().await;
    let removed = records
      .iter()
      .position(|r| r.drink_id == drink_id)
      .map(|idx| records.remove(idx));
    Ok(removed)
  }

  async fn get(&self, drink_id: Uuid) -> Result<Option<DrinkRecord>, MemoryStoreError> {
    let records = self.records.read().await;
    Ok(records.iter().find(|r| r.drink_id == drink_id).cloned())
  }

  async fn records_on(&self, day: NaiveDate) -> Result<Vec<DrinkRecord>, MemoryStoreError> {
    let records = self.records.read().await;
    Ok(records.iter().rev().filter(|r| r.day == day).cloned().collect())
  }

  async fn daily_total(&self, day: NaiveDate) -> Result<u64, MemoryStoreError> {
    let records = self.records.read().await;
    Ok(
      records
        .iter()
        .filter(|r| r.day == day)
        .map(|r| u64::from(r.caffeine_mg))
        .sum(),
    )
  }
}
