//! [`SqliteStore`] — the SQLite implementation of [`DrinkStore`].

use std::path::Path;

use brewlog_core::{drink::DrinkRecord, store::DrinkStore};
use chrono::NaiveDate;
use rusqlite::OptionalExtension as _;
use uuid::Uuid;

use crate::{
  Error, Result,
  encode::{DRINK_COLUMNS, RawDrink, encode_day, encode_dt, encode_uuid},
  schema::SCHEMA,
};

// ─── Store ───────────────────────────────────────────────────────────────────

/// A drink store backed by a single SQLite file.
///
/// Cloning is cheap — the inner connection is reference-counted.
#[derive(Clone)]
pub struct SqliteStore {
  conn: tokio_rusqlite::Connection,
}

impl SqliteStore {
  /// Open (or create) a store at `path` and run schema initialisation.
  ///
  /// Missing parent directories are created.
  pub async fn open(path: impl AsRef<Path>) -> Result<Self> {
    let path = path.as_ref();
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
      tokio::fs::create_dir_all(parent).await?;
    }
    let conn = tokio_rusqlite::Connection::open(path).await?;
    let store = Self { conn };
    store.init_schema().await?;
    tracing::debug!(path = %path.display(), "opened drink store");
    Ok(store)
  }

  /// Open an in-memory store — useful for testing.
  pub async fn open_in_memory() -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open_in_memory().await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  async fn init_schema(&self) -> Result<()> {
    self
      .conn
      .call(|conn| {
        conn.execute_batch(SCHEMA)?;
        Ok(())
      })
      .await?;
    Ok(())
  }

  /// Number of records across all days.
  pub async fn count(&self) -> Result<u64> {
    let n: i64 = self
      .conn
      .call(|conn| Ok(conn.query_row("SELECT COUNT(*) FROM drinks", [], |r| r.get(0))?))
      .await?;
    Ok(n.max(0) as u64)
  }
}

// ─── DrinkStore impl ─────────────────────────────────────────────────────────

impl DrinkStore for SqliteStore {
  type Error = Error;

  async fn insert(&self, record: DrinkRecord) -> Result<()> {
    let drink_id_str    = encode_uuid(record.drink_id);
    let day_str         = encode_day(record.day);
    let recorded_at_str = encode_dt(record.recorded_at);
    let caffeine_mg     = i64::from(record.caffeine_mg);
    let DrinkRecord { name, volume_liters, .. } = record;

    self
      .conn
      .call(move |conn| {
        conn.execute(
          "INSERT INTO drinks (
             drink_id, day, name, volume_liters, caffeine_mg, recorded_at
           ) VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
          rusqlite::params![
            drink_id_str,
            day_str,
            name,
            volume_liters,
            caffeine_mg,
            recorded_at_str,
          ],
        )?;
        Ok(())
      })
      .await?;
    Ok(())
  }

  async fn delete(&self, drink_id: Uuid) -> Result<Option<DrinkRecord>> {
    let id_str = encode_uuid(drink_id);

    let raw: Option<RawDrink> = self
      .conn
      .call(move |conn| {
        // Read and delete in one transaction so the returned row is the one
        // that was removed.
        let tx = conn.transaction()?;
        let raw = tx
          .query_row(
            &format!("SELECT {DRINK_COLUMNS} FROM drinks WHERE drink_id = ?1"),
            rusqlite::params![id_str],
            RawDrink::from_row,
          )
          .optional()?;
        if raw.is_some() {
          tx.execute("DELETE FROM drinks WHERE drink_id = ?1", rusqlite::params![id_str])?;
        }
        tx.commit()?;
        Ok(raw)
      })
      .await?;

    raw.map(RawDrink::into_record).transpose()
  }

  async fn get(&self, drink_id: Uuid) -> Result<Option<DrinkRecord>> {
    let id_str = encode_uuid(drink_id);

    let raw: Option<RawDrink> = self
      .conn
      .call(move |conn| {
        Ok(
          conn
            .query_row(
              &format!("SELECT {DRINK_COLUMNS} FROM drinks WHERE drink_id = ?1"),
              rusqlite::params![id_str],
              RawDrink::from_row,
            )
            .optional()?,
        )
      })
      .await?;

    raw.map(RawDrink::into_record).transpose()
  }

  async fn records_on(&self, day: NaiveDate) -> Result<Vec<DrinkRecord>> {
    let day_str = encode_day(day);

    let raws: Vec<RawDrink> = self
      .conn
      .call(move |conn| {
        let mut stmt = conn.prepare(&format!(
          "SELECT {DRINK_COLUMNS} FROM drinks WHERE day = ?1 ORDER BY rowid DESC"
        ))?;
        let rows = stmt
          .query_map(rusqlite::params![day_str], RawDrink::from_row)?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
      })
      .await?;

    raws.into_iter().map(RawDrink::into_record).collect()
  }

  async fn daily_total(&self, day: NaiveDate) -> Result<u64> {
    let day_str = encode_day(day);

    let total: i64 = self
      .conn
      .call(move |conn| {
        Ok(conn.query_row(
          "SELECT COALESCE(SUM(caffeine_mg), 0) FROM drinks WHERE day = ?1",
          rusqlite::params![day_str],
          |r| r.get(0),
        )?)
      })
      .await?;

    u64::try_from(total).map_err(|_| Error::CorruptRow {
      drink_id: "*".to_owned(),
      reason:   format!("negative caffeine total for {day}: {total}"),
    })
  }
}
