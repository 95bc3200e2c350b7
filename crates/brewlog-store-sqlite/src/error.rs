//! Error type for `brewlog-store-sqlite`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("database error: {0}")]
  Database(#[from] tokio_rusqlite::Error),

  #[error("uuid parse error: {0}")]
  Uuid(#[from] uuid::Error),

  #[error("date parse error: {0}")]
  DateParse(String),

  /// A stored value violates a record invariant.
  #[error("corrupt row for drink {drink_id}: {reason}")]
  CorruptRow { drink_id: String, reason: String },

  #[error("could not create store directory: {0}")]
  Io(#[from] std::io::Error),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
