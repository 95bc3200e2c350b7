//! Error types for `brewlog-core`.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  /// User-supplied data violates a record invariant (e.g. a non-numeric or
  /// non-positive volume).
  #[error("invalid input: {0}")]
  InvalidInput(String),

  #[error("failed to load drink catalog from {path:?}: {reason}")]
  CatalogLoad { path: PathBuf, reason: String },

  #[error("serialization error: {0}")]
  Json(#[from] serde_json::Error),

  #[error("store error: {0}")]
  Store(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl Error {
  /// Wrap a backend error from any [`crate::store::DrinkStore`].
  pub fn store<E>(err: E) -> Self
  where
    E: std::error::Error + Send + Sync + 'static,
  {
    Self::Store(Box::new(err))
  }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
