//! The static catalog of known drinks.
//!
//! The catalog is a JSON array loaded once at start-up and never modified.
//! It only supplies default caffeine densities and name suggestions; records
//! do not have to match a catalog entry.

use std::path::Path;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{Error, Result};

/// One known drink, e.g. `{"name": "Red Bull", "caffeinePer100ml": 32}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DrinkCatalogEntry {
  /// Generated on load when the asset does not carry one.
  #[serde(default = "Uuid::new_v4")]
  pub id:                 Uuid,
  pub name:               String,
  pub caffeine_per_100ml: u32,
}

/// A read-only list of [`DrinkCatalogEntry`] values.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
  entries: Vec<DrinkCatalogEntry>,
}

impl Catalog {
  /// Build a catalog from already-parsed entries.
  ///
  /// Entries with a zero density are rejected.
  pub fn new(entries: Vec<DrinkCatalogEntry>) -> Result<Self> {
    if let Some(bad) = entries.iter().find(|e| e.caffeine_per_100ml == 0) {
      return Err(Error::InvalidInput(format!(
        "catalog entry {:?} has no caffeine density",
        bad.name
      )));
    }
    Ok(Self { entries })
  }

  /// Parse a catalog from the text of a JSON array.
  pub fn from_json(json: &str) -> Result<Self> {
    let entries: Vec<DrinkCatalogEntry> = serde_json::from_str(json)?;
    Self::new(entries)
  }

  /// Read and parse the catalog asset at `path`.
  ///
  /// An unreadable file or malformed JSON is [`Error::CatalogLoad`]; a
  /// well-formed catalog with an invalid entry is [`Error::InvalidInput`].
  pub fn load(path: impl AsRef<Path>) -> Result<Self> {
    let path = path.as_ref();
    let catalog_load = |reason: String| Error::CatalogLoad {
      path: path.to_path_buf(),
      reason,
    };

    let raw = std::fs::read_to_string(path).map_err(|e| catalog_load(e.to_string()))?;
    match Self::from_json(&raw) {
      Ok(catalog) => Ok(catalog),
      Err(Error::Json(e)) => Err(catalog_load(e.to_string())),
      Err(other) => Err(other),
    }
  }

  /// Load the catalog, or fall back to an empty one if it cannot be read.
  ///
  /// A missing catalog only disables suggestions, so the failure is logged
  /// rather than returned.
  pub fn load_or_empty(path: impl AsRef<Path>) -> Self {
    match Self::load(path) {
      Ok(catalog) => {
        tracing::debug!(entries = catalog.len(), "loaded drink catalog");
        catalog
      }
      Err(e) => {
        tracing::warn!("{e}; continuing with an empty catalog");
        Self::default()
      }
    }
  }

  pub fn len(&self) -> usize { self.entries.len() }

  pub fn is_empty(&self) -> bool { self.entries.is_empty() }

  pub fn entries(&self) -> &[DrinkCatalogEntry] { &self.entries }

  /// Entries whose name contains `query`, ignoring case.
  ///
  /// An empty (or all-whitespace) query matches nothing.
  pub fn by_name<'a>(
    &'a self,
    query: &str,
  ) -> impl Iterator<Item = &'a DrinkCatalogEntry> + 'a {
    let needle = query.trim().to_lowercase();
    self
      .entries
      .iter()
      .filter(move |e| !needle.is_empty() && e.name.to_lowercase().contains(&needle))
  }

  /// The entry whose name equals `name`, ignoring case and surrounding
  /// whitespace.
  pub fn exact(&self, name: &str) -> Option<&DrinkCatalogEntry> {
    let needle = name.trim().to_lowercase();
    self.entries.iter().find(|e| e.name.to_lowercase() == needle)
  }

  /// Caffeine density for `name`, or `default` if the catalog does not know
  /// it.
  pub fn density_for(&self, name: &str, default: u32) -> u32 {
    self
      .exact(name)
      .map(|e| e.caffeine_per_100ml)
      .unwrap_or(default)
  }
}
