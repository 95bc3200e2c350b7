//! SQL schema for the brewlog SQLite store.
//!
//! Executed once at connection startup. Future migrations will be gated on
//! `PRAGMA user_version`.

/// Full schema DDL; idempotent thanks to `CREATE TABLE IF NOT EXISTS`.
pub const SCHEMA: &str = "
PRAGMA journal_mode = WAL;

-- Rows are inserted and deleted, never updated.
-- Insertion order is the implicit rowid.
CREATE TABLE IF NOT EXISTS drinks (
    drink_id      TEXT PRIMARY KEY,
    day           TEXT NOT NULL,      -- ISO 8601 calendar date, normalised on write
    name          TEXT NOT NULL,
    volume_liters REAL NOT NULL CHECK (volume_liters > 0),
    caffeine_mg   INTEGER NOT NULL CHECK (caffeine_mg >= 0),
    recorded_at   TEXT NOT NULL       -- RFC 3339 UTC
);

CREATE INDEX IF NOT EXISTS drinks_day_idx ON drinks(day);

PRAGMA user_version = 1;
";
