//! Subcommands and their plain-text output.

use std::{io::Write, str::FromStr};

use anyhow::{Context as _, Result};
use brewlog_core::{
  catalog::Catalog,
  drink::{NewDrink, parse_volume},
  log::DrinkLog,
  store::DrinkStore,
};
use chrono::NaiveDate;
use clap::Subcommand;
use uuid::Uuid;

// ─── Day argument ────────────────────────────────────────────────────────────

/// A day given on the command line: `today`, `yesterday`, `tomorrow`, or an
/// ISO date such as `2024-06-01`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayArg {
  Relative(i64),
  Date(NaiveDate),
}

impl FromStr for DayArg {
  type Err = String;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s.trim().to_lowercase().as_str() {
      "today" => Ok(Self::Relative(0)),
      "yesterday" => Ok(Self::Relative(-1)),
      "tomorrow" => Ok(Self::Relative(1)),
      other => NaiveDate::parse_from_str(other, "%Y-%m-%d")
        .map(Self::Date)
        .map_err(|_| format!("expected today, yesterday, tomorrow or YYYY-MM-DD, got {s:?}")),
    }
  }
}

impl DayArg {
  fn resolve(self, today: NaiveDate) -> NaiveDate {
    match self {
      Self::Date(d) => d,
      Self::Relative(offset) => today
        .checked_add_signed(chrono::Duration::days(offset))
        .unwrap_or(today),
    }
  }
}

fn resolve_day(day: Option<DayArg>, today: NaiveDate) -> NaiveDate {
  day.map_or(today, |d| d.resolve(today))
}

// ─── Commands ────────────────────────────────────────────────────────────────

#[derive(Subcommand, Debug)]
pub enum Command {
  /// Log a drink. The caffeine density comes from `--density`, a catalog
  /// entry with the same name, or the configured default, in that order.
  Add {
    name:    String,
    /// Volume in liters, e.g. `0.25` or `0,5`.
    volume:  String,
    #[arg(long)]
    day:     Option<DayArg>,
    /// Caffeine in mg per 100 ml.
    #[arg(long)]
    density: Option<u32>,
  },

  /// Delete a logged drink by id.
  Remove { id: Uuid },

  /// Show the drinks, total caffeine and streak for a day.
  Day {
    #[arg(long)]
    day:  Option<DayArg>,
    /// Print the summary as JSON.
    #[arg(long)]
    json: bool,
  },

  /// Print the number of consecutive days with caffeine ending at a day.
  Streak {
    #[arg(long)]
    day: Option<DayArg>,
  },

  /// List catalog drinks whose name contains the query.
  Suggest { query: String },
}

/// Execute `cmd` against `log`, writing human-readable output to `out`.
///
/// Relative days and omitted `--day` flags resolve against `today`.
pub async fn run<S, W>(
  cmd: Command,
  log: &DrinkLog<S>,
  catalog: &Catalog,
  today: NaiveDate,
  out: &mut W,
) -> Result<()>
where
  S: DrinkStore,
  W: Write,
{
  match cmd {
    Command::Add { name, volume, day, density } => {
      let volume_liters = parse_volume(&volume)?;
      let density =
        density.unwrap_or_else(|| catalog.density_for(&name, log.default_density()));
      let input = NewDrink::new(resolve_day(day, today), name, volume_liters)
        .with_density(density);

      let record = log.add(input).await.context("failed to log drink")?;
      writeln!(
        out,
        "logged {} ({:.2} l, {} mg) on {} [{}]",
        record.name, record.volume_liters, record.caffeine_mg, record.day, record.drink_id
      )?;
    }

    Command::Remove { id } => match log.remove(id).await? {
      Some(record) => writeln!(
        out,
        "removed {} ({} mg) from {}",
        record.name, record.caffeine_mg, record.day
      )?,
      None => writeln!(out, "no drink with id {id}")?,
    },

    Command::Day { day, json } => {
      let summary = log.day_summary(resolve_day(day, today)).await?;
      if json {
        serde_json::to_writer_pretty(&mut *out, &summary)?;
        writeln!(out)?;
        return Ok(());
      }

      writeln!(
        out,
        "{}: {} mg caffeine, streak {} day(s)",
        summary.day, summary.total_caffeine_mg, summary.streak_days
      )?;
      if summary.records.is_empty() {
        writeln!(out, "  nothing logged")?;
      }
      for r in &summary.records {
        writeln!(
          out,
          "  {}  {:<24} {:>5.2} l {:>5} mg",
          r.drink_id, r.name, r.volume_liters, r.caffeine_mg
        )?;
      }
    }

    Command::Streak { day } => {
      let streak = log.current_streak(resolve_day(day, today)).await?;
      writeln!(out, "{streak}")?;
    }

    Command::Suggest { query } => {
      for entry in catalog.by_name(&query) {
        writeln!(out, "{}\t{} mg/100ml", entry.name, entry.caffeine_per_100ml)?;
      }
    }
  }

  Ok(())
}
