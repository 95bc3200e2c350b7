//! Behavioural tests for `DrinkLog` over the in-memory store.

use chrono::NaiveDate;
use uuid::Uuid;

use crate::{
  Error,
  calendar::DayPolicy,
  catalog::Catalog,
  drink::{DrinkRecord, NewDrink},
  log::DrinkLog,
  memory::MemoryStore,
};

fn log() -> DrinkLog<MemoryStore> { DrinkLog::new(MemoryStore::new()) }

fn today() -> NaiveDate { NaiveDate::from_ymd_opt(2024, 11, 20).unwrap() }

fn days_ago(n: u64) -> NaiveDate { today() - chrono::Days::new(n) }

async fn drink(log: &DrinkLog<MemoryStore>, day: NaiveDate) -> DrinkRecord {
  log
    .add(NewDrink::new(day, "Red Bull", 0.25).with_density(32))
    .await
    .unwrap()
}

// ─── Scenarios ───────────────────────────────────────────────────────────────

#[tokio::test]
async fn empty_log_has_no_total_and_no_streak() {
  let log = log();
  assert_eq!(log.total_caffeine_on(today()).await.unwrap(), 0);
  assert_eq!(log.current_streak(today()).await.unwrap(), 0);
  assert!(log.records_on(today()).await.unwrap().is_empty());
}

#[tokio::test]
async fn single_quarter_liter_drink() {
  let log = log();
  let record = drink(&log, today()).await;

  assert_eq!(record.caffeine_mg, 80);
  assert_eq!(record.day, today());
  assert_eq!(log.total_caffeine_on(today()).await.unwrap(), 80);
  assert_eq!(log.current_streak(today()).await.unwrap(), 1);
}

#[tokio::test]
async fn today_and_yesterday_but_not_before() {
  let log = log();
  drink(&log, today()).await;
  drink(&log, days_ago(1)).await;
  drink(&log, days_ago(3)).await;

  assert_eq!(log.current_streak(today()).await.unwrap(), 2);
}

#[tokio::test]
async fn removing_only_drink_today_clears_total_and_streak() {
  let log = log();
  let record = drink(&log, today()).await;

  let removed = log.remove(record.drink_id).await.unwrap();
  assert_eq!(removed, Some(record));
  assert_eq!(log.total_caffeine_on(today()).await.unwrap(), 0);
  assert_eq!(log.current_streak(today()).await.unwrap(), 0);
}

// ─── Adding ──────────────────────────────────────────────────────────────────

#[tokio::test]
async fn add_assigns_fresh_ids() {
  let log = log();
  let a = drink(&log, today()).await;
  let b = drink(&log, today()).await;
  assert_ne!(a.drink_id, b.drink_id);
  assert_eq!(log.get(a.drink_id).await.unwrap(), Some(a));
}

#[tokio::test]
async fn add_uses_configured_default_density() {
  let log = log().with_default_density(30).unwrap();
  let record = log
    .add(NewDrink::new(today(), "Something unknown", 0.5))
    .await
    .unwrap();
  assert_eq!(record.caffeine_mg, 150);
}

#[tokio::test]
async fn add_uses_builtin_default_density() {
  let log = log();
  assert_eq!(log.default_density(), 32);
  let record = log
    .add(NewDrink::new(today(), "Mystery can", 0.5))
    .await
    .unwrap();
  assert_eq!(record.caffeine_mg, 160);
}

#[tokio::test]
async fn add_with_catalog_density() {
  let catalog = Catalog::from_json(r#"[{"name": "Burn", "caffeinePer100ml": 32}]"#).unwrap();
  let log = log().with_default_density(30).unwrap();

  let density = catalog.density_for("burn", log.default_density());
  let record = log
    .add(NewDrink::new(today(), "Burn", 0.5).with_density(density))
    .await
    .unwrap();
  assert_eq!(record.caffeine_mg, 160);
}

#[tokio::test]
async fn add_rejects_invalid_volume() {
  let log = log();
  for volume in [0.0, -0.25, f64::NAN, f64::INFINITY] {
    let err = log
      .add(NewDrink::new(today(), "Red Bull", volume))
      .await
      .unwrap_err();
    assert!(matches!(err, Error::InvalidInput(_)), "volume {volume}");
  }
  assert!(log.store().is_empty().await);
}

#[tokio::test]
async fn add_rejects_zero_density() {
  let log = log();
  let err = log
    .add(NewDrink::new(today(), "Water", 0.5).with_density(0))
    .await
    .unwrap_err();
  assert!(matches!(err, Error::InvalidInput(_)));
  assert!(log.with_default_density(0).is_err());
}

// ─── Removing ────────────────────────────────────────────────────────────────

#[tokio::test]
async fn remove_unknown_id_is_noop() {
  let log = log();
  drink(&log, today()).await;

  assert_eq!(log.remove(Uuid::new_v4()).await.unwrap(), None);
  assert_eq!(log.total_caffeine_on(today()).await.unwrap(), 80);
}

#[tokio::test]
async fn removing_a_middle_day_breaks_the_chain() {
  let log = log();
  drink(&log, today()).await;
  let middle = drink(&log, days_ago(1)).await;
  drink(&log, days_ago(2)).await;
  assert_eq!(log.current_streak(today()).await.unwrap(), 3);

  log.remove(middle.drink_id).await.unwrap();
  assert_eq!(log.current_streak(today()).await.unwrap(), 1);
  assert_eq!(log.current_streak(days_ago(2)).await.unwrap(), 1);
}

#[tokio::test]
async fn removing_one_of_two_drinks_keeps_the_day() {
  let log = log();
  let first = drink(&log, today()).await;
  drink(&log, today()).await;

  log.remove(first.drink_id).await.unwrap();
  assert_eq!(log.total_caffeine_on(today()).await.unwrap(), 80);
  assert_eq!(log.current_streak(today()).await.unwrap(), 1);
}

// ─── Day queries ─────────────────────────────────────────────────────────────

#[tokio::test]
async fn records_on_is_most_recent_first_and_day_scoped() {
  let log = log();
  let first = drink(&log, today()).await;
  drink(&log, days_ago(1)).await;
  let second = drink(&log, today()).await;

  let ids: Vec<_> = log
    .records_on(today())
    .await
    .unwrap()
    .into_iter()
    .map(|r| r.drink_id)
    .collect();
  assert_eq!(ids, vec![second.drink_id, first.drink_id]);
}

#[tokio::test]
async fn other_days_never_change_a_total() {
  let log = log();
  drink(&log, today()).await;
  let before = log.total_caffeine_on(today()).await.unwrap();

  drink(&log, days_ago(1)).await;
  log
    .add(NewDrink::new(today().succ_opt().unwrap(), "Monster", 0.5))
    .await
    .unwrap();

  assert_eq!(log.total_caffeine_on(today()).await.unwrap(), before);
}

#[tokio::test]
async fn total_sums_every_record_of_the_day() {
  let log = log();
  log
    .add(NewDrink::new(today(), "Red Bull", 0.25).with_density(32))
    .await
    .unwrap();
  log
    .add(NewDrink::new(today(), "Monster", 0.5).with_density(30))
    .await
    .unwrap();
  assert_eq!(log.total_caffeine_on(today()).await.unwrap(), 80 + 150);
}

// ─── Streaks ─────────────────────────────────────────────────────────────────

#[tokio::test]
async fn streak_grows_as_earlier_days_are_filled() {
  let log = log();
  let mut previous = 0;
  for n in 0..7 {
    drink(&log, days_ago(n)).await;
    let streak = log.current_streak(today()).await.unwrap();
    assert!(streak > previous);
    previous = streak;
  }
  assert_eq!(previous, 7);
}

#[tokio::test]
async fn streak_is_zero_when_reference_day_is_empty() {
  let log = log();
  drink(&log, days_ago(1)).await;
  drink(&log, days_ago(2)).await;

  assert_eq!(log.current_streak(today()).await.unwrap(), 0);
  assert_eq!(log.current_streak(days_ago(1)).await.unwrap(), 2);
}

#[tokio::test]
async fn zero_milligram_day_does_not_count() {
  let log = log();
  drink(&log, days_ago(1)).await;
  // 0.001 l at 1 mg/100ml rounds to 0 mg.
  let record = log
    .add(NewDrink::new(today(), "Decaf", 0.001).with_density(1))
    .await
    .unwrap();
  assert_eq!(record.caffeine_mg, 0);

  assert_eq!(log.current_streak(today()).await.unwrap(), 0);
}

#[tokio::test]
async fn streak_terminates_at_the_start_of_the_calendar() {
  let log = log();
  drink(&log, NaiveDate::MIN).await;
  assert_eq!(log.current_streak(NaiveDate::MIN).await.unwrap(), 1);
}

// ─── Summary ─────────────────────────────────────────────────────────────────

#[tokio::test]
async fn day_summary_combines_queries() {
  let log = log();
  drink(&log, today()).await;
  drink(&log, today()).await;
  drink(&log, days_ago(1)).await;

  let summary = log.day_summary(today()).await.unwrap();
  assert_eq!(summary.day, today());
  assert_eq!(summary.records.len(), 2);
  assert_eq!(summary.total_caffeine_mg, 160);
  assert_eq!(summary.streak_days, 2);

  let empty = log.day_summary(days_ago(5)).await.unwrap();
  assert!(empty.records.is_empty());
  assert_eq!(empty.total_caffeine_mg, 0);
  assert_eq!(empty.streak_days, 0);
}

#[tokio::test]
async fn today_follows_the_policy() {
  let policy = DayPolicy::from_offset_minutes(120).unwrap();
  let log = log().with_policy(policy);
  assert_eq!(log.policy(), policy);
  assert_eq!(log.today(), policy.today());
}
