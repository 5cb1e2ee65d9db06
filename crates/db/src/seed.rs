//! Demo and test data for both catalogs.
//!
//! Not meant for production databases: seeded rows are indistinguishable
//! from real ones. Inserts use `INSERT OR IGNORE`, so re-seeding an existing
//! database leaves earlier rows untouched.

use std::path::Path;

use chrono::{Duration, SecondsFormat, Utc};
use rand::seq::IndexedRandom;
use rand::Rng;
use serde::Deserialize;

use crate::DbPool;

/// Number of races seeded by the demo setup.
pub const NUMBER_OF_SEEDED_RACES: usize = 100;

/// Meeting ids are drawn from `1..=MAX_SEEDED_MEETING_ID`.
pub const MAX_SEEDED_MEETING_ID: i64 = 10;

/// Bundled sports events.
const BUILTIN_EVENTS: &str = include_str!("../../../db/testdata/events.json");

const NAME_PREFIXES: &[&str] = &[
    "North", "South", "Golden", "Silver", "Royal", "Coastal", "Highland", "River",
    "Autumn", "Spring", "Harbour", "Valley",
];

const NAME_SUFFIXES: &[&str] = &[
    "Stakes", "Cup", "Handicap", "Plate", "Classic", "Mile", "Sprint", "Derby",
    "Trophy", "Guineas",
];

/// One entry of the sports events seed file.
#[derive(Debug, Clone, Deserialize)]
pub struct SeedEvent {
    pub name: String,
    pub category: String,
    pub competition: String,
}

#[derive(Debug, thiserror::Error)]
pub enum SeedError {
    #[error("Failed to read seed file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid seed data: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Parse the bundled sports events.
pub fn builtin_events() -> Result<Vec<SeedEvent>, SeedError> {
    Ok(serde_json::from_str(BUILTIN_EVENTS)?)
}

/// Parse sports events from a JSON file.
pub fn load_events(path: &Path) -> Result<Vec<SeedEvent>, SeedError> {
    let raw = std::fs::read_to_string(path).map_err(|source| SeedError::Io {
        path: path.display().to_string(),
        source,
    })?;
    Ok(serde_json::from_str(&raw)?)
}

/// Insert `count` random races with ids `1..=count`. Returns `count`.
pub async fn seed_races(pool: &DbPool, count: usize) -> Result<usize, sqlx::Error> {
    let rows: Vec<(i64, i64, String, i64, bool, String)> = {
        let mut rng = rand::rng();
        (1..=count)
            .map(|id| {
                let prefix = NAME_PREFIXES.choose(&mut rng).copied().unwrap_or("Maiden");
                let suffix = NAME_SUFFIXES.choose(&mut rng).copied().unwrap_or("Race");
                (
                    id as i64,
                    rng.random_range(1..=MAX_SEEDED_MEETING_ID),
                    format!("{prefix} {suffix}"),
                    rng.random_range(1..=12),
                    rng.random_bool(0.5),
                    random_start_time(&mut rng),
                )
            })
            .collect()
    };

    let mut tx = pool.begin().await?;
    for (id, meeting_id, name, number, visible, start) in &rows {
        sqlx::query(
            "INSERT OR IGNORE INTO races \
             (id, meeting_id, name, number, visible, advertised_start_time) \
             VALUES (?, ?, ?, ?, ?, ?)",
        )
        .bind(id)
        .bind(meeting_id)
        .bind(name)
        .bind(number)
        .bind(visible)
        .bind(start)
        .execute(&mut *tx)
        .await?;
    }
    tx.commit().await?;

    tracing::debug!(count, "Seeded races");
    Ok(count)
}

/// Insert the given events with ids `1..=events.len()`, random visibility and
/// start times. Returns the number of events.
pub async fn seed_events(pool: &DbPool, events: &[SeedEvent]) -> Result<usize, sqlx::Error> {
    let extras: Vec<(bool, String)> = {
        let mut rng = rand::rng();
        events
            .iter()
            .map(|_| (rng.random_bool(0.5), random_start_time(&mut rng)))
            .collect()
    };

    let mut tx = pool.begin().await?;
    for (idx, (event, (visible, start))) in events.iter().zip(&extras).enumerate() {
        sqlx::query(
            "INSERT OR IGNORE INTO events \
             (id, name, category, competition, visible, advertised_start_time) \
             VALUES (?, ?, ?, ?, ?, ?)",
        )
        .bind(idx as i64 + 1)
        .bind(&event.name)
        .bind(&event.category)
        .bind(&event.competition)
        .bind(visible)
        .bind(start)
        .execute(&mut *tx)
        .await?;
    }
    tx.commit().await?;

    tracing::debug!(count = events.len(), "Seeded sports events");
    Ok(events.len())
}

/// A start time between one day ago and two days ahead, as stored text.
fn random_start_time(rng: &mut impl Rng) -> String {
    let offset = Duration::seconds(rng.random_range(-86_400..=172_800));
    (Utc::now() + offset).to_rfc3339_opts(SecondsFormat::Secs, true)
}
