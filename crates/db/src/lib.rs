//! Storage layer for the racing and sports catalogs.
//!
//! Owns the SQLite pool, migrations, entity models, the generic catalog
//! query engine and seed data.

use std::str::FromStr;
use std::time::Duration;

use serde::Serialize;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};

use crate::repositories::{CatalogResource, Events, Races};

pub mod models;
pub mod query;
pub mod repositories;
pub mod seed;

pub type DbPool = sqlx::SqlitePool;

/// Create a connection pool from a database URL.
///
/// The database file is created when missing.
pub async fn create_pool(
    database_url: &str,
    max_connections: u32,
    acquire_timeout: Duration,
) -> Result<DbPool, sqlx::Error> {
    let options = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);

    SqlitePoolOptions::new()
        .max_connections(max_connections)
        .acquire_timeout(acquire_timeout)
        .connect_with(options)
        .await
}

/// Round-trip a trivial statement to confirm the database is reachable.
pub async fn health_check(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}

/// Presence of each catalog table in the connected database.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CatalogReadiness {
    pub races: bool,
    pub events: bool,
}

impl CatalogReadiness {
    pub fn all_ready(&self) -> bool {
        self.races && self.events
    }
}

/// Report which catalog tables exist. Fails only when the database itself
/// cannot be queried.
pub async fn catalog_readiness(pool: &DbPool) -> Result<CatalogReadiness, sqlx::Error> {
    let tables: Vec<String> =
        sqlx::query_scalar("SELECT name FROM sqlite_master WHERE type = 'table' AND name IN (?, ?)")
            .bind(Races::TABLE)
            .bind(Events::TABLE)
            .fetch_all(pool)
            .await?;

    let present = |table: &str| tables.iter().any(|name| name == table);

    Ok(CatalogReadiness {
        races: present(Races::TABLE),
        events: present(Events::TABLE),
    })
}

/// Apply all pending migrations from `db/migrations`.
pub async fn run_migrations(pool: &DbPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("../../db/migrations").run(pool).await
}
