//! Liveness and catalog readiness, mounted at the root rather than `/api/v1`.

use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use racebook_db::CatalogReadiness;
use serde::Serialize;

use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// `ok` when every catalog can be served, `degraded` otherwise.
    pub status: &'static str,
    pub version: &'static str,
    pub db_healthy: bool,
    pub catalogs: CatalogReadiness,
}

impl HealthResponse {
    fn from_readiness(readiness: Option<CatalogReadiness>) -> Self {
        let catalogs = readiness.unwrap_or_default();
        Self {
            status: if catalogs.all_ready() { "ok" } else { "degraded" },
            version: env!("CARGO_PKG_VERSION"),
            db_healthy: readiness.is_some(),
            catalogs,
        }
    }
}

/// GET /health
///
/// Always answers 200; the body says which catalogs are servable.
async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    let readiness = match racebook_db::catalog_readiness(&state.pool).await {
        Ok(readiness) => Some(readiness),
        Err(err) => {
            tracing::warn!(error = %err, "Catalog readiness check failed");
            None
        }
    };

    Json(HealthResponse::from_readiness(readiness))
}

pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unreachable_database_marks_every_catalog_down() {
        let response = HealthResponse::from_readiness(None);
        assert_eq!(response.status, "degraded");
        assert!(!response.db_healthy);
        assert_eq!(response.catalogs, CatalogReadiness::default());
    }

    #[test]
    fn one_missing_catalog_degrades_status() {
        let response = HealthResponse::from_readiness(Some(CatalogReadiness {
            races: true,
            events: false,
        }));
        assert_eq!(response.status, "degraded");
        assert!(response.db_healthy);
    }
}
