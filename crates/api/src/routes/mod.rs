pub mod health;
pub mod racing;
pub mod sports;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /list-races                list races (POST, JSON body)
/// /races/{id}                get race
///
/// /list-events               list sports events (POST, JSON body)
/// /events/{id}               get sports event
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(racing::router())
        .merge(sports::router())
}
