//! Route definitions for the sports events catalog.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::sports;
use crate::state::AppState;

/// ```text
/// POST /list-events   -> list
/// GET  /events/{id}   -> get_by_id
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/list-events", post(sports::list))
        .route("/events/{id}", get(sports::get_by_id))
}
