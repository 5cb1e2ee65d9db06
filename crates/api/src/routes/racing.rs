//! Route definitions for the racing catalog.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::racing;
use crate::state::AppState;

/// ```text
/// POST /list-races   -> list
/// GET  /races/{id}   -> get_by_id
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/list-races", post(racing::list))
        .route("/races/{id}", get(racing::get_by_id))
}
