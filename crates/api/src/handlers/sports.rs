//! Handlers for the sports events catalog.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::Json;
use racebook_core::types::DbId;
use racebook_db::models::event::ListEventsRequest;
use racebook_db::repositories::EventRepo;

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

/// POST /api/v1/list-events
///
/// List sports events, optionally filtered by category and visibility.
pub async fn list(
    State(state): State<AppState>,
    payload: Result<Json<ListEventsRequest>, JsonRejection>,
) -> AppResult<impl IntoResponse> {
    let Json(request) = payload?;
    let events = EventRepo::list(&state.pool, &request).await?;

    tracing::debug!(
        count = events.len(),
        categories = request.categories.len(),
        visible_only = request.visible_only,
        "Sports events listed",
    );

    Ok(Json(DataResponse { data: events }))
}

/// GET /api/v1/events/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let event = EventRepo::find_by_id(&state.pool, id).await?;
    Ok(Json(DataResponse { data: event }))
}
