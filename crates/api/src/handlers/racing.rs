//! Handlers for the racing catalog.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::Json;
use racebook_core::types::DbId;
use racebook_db::models::race::ListRacesRequest;
use racebook_db::repositories::RaceRepo;

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

/// POST /api/v1/list-races
///
/// List races, optionally filtered by meeting ids and visibility, in the
/// requested order.
pub async fn list(
    State(state): State<AppState>,
    payload: Result<Json<ListRacesRequest>, JsonRejection>,
) -> AppResult<impl IntoResponse> {
    let Json(request) = payload?;
    let races = RaceRepo::list(&state.pool, &request).await?;

    tracing::debug!(
        count = races.len(),
        meeting_ids = request.meeting_ids.len(),
        visible_only = request.visible_only,
        "Races listed",
    );

    Ok(Json(DataResponse { data: races }))
}

/// GET /api/v1/races/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let race = RaceRepo::find_by_id(&state.pool, id).await?;
    Ok(Json(DataResponse { data: race }))
}
