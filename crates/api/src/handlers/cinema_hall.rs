//! Handlers for the `/cinema-halls` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use cinema_core::error::CoreError;
use cinema_core::types::DbId;
use cinema_db::models::cinema_hall::{CinemaHall, CreateCinemaHall, UpdateCinemaHall};
use cinema_db::repositories::CinemaHallRepo;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// GET /cinema-halls/
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<CinemaHall>>> {
    let halls = CinemaHallRepo::list(&state.pool).await?;
    Ok(Json(halls))
}

/// POST /cinema-halls/
pub async fn create(
    State(state): State<AppState>,
    Json(payload): Json<serde_json::Value>,
) -> AppResult<(StatusCode, Json<CinemaHall>)> {
    let input = CreateCinemaHall::from_payload(&payload).map_err(CoreError::Validation)?;
    let hall = CinemaHallRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(hall)))
}

/// GET /cinema-halls/{id}/
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<CinemaHall>> {
    let hall = CinemaHallRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "CinemaHall",
            id,
        }))?;
    Ok(Json(hall))
}

/// PUT /cinema-halls/{id}/
pub async fn replace(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(payload): Json<serde_json::Value>,
) -> AppResult<Json<CinemaHall>> {
    ensure_exists(&state, id).await?;
    let input = UpdateCinemaHall::replace_from_payload(&payload).map_err(CoreError::Validation)?;
    update_inner(&state, id, &input).await
}

/// PATCH /cinema-halls/{id}/
pub async fn partial_update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(payload): Json<serde_json::Value>,
) -> AppResult<Json<CinemaHall>> {
    ensure_exists(&state, id).await?;
    let input = UpdateCinemaHall::patch_from_payload(&payload).map_err(CoreError::Validation)?;
    update_inner(&state, id, &input).await
}

/// DELETE /cinema-halls/{id}/
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    let deleted = CinemaHallRepo::delete(&state.pool, id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "CinemaHall",
            id,
        }))
    }
}

// ---------------------------------------------------------------------------
// Shared helpers
// ---------------------------------------------------------------------------

async fn ensure_exists(state: &AppState, id: DbId) -> AppResult<()> {
    CinemaHallRepo::find_by_id(&state.pool, id)
        .await?
        .map(|_| ())
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "CinemaHall",
            id,
        }))
}

async fn update_inner(
    state: &AppState,
    id: DbId,
    input: &UpdateCinemaHall,
) -> AppResult<Json<CinemaHall>> {
    let hall = CinemaHallRepo::update(&state.pool, id, input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "CinemaHall",
            id,
        }))?;
    Ok(Json(hall))
}
