//! Handlers for the `/genres` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use cinema_core::error::CoreError;
use cinema_core::types::DbId;
use cinema_db::models::genre::{CreateGenre, Genre, UpdateGenre};
use cinema_db::repositories::GenreRepo;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// GET /genres/
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Genre>>> {
    let genres = GenreRepo::list(&state.pool).await?;
    Ok(Json(genres))
}

/// POST /genres/
pub async fn create(
    State(state): State<AppState>,
    Json(payload): Json<serde_json::Value>,
) -> AppResult<(StatusCode, Json<Genre>)> {
    let input = CreateGenre::from_payload(&payload).map_err(CoreError::Validation)?;
    let genre = GenreRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(genre)))
}

/// GET /genres/{id}/
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Genre>> {
    let genre = GenreRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Genre", id }))?;
    Ok(Json(genre))
}

/// PUT /genres/{id}/
pub async fn replace(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(payload): Json<serde_json::Value>,
) -> AppResult<Json<Genre>> {
    ensure_exists(&state, id).await?;
    let input = UpdateGenre::replace_from_payload(&payload).map_err(CoreError::Validation)?;
    update_inner(&state, id, &input).await
}

/// PATCH /genres/{id}/
pub async fn partial_update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(payload): Json<serde_json::Value>,
) -> AppResult<Json<Genre>> {
    ensure_exists(&state, id).await?;
    let input = UpdateGenre::patch_from_payload(&payload).map_err(CoreError::Validation)?;
    update_inner(&state, id, &input).await
}

/// DELETE /genres/{id}/
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    let deleted = GenreRepo::delete(&state.pool, id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound { entity: "Genre", id }))
    }
}

// ---------------------------------------------------------------------------
// Shared helpers
// ---------------------------------------------------------------------------

/// Existence is checked before the payload is validated, so a bad body
/// against a missing id still answers 404.
async fn ensure_exists(state: &AppState, id: DbId) -> AppResult<()> {
    GenreRepo::find_by_id(&state.pool, id)
        .await?
        .map(|_| ())
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Genre", id }))
}

async fn update_inner(state: &AppState, id: DbId, input: &UpdateGenre) -> AppResult<Json<Genre>> {
    let genre = GenreRepo::update(&state.pool, id, input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Genre", id }))?;
    Ok(Json(genre))
}
