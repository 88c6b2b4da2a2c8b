//! Handlers for the `/actors` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use cinema_core::error::CoreError;
use cinema_core::types::DbId;
use cinema_db::models::actor::{Actor, CreateActor, UpdateActor};
use cinema_db::repositories::ActorRepo;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// GET /actors/
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Actor>>> {
    let actors = ActorRepo::list(&state.pool).await?;
    Ok(Json(actors))
}

/// POST /actors/
pub async fn create(
    State(state): State<AppState>,
    Json(payload): Json<serde_json::Value>,
) -> AppResult<(StatusCode, Json<Actor>)> {
    let input = CreateActor::from_payload(&payload).map_err(CoreError::Validation)?;
    let actor = ActorRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(actor)))
}

/// GET /actors/{id}/
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Actor>> {
    let actor = ActorRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Actor", id }))?;
    Ok(Json(actor))
}

/// PUT /actors/{id}/
pub async fn replace(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(payload): Json<serde_json::Value>,
) -> AppResult<Json<Actor>> {
    ensure_exists(&state, id).await?;
    let input = UpdateActor::replace_from_payload(&payload).map_err(CoreError::Validation)?;
    update_inner(&state, id, &input).await
}

/// PATCH /actors/{id}/
pub async fn partial_update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(payload): Json<serde_json::Value>,
) -> AppResult<Json<Actor>> {
    ensure_exists(&state, id).await?;
    let input = UpdateActor::patch_from_payload(&payload).map_err(CoreError::Validation)?;
    update_inner(&state, id, &input).await
}

/// DELETE /actors/{id}/
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    let deleted = ActorRepo::delete(&state.pool, id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound { entity: "Actor", id }))
    }
}

// ---------------------------------------------------------------------------
// Shared helpers
// ---------------------------------------------------------------------------

async fn ensure_exists(state: &AppState, id: DbId) -> AppResult<()> {
    ActorRepo::find_by_id(&state.pool, id)
        .await?
        .map(|_| ())
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Actor", id }))
}

async fn update_inner(state: &AppState, id: DbId, input: &UpdateActor) -> AppResult<Json<Actor>> {
    let actor = ActorRepo::update(&state.pool, id, input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Actor", id }))?;
    Ok(Json(actor))
}
