//! Handlers for the `/movies` resource.
//!
//! Movies reference genres and actors by id. Before any write, every
//! referenced id is checked against the store; unknown ids come back in
//! the same field-error shape the payload validators produce.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use cinema_core::error::CoreError;
use cinema_core::types::DbId;
use cinema_core::validate::{unknown_pk_message, FieldErrors};
use cinema_db::models::movie::{CreateMovie, MovieWithRelations, UpdateMovie};
use cinema_db::repositories::{ActorRepo, GenreRepo, MovieRepo};

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// GET /movies/
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<MovieWithRelations>>> {
    let movies = MovieRepo::list(&state.pool).await?;
    Ok(Json(movies))
}

/// POST /movies/
pub async fn create(
    State(state): State<AppState>,
    Json(payload): Json<serde_json::Value>,
) -> AppResult<(StatusCode, Json<MovieWithRelations>)> {
    let input = CreateMovie::from_payload(&payload).map_err(CoreError::Validation)?;
    verify_relations(&state, &input.genres, &input.actors).await?;
    let movie = MovieRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(movie)))
}

/// GET /movies/{id}/
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<MovieWithRelations>> {
    let movie = MovieRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Movie", id }))?;
    Ok(Json(movie))
}

/// PUT /movies/{id}/
pub async fn replace(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(payload): Json<serde_json::Value>,
) -> AppResult<Json<MovieWithRelations>> {
    ensure_exists(&state, id).await?;
    let input = UpdateMovie::replace_from_payload(&payload).map_err(CoreError::Validation)?;
    verify_relations(
        &state,
        input.genres.as_deref().unwrap_or_default(),
        input.actors.as_deref().unwrap_or_default(),
    )
    .await?;
    update_inner(&state, id, &input).await
}

/// PATCH /movies/{id}/
pub async fn partial_update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(payload): Json<serde_json::Value>,
) -> AppResult<Json<MovieWithRelations>> {
    ensure_exists(&state, id).await?;
    let input = UpdateMovie::patch_from_payload(&payload).map_err(CoreError::Validation)?;
    verify_relations(
        &state,
        input.genres.as_deref().unwrap_or_default(),
        input.actors.as_deref().unwrap_or_default(),
    )
    .await?;
    update_inner(&state, id, &input).await
}

/// DELETE /movies/{id}/
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    let deleted = MovieRepo::delete(&state.pool, id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound { entity: "Movie", id }))
    }
}

// ---------------------------------------------------------------------------
// Shared helpers
// ---------------------------------------------------------------------------

async fn ensure_exists(state: &AppState, id: DbId) -> AppResult<()> {
    MovieRepo::find_by_id(&state.pool, id)
        .await?
        .map(|_| ())
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Movie", id }))
}

async fn update_inner(
    state: &AppState,
    id: DbId,
    input: &UpdateMovie,
) -> AppResult<Json<MovieWithRelations>> {
    let movie = MovieRepo::update(&state.pool, id, input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Movie", id }))?;
    Ok(Json(movie))
}

/// Check that every referenced genre and actor id resolves to a stored row.
///
/// Reports the first unknown id per field; both fields are checked so one
/// response can name both.
async fn verify_relations(state: &AppState, genres: &[DbId], actors: &[DbId]) -> AppResult<()> {
    let mut errors = FieldErrors::new();

    let known = GenreRepo::filter_existing(&state.pool, genres).await?;
    if let Some(missing) = genres.iter().find(|id| !known.contains(id)) {
        errors.push("genres", unknown_pk_message(*missing));
    }

    let known = ActorRepo::filter_existing(&state.pool, actors).await?;
    if let Some(missing) = actors.iter().find(|id| !known.contains(id)) {
        errors.push("actors", unknown_pk_message(*missing));
    }

    errors
        .into_result(())
        .map_err(|errors| AppError::Core(CoreError::Validation(errors)))
}
