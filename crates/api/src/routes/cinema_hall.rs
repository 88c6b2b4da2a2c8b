//! Route definitions for the `/cinema-halls` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::cinema_hall;
use crate::state::AppState;

/// Routes mounted at `/cinema-halls`.
///
/// ```text
/// GET    /        -> list
/// POST   /        -> create
/// GET    /{id}    -> get_by_id
/// PUT    /{id}    -> replace
/// PATCH  /{id}    -> partial_update
/// DELETE /{id}    -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(cinema_hall::list).post(cinema_hall::create))
        .route(
            "/{id}",
            get(cinema_hall::get_by_id)
                .put(cinema_hall::replace)
                .patch(cinema_hall::partial_update)
                .delete(cinema_hall::delete),
        )
}
