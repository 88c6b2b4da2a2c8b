pub mod actor;
pub mod cinema_hall;
pub mod genre;
pub mod health;
pub mod movie;

use axum::Router;

use crate::state::AppState;

/// Build the resource route tree, mounted at the server root.
///
/// Route hierarchy:
///
/// ```text
/// /genres                 list, create
/// /genres/{id}            get, replace, patch, delete
///
/// /actors                 list, create
/// /actors/{id}            get, replace, patch, delete
///
/// /cinema-halls           list, create
/// /cinema-halls/{id}      get, replace, patch, delete
///
/// /movies                 list, create
/// /movies/{id}            get, replace, patch, delete
/// ```
///
/// Every path also accepts a trailing slash; the server normalizes it
/// away before routing.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/genres", genre::router())
        .nest("/actors", actor::router())
        .nest("/cinema-halls", cinema_hall::router())
        .nest("/movies", movie::router())
}
