//! Request handlers for the catalog resources.
//!
//! Each submodule provides async handler functions (list, create, get_by_id,
//! replace, partial_update, delete) for a single resource. Handlers delegate
//! to the corresponding repository in `cinema_db` and map errors via
//! [`AppError`](crate::error::AppError).

pub mod actor;
pub mod cinema_hall;
pub mod genre;
pub mod movie;
