//! One repository per catalog entity.
//!
//! Repositories are zero-sized structs whose async methods take the pool
//! as their first argument, so callers decide how connections are shared.

pub mod actor_repo;
pub mod cinema_hall_repo;
pub mod genre_repo;
pub mod movie_repo;

pub use actor_repo::ActorRepo;
pub use cinema_hall_repo::CinemaHallRepo;
pub use genre_repo::GenreRepo;
pub use movie_repo::MovieRepo;
