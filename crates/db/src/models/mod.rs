//! Entity models and payload schemas.
//!
//! Per entity there is a row struct (`FromRow` plus `Serialize`, the wire
//! shape), a validated create record, and an all-`Option` update record
//! with full (replace) and partial (patch) payload constructors.

pub mod actor;
pub mod cinema_hall;
pub mod genre;
pub mod movie;
