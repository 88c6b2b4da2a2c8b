//! Domain primitives shared across the cinema catalog workspace.
//!
//! Holds the id type alias, the domain error enum, and the pure payload
//! validation toolkit. Nothing in this crate touches the database or the
//! HTTP layer.

pub mod error;
pub mod types;
pub mod validate;
