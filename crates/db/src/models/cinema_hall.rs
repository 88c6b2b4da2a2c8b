//! Cinema hall entity model and payload schema.

use cinema_core::types::DbId;
use cinema_core::validate::{self, FieldErrors};
use serde::Serialize;
use serde_json::Value;
use sqlx::FromRow;

const NAME_MAX_LEN: usize = 255;

/// A row from the `cinema_halls` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct CinemaHall {
    pub id: DbId,
    pub name: String,
    pub rows: i32,
    pub seats_in_row: i32,
}

/// Validated record for inserting a new cinema hall.
#[derive(Debug, Clone)]
pub struct CreateCinemaHall {
    pub name: String,
    pub rows: i32,
    pub seats_in_row: i32,
}

/// Validated record for updating a cinema hall. `None` fields keep
/// their stored value.
#[derive(Debug, Clone, Default)]
pub struct UpdateCinemaHall {
    pub name: Option<String>,
    pub rows: Option<i32>,
    pub seats_in_row: Option<i32>,
}

impl CreateCinemaHall {
    pub fn from_payload(payload: &Value) -> Result<Self, FieldErrors> {
        let payload = validate::require_object(payload)?;
        let mut errors = FieldErrors::new();

        let name = validate::required_string(payload, "name", NAME_MAX_LEN, &mut errors);
        let rows = validate::required_int(payload, "rows", 1, &mut errors);
        let seats_in_row = validate::required_int(payload, "seats_in_row", 1, &mut errors);

        match (name, rows, seats_in_row) {
            (Some(name), Some(rows), Some(seats_in_row)) => Ok(Self {
                name,
                rows: rows as i32,
                seats_in_row: seats_in_row as i32,
            }),
            _ => Err(errors),
        }
    }
}

impl UpdateCinemaHall {
    pub fn replace_from_payload(payload: &Value) -> Result<Self, FieldErrors> {
        CreateCinemaHall::from_payload(payload).map(Self::from)
    }

    pub fn patch_from_payload(payload: &Value) -> Result<Self, FieldErrors> {
        let payload = validate::require_object(payload)?;
        let mut errors = FieldErrors::new();

        let name = validate::optional_string(payload, "name", NAME_MAX_LEN, &mut errors);
        let rows = validate::optional_int(payload, "rows", 1, &mut errors);
        let seats_in_row = validate::optional_int(payload, "seats_in_row", 1, &mut errors);

        errors.into_result(Self {
            name,
            rows: rows.map(|n| n as i32),
            seats_in_row: seats_in_row.map(|n| n as i32),
        })
    }
}

impl From<CreateCinemaHall> for UpdateCinemaHall {
    fn from(input: CreateCinemaHall) -> Self {
        Self {
            name: Some(input.name),
            rows: Some(input.rows),
            seats_in_row: Some(input.seats_in_row),
        }
    }
}
