//! Genre entity model and payload schema.

use cinema_core::types::DbId;
use cinema_core::validate::{self, FieldErrors};
use serde::Serialize;
use serde_json::Value;
use sqlx::FromRow;

const NAME_MAX_LEN: usize = 255;

/// A row from the `genres` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Genre {
    pub id: DbId,
    pub name: String,
}

/// Validated record for inserting a new genre.
#[derive(Debug, Clone)]
pub struct CreateGenre {
    pub name: String,
}

/// Validated record for updating a genre. `None` fields keep their
/// stored value.
#[derive(Debug, Clone, Default)]
pub struct UpdateGenre {
    pub name: Option<String>,
}

impl CreateGenre {
    /// Validate a wire payload into a create record, collecting every
    /// constraint violation into one map.
    pub fn from_payload(payload: &Value) -> Result<Self, FieldErrors> {
        let payload = validate::require_object(payload)?;
        let mut errors = FieldErrors::new();

        let name = validate::required_string(payload, "name", NAME_MAX_LEN, &mut errors);

        match name {
            Some(name) => Ok(Self { name }),
            None => Err(errors),
        }
    }
}

impl UpdateGenre {
    /// Validate a full-replacement payload: every field must be present.
    pub fn replace_from_payload(payload: &Value) -> Result<Self, FieldErrors> {
        CreateGenre::from_payload(payload).map(Self::from)
    }

    /// Validate a partial payload: only supplied fields are checked.
    pub fn patch_from_payload(payload: &Value) -> Result<Self, FieldErrors> {
        let payload = validate::require_object(payload)?;
        let mut errors = FieldErrors::new();

        let name = validate::optional_string(payload, "name", NAME_MAX_LEN, &mut errors);

        errors.into_result(Self { name })
    }
}

impl From<CreateGenre> for UpdateGenre {
    fn from(input: CreateGenre) -> Self {
        Self {
            name: Some(input.name),
        }
    }
}
