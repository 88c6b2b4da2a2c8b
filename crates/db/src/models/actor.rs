//! Actor entity model and payload schema.

use cinema_core::types::DbId;
use cinema_core::validate::{self, FieldErrors};
use serde::Serialize;
use serde_json::Value;
use sqlx::FromRow;

const NAME_MAX_LEN: usize = 255;

/// A row from the `actors` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Actor {
    pub id: DbId,
    pub first_name: String,
    pub last_name: String,
}

/// Validated record for inserting a new actor.
#[derive(Debug, Clone)]
pub struct CreateActor {
    pub first_name: String,
    pub last_name: String,
}

/// Validated record for updating an actor. `None` fields keep their
/// stored value.
#[derive(Debug, Clone, Default)]
pub struct UpdateActor {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

impl CreateActor {
    pub fn from_payload(payload: &Value) -> Result<Self, FieldErrors> {
        let payload = validate::require_object(payload)?;
        let mut errors = FieldErrors::new();

        let first_name =
            validate::required_string(payload, "first_name", NAME_MAX_LEN, &mut errors);
        let last_name = validate::required_string(payload, "last_name", NAME_MAX_LEN, &mut errors);

        match (first_name, last_name) {
            (Some(first_name), Some(last_name)) => Ok(Self {
                first_name,
                last_name,
            }),
            _ => Err(errors),
        }
    }
}

impl UpdateActor {
    pub fn replace_from_payload(payload: &Value) -> Result<Self, FieldErrors> {
        CreateActor::from_payload(payload).map(Self::from)
    }

    pub fn patch_from_payload(payload: &Value) -> Result<Self, FieldErrors> {
        let payload = validate::require_object(payload)?;
        let mut errors = FieldErrors::new();

        let first_name =
            validate::optional_string(payload, "first_name", NAME_MAX_LEN, &mut errors);
        let last_name = validate::optional_string(payload, "last_name", NAME_MAX_LEN, &mut errors);

        errors.into_result(Self {
            first_name,
            last_name,
        })
    }
}

impl From<CreateActor> for UpdateActor {
    fn from(input: CreateActor) -> Self {
        Self {
            first_name: Some(input.first_name),
            last_name: Some(input.last_name),
        }
    }
}
