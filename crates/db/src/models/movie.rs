//! Movie entity model and payload schema.
//!
//! Movies relate to genres and actors through junction tables; on the
//! wire both relations appear as arrays of ids. A replace payload must
//! supply both arrays; a patch payload replaces a relation set only when
//! its key is present.

use cinema_core::types::DbId;
use cinema_core::validate::{self, FieldErrors};
use serde::Serialize;
use serde_json::Value;
use sqlx::FromRow;

const TITLE_MAX_LEN: usize = 255;

/// A row from the `movies` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Movie {
    pub id: DbId,
    pub title: String,
    pub description: String,
    pub duration: i32,
}

/// A movie enriched with its relation id arrays, as served on the wire.
#[derive(Debug, Clone, Serialize)]
pub struct MovieWithRelations {
    #[serde(flatten)]
    pub movie: Movie,
    pub genres: Vec<DbId>,
    pub actors: Vec<DbId>,
}

/// Validated record for inserting a new movie.
#[derive(Debug, Clone)]
pub struct CreateMovie {
    pub title: String,
    pub description: String,
    pub duration: i32,
    pub genres: Vec<DbId>,
    pub actors: Vec<DbId>,
}

/// Validated record for updating a movie. `None` fields (including the
/// relation arrays) keep their stored value.
#[derive(Debug, Clone, Default)]
pub struct UpdateMovie {
    pub title: Option<String>,
    pub description: Option<String>,
    pub duration: Option<i32>,
    pub genres: Option<Vec<DbId>>,
    pub actors: Option<Vec<DbId>>,
}

impl CreateMovie {
    pub fn from_payload(payload: &Value) -> Result<Self, FieldErrors> {
        let payload = validate::require_object(payload)?;
        let mut errors = FieldErrors::new();

        let title = validate::required_string(payload, "title", TITLE_MAX_LEN, &mut errors);
        // Description is unbounded prose; max length 0 disables the cap.
        let description = validate::required_string(payload, "description", 0, &mut errors);
        let duration = validate::required_int(payload, "duration", 1, &mut errors);
        let genres = validate::required_id_list(payload, "genres", &mut errors);
        let actors = validate::required_id_list(payload, "actors", &mut errors);

        match (title, description, duration, genres, actors) {
            (Some(title), Some(description), Some(duration), Some(genres), Some(actors)) => {
                Ok(Self {
                    title,
                    description,
                    duration: duration as i32,
                    genres,
                    actors,
                })
            }
            _ => Err(errors),
        }
    }
}

impl UpdateMovie {
    pub fn replace_from_payload(payload: &Value) -> Result<Self, FieldErrors> {
        CreateMovie::from_payload(payload).map(Self::from)
    }

    pub fn patch_from_payload(payload: &Value) -> Result<Self, FieldErrors> {
        let payload = validate::require_object(payload)?;
        let mut errors = FieldErrors::new();

        let title = validate::optional_string(payload, "title", TITLE_MAX_LEN, &mut errors);
        let description = validate::optional_string(payload, "description", 0, &mut errors);
        let duration = validate::optional_int(payload, "duration", 1, &mut errors);
        let genres = validate::optional_id_list(payload, "genres", &mut errors);
        let actors = validate::optional_id_list(payload, "actors", &mut errors);

        errors.into_result(Self {
            title,
            description,
            duration: duration.map(|n| n as i32),
            genres,
            actors,
        })
    }
}

impl From<CreateMovie> for UpdateMovie {
    fn from(input: CreateMovie) -> Self {
        Self {
            title: Some(input.title),
            description: Some(input.description),
            duration: Some(input.duration),
            genres: Some(input.genres),
            actors: Some(input.actors),
        }
    }
}
