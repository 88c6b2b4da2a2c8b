//! Repository for the `cinema_halls` table.
//!
//! `rows` is a reserved word in PostgreSQL, so the column is quoted in
//! every query.

use cinema_core::types::DbId;
use sqlx::PgPool;

use crate::models::cinema_hall::{CinemaHall, CreateCinemaHall, UpdateCinemaHall};

/// Column list for the `cinema_halls` table.
const COLUMNS: &str = "id, name, \"rows\", seats_in_row";

/// Provides CRUD operations for cinema halls.
pub struct CinemaHallRepo;

impl CinemaHallRepo {
    /// Insert a new cinema hall, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateCinemaHall) -> Result<CinemaHall, sqlx::Error> {
        let query = format!(
            "INSERT INTO cinema_halls (name, \"rows\", seats_in_row)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, CinemaHall>(&query)
            .bind(&input.name)
            .bind(input.rows)
            .bind(input.seats_in_row)
            .fetch_one(pool)
            .await
    }

    /// Find a cinema hall by its id.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<CinemaHall>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM cinema_halls WHERE id = $1");
        sqlx::query_as::<_, CinemaHall>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all cinema halls in the store's natural order (id ascending).
    pub async fn list(pool: &PgPool) -> Result<Vec<CinemaHall>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM cinema_halls ORDER BY id");
        sqlx::query_as::<_, CinemaHall>(&query).fetch_all(pool).await
    }

    /// Update a cinema hall. Only non-`None` fields in `input` are applied.
    ///
    /// Updating a missing id yields `Ok(None)`, not an error.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateCinemaHall,
    ) -> Result<Option<CinemaHall>, sqlx::Error> {
        let query = format!(
            "UPDATE cinema_halls SET
                name = COALESCE($2, name),
                \"rows\" = COALESCE($3, \"rows\"),
                seats_in_row = COALESCE($4, seats_in_row)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, CinemaHall>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(input.rows)
            .bind(input.seats_in_row)
            .fetch_optional(pool)
            .await
    }

    /// Hard-delete a cinema hall by id. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM cinema_halls WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
