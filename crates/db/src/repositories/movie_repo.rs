//! Repository for the `movies` table and its junction tables
//! (`movie_genres`, `movie_actors`).
//!
//! Writes touching a relation set run inside a transaction so the movie
//! row and its junction rows stay consistent. Relation replacement is
//! delete-then-insert; the wire arrays are treated as sets, so duplicate
//! ids collapse and read-back order is id ascending.

use cinema_core::types::DbId;
use sqlx::PgPool;

use crate::models::movie::{CreateMovie, Movie, MovieWithRelations, UpdateMovie};

/// Column list for the `movies` table.
const COLUMNS: &str = "id, title, description, duration";

/// Provides CRUD operations for movies and their relation sets.
pub struct MovieRepo;

impl MovieRepo {
    /// Insert a new movie along with its genre/actor links, atomically.
    pub async fn create(
        pool: &PgPool,
        input: &CreateMovie,
    ) -> Result<MovieWithRelations, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let insert_query = format!(
            "INSERT INTO movies (title, description, duration)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        let movie = sqlx::query_as::<_, Movie>(&insert_query)
            .bind(&input.title)
            .bind(&input.description)
            .bind(input.duration)
            .fetch_one(&mut *tx)
            .await?;

        replace_links(&mut tx, "movie_genres", "genre_id", movie.id, &input.genres).await?;
        replace_links(&mut tx, "movie_actors", "actor_id", movie.id, &input.actors).await?;

        tx.commit().await?;

        Self::with_relations(pool, movie).await
    }

    /// Find a movie by id, enriched with its relation id arrays.
    pub async fn find_by_id(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<MovieWithRelations>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM movies WHERE id = $1");
        let movie = sqlx::query_as::<_, Movie>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await?;

        match movie {
            Some(movie) => Ok(Some(Self::with_relations(pool, movie).await?)),
            None => Ok(None),
        }
    }

    /// List all movies with their relations, in the store's natural order
    /// (id ascending).
    pub async fn list(pool: &PgPool) -> Result<Vec<MovieWithRelations>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM movies ORDER BY id");
        let movies = sqlx::query_as::<_, Movie>(&query).fetch_all(pool).await?;

        let mut result = Vec::with_capacity(movies.len());
        for movie in movies {
            result.push(Self::with_relations(pool, movie).await?);
        }
        Ok(result)
    }

    /// Update a movie. Only non-`None` fields in `input` are applied; a
    /// supplied relation array replaces that entire set, an absent one
    /// leaves the set untouched.
    ///
    /// Updating a missing id yields `Ok(None)`, not an error.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateMovie,
    ) -> Result<Option<MovieWithRelations>, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let update_query = format!(
            "UPDATE movies SET
                title = COALESCE($2, title),
                description = COALESCE($3, description),
                duration = COALESCE($4, duration)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        let movie = sqlx::query_as::<_, Movie>(&update_query)
            .bind(id)
            .bind(&input.title)
            .bind(&input.description)
            .bind(input.duration)
            .fetch_optional(&mut *tx)
            .await?;

        let Some(movie) = movie else {
            return Ok(None);
        };

        if let Some(ref genre_ids) = input.genres {
            replace_links(&mut tx, "movie_genres", "genre_id", movie.id, genre_ids).await?;
        }
        if let Some(ref actor_ids) = input.actors {
            replace_links(&mut tx, "movie_actors", "actor_id", movie.id, actor_ids).await?;
        }

        tx.commit().await?;

        Self::with_relations(pool, movie).await.map(Some)
    }

    /// Hard-delete a movie by id. Returns `true` if a row was removed.
    ///
    /// Junction rows cascade with the movie.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM movies WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Load the relation id arrays for a movie row.
    async fn with_relations(pool: &PgPool, movie: Movie) -> Result<MovieWithRelations, sqlx::Error> {
        let genres = load_links(pool, "movie_genres", "genre_id", movie.id).await?;
        let actors = load_links(pool, "movie_actors", "actor_id", movie.id).await?;
        Ok(MovieWithRelations {
            movie,
            genres,
            actors,
        })
    }
}

/// Replace the full relation set in `table` for one movie.
///
/// Runs inside the caller's transaction. `ON CONFLICT DO NOTHING` absorbs
/// duplicate ids in the incoming array.
async fn replace_links(
    tx: &mut sqlx::Transaction<'_, sqlx::Postgres>,
    table: &str,
    id_column: &str,
    movie_id: DbId,
    related_ids: &[DbId],
) -> Result<(), sqlx::Error> {
    sqlx::query(&format!("DELETE FROM {table} WHERE movie_id = $1"))
        .bind(movie_id)
        .execute(&mut **tx)
        .await?;

    for &related_id in related_ids {
        sqlx::query(&format!(
            "INSERT INTO {table} (movie_id, {id_column}) VALUES ($1, $2) ON CONFLICT DO NOTHING"
        ))
        .bind(movie_id)
        .bind(related_id)
        .execute(&mut **tx)
        .await?;
    }

    Ok(())
}

/// Load one relation id array for a movie, ordered ascending.
async fn load_links(
    pool: &PgPool,
    table: &str,
    id_column: &str,
    movie_id: DbId,
) -> Result<Vec<DbId>, sqlx::Error> {
    sqlx::query_scalar(&format!(
        "SELECT {id_column} FROM {table} WHERE movie_id = $1 ORDER BY {id_column}"
    ))
    .bind(movie_id)
    .fetch_all(pool)
    .await
}
