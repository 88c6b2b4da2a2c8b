//! Conventions the migration files must follow, checked against the live
//! information schema rather than by parsing the SQL.

use sqlx::PgPool;

/// Every `id` column is bigint; the catalog uses BIGSERIAL keys throughout.
#[sqlx::test(migrations = "./migrations")]
async fn test_all_pks_are_bigint(pool: PgPool) {
    let id_columns: Vec<(String, String)> = sqlx::query_as(
        "SELECT table_name, data_type
         FROM information_schema.columns
         WHERE column_name = 'id'
           AND table_schema = 'public'
           AND table_name != '_sqlx_migrations'
         ORDER BY table_name",
    )
    .fetch_all(&pool)
    .await
    .unwrap();

    assert!(!id_columns.is_empty(), "Expected id columns in the schema");

    for (table, data_type) in &id_columns {
        assert_eq!(
            data_type, "bigint",
            "Table {table}.id should be bigint, got {data_type}"
        );
    }
}

/// String columns are TEXT; VARCHAR must not appear.
#[sqlx::test(migrations = "./migrations")]
async fn test_no_varchar_columns(pool: PgPool) {
    let varchars: Vec<(String, String)> = sqlx::query_as(
        "SELECT table_name, column_name
         FROM information_schema.columns
         WHERE table_schema = 'public'
           AND data_type = 'character varying'
           AND table_name != '_sqlx_migrations'
         ORDER BY table_name, column_name",
    )
    .fetch_all(&pool)
    .await
    .unwrap();

    assert!(varchars.is_empty(), "Found VARCHAR columns: {varchars:?}");
}

/// Every foreign key column has a supporting index. An index whose leading
/// column is the FK column counts, so the join tables' composite primary
/// keys cover their first column.
#[sqlx::test(migrations = "./migrations")]
async fn test_all_fks_have_indexes(pool: PgPool) {
    let fk_columns: Vec<(String, String)> = sqlx::query_as(
        "SELECT DISTINCT tc.table_name, kcu.column_name
         FROM information_schema.table_constraints tc
         JOIN information_schema.key_column_usage kcu
             ON tc.constraint_name = kcu.constraint_name
             AND tc.table_schema = kcu.table_schema
         WHERE tc.constraint_type = 'FOREIGN KEY'
           AND tc.table_schema = 'public'
         ORDER BY tc.table_name, kcu.column_name",
    )
    .fetch_all(&pool)
    .await
    .unwrap();

    assert!(!fk_columns.is_empty(), "Expected FK columns in the schema");

    for (table, column) in &fk_columns {
        let covered: bool = sqlx::query_scalar(&format!(
            "SELECT EXISTS (
                SELECT 1
                FROM pg_indexes
                WHERE schemaname = 'public'
                  AND tablename = '{table}'
                  AND (indexdef LIKE '%({column})%' OR indexdef LIKE '%({column},%')
            )"
        ))
        .fetch_one(&pool)
        .await
        .unwrap();

        assert!(covered, "FK column {table}.{column} has no index");
    }
}

/// Every foreign key cascades on delete. Removing a genre, actor or movie
/// has to clean up its join rows rather than block the delete.
#[sqlx::test(migrations = "./migrations")]
async fn test_all_fks_cascade_on_delete(pool: PgPool) {
    let constraints: Vec<(String, String, String)> = sqlx::query_as(
        "SELECT rc.constraint_name, tc.table_name, rc.delete_rule
         FROM information_schema.referential_constraints rc
         JOIN information_schema.table_constraints tc
             ON rc.constraint_name = tc.constraint_name
             AND rc.constraint_schema = tc.table_schema
         WHERE rc.constraint_schema = 'public'
         ORDER BY tc.table_name, rc.constraint_name",
    )
    .fetch_all(&pool)
    .await
    .unwrap();

    assert!(
        !constraints.is_empty(),
        "Expected at least one FK constraint in the schema"
    );

    for (constraint, table, delete_rule) in &constraints {
        assert_eq!(
            delete_rule, "CASCADE",
            "FK {constraint} on {table} should be ON DELETE CASCADE, got {delete_rule}"
        );
    }
}

/// The join tables carry a two-column composite primary key, which both
/// deduplicates relation pairs and backs the leading-column FK index.
#[sqlx::test(migrations = "./migrations")]
async fn test_join_tables_have_composite_pks(pool: PgPool) {
    for table in ["movie_genres", "movie_actors"] {
        let pk_columns: Vec<String> = sqlx::query_scalar(&format!(
            "SELECT kcu.column_name
             FROM information_schema.table_constraints tc
             JOIN information_schema.key_column_usage kcu
                 ON tc.constraint_name = kcu.constraint_name
                 AND tc.table_schema = kcu.table_schema
             WHERE tc.constraint_type = 'PRIMARY KEY'
               AND tc.table_schema = 'public'
               AND tc.table_name = '{table}'
             ORDER BY kcu.ordinal_position"
        ))
        .fetch_all(&pool)
        .await
        .unwrap();

        assert_eq!(
            pk_columns.len(),
            2,
            "Join table {table} should have a two-column primary key, got {pk_columns:?}"
        );
        assert_eq!(pk_columns[0], "movie_id");
    }
}
