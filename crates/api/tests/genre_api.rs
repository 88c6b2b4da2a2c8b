//! HTTP-level integration tests for the `/genres` resource.
//!
//! Requests go through the full middleware stack via `oneshot`; no TCP
//! listener is involved.

mod common;

use axum::http::StatusCode;
use common::{body_json, build_test_app, delete, get, patch_json, post_json, put_json};
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Create
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn create_genre_returns_201(pool: PgPool) {
    let app = build_test_app(pool);
    let response = post_json(app, "/genres/", serde_json::json!({"name": "Comedy"})).await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["name"], "Comedy");
    assert!(json["id"].is_number());
}

#[sqlx::test(migrations = "../db/migrations")]
async fn create_genre_without_name_returns_field_errors(pool: PgPool) {
    let app = build_test_app(pool);
    let response = post_json(app, "/genres/", serde_json::json!({})).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    // The body is the bare field-error map, no envelope around it.
    let json = body_json(response).await;
    assert_eq!(json, serde_json::json!({"name": ["This field is required."]}));
}

#[sqlx::test(migrations = "../db/migrations")]
async fn create_genre_with_blank_name_returns_400(pool: PgPool) {
    let app = build_test_app(pool);
    let response = post_json(app, "/genres/", serde_json::json!({"name": "   "})).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["name"], serde_json::json!(["This field may not be blank."]));
}

#[sqlx::test(migrations = "../db/migrations")]
async fn create_genre_with_null_name_returns_400(pool: PgPool) {
    let app = build_test_app(pool);
    let response = post_json(app, "/genres/", serde_json::json!({"name": null})).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["name"], serde_json::json!(["This field may not be null."]));
}

#[sqlx::test(migrations = "../db/migrations")]
async fn create_genre_with_overlong_name_returns_400(pool: PgPool) {
    let app = build_test_app(pool);
    let response = post_json(
        app,
        "/genres/",
        serde_json::json!({"name": "x".repeat(256)}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(
        json["name"],
        serde_json::json!(["Ensure this field has no more than 255 characters."])
    );
}

#[sqlx::test(migrations = "../db/migrations")]
async fn create_genre_with_non_object_body_returns_400(pool: PgPool) {
    let app = build_test_app(pool);
    let response = post_json(app, "/genres/", serde_json::json!([1, 2, 3])).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(
        json,
        serde_json::json!({
            "non_field_errors": ["Invalid data. Expected a dictionary, but got list."]
        })
    );
}

// ---------------------------------------------------------------------------
// List / retrieve
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn list_genres_returns_all_in_id_order(pool: PgPool) {
    let app = build_test_app(pool.clone());
    post_json(app, "/genres/", serde_json::json!({"name": "Drama"})).await;
    let app = build_test_app(pool.clone());
    post_json(app, "/genres/", serde_json::json!({"name": "Comedy"})).await;

    let app = build_test_app(pool);
    let response = get(app, "/genres/").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let arr = json.as_array().unwrap();
    assert_eq!(arr.len(), 2);
    assert_eq!(arr[0]["name"], "Drama");
    assert_eq!(arr[1]["name"], "Comedy");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn list_genres_empty_store_returns_empty_array(pool: PgPool) {
    let app = build_test_app(pool);
    let response = get(app, "/genres/").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json, serde_json::json!([]));
}

#[sqlx::test(migrations = "../db/migrations")]
async fn get_genre_by_id(pool: PgPool) {
    let app = build_test_app(pool.clone());
    let created = body_json(
        post_json(app, "/genres/", serde_json::json!({"name": "Comedy"})).await,
    )
    .await;
    let id = created["id"].as_i64().unwrap();

    let app = build_test_app(pool);
    let response = get(app, &format!("/genres/{id}/")).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["id"], id);
    assert_eq!(json["name"], "Comedy");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn get_nonexistent_genre_returns_404(pool: PgPool) {
    let app = build_test_app(pool);
    let response = get(app, "/genres/999999/").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// Both the trailing-slash and bare forms of a path hit the same route.
#[sqlx::test(migrations = "../db/migrations")]
async fn paths_work_with_and_without_trailing_slash(pool: PgPool) {
    let app = build_test_app(pool.clone());
    let created = body_json(
        post_json(app, "/genres", serde_json::json!({"name": "Comedy"})).await,
    )
    .await;
    let id = created["id"].as_i64().unwrap();

    let app = build_test_app(pool.clone());
    let bare = get(app, &format!("/genres/{id}")).await;
    assert_eq!(bare.status(), StatusCode::OK);

    let app = build_test_app(pool);
    let slashed = get(app, &format!("/genres/{id}/")).await;
    assert_eq!(slashed.status(), StatusCode::OK);
}

// ---------------------------------------------------------------------------
// Replace / partial update
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn put_genre_replaces_the_record(pool: PgPool) {
    let app = build_test_app(pool.clone());
    let created = body_json(
        post_json(app, "/genres/", serde_json::json!({"name": "Drma"})).await,
    )
    .await;
    let id = created["id"].as_i64().unwrap();

    let app = build_test_app(pool);
    let response = put_json(
        app,
        &format!("/genres/{id}/"),
        serde_json::json!({"name": "Drama"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["id"], id);
    assert_eq!(json["name"], "Drama");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn put_genre_requires_name(pool: PgPool) {
    let app = build_test_app(pool.clone());
    let created = body_json(
        post_json(app, "/genres/", serde_json::json!({"name": "Drama"})).await,
    )
    .await;
    let id = created["id"].as_i64().unwrap();

    let app = build_test_app(pool);
    let response = put_json(app, &format!("/genres/{id}/"), serde_json::json!({})).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    assert_eq!(json, serde_json::json!({"name": ["This field is required."]}));
}

#[sqlx::test(migrations = "../db/migrations")]
async fn put_nonexistent_genre_returns_404_even_with_bad_body(pool: PgPool) {
    // Existence wins over validation: the 404 answers before the payload
    // is inspected.
    let app = build_test_app(pool);
    let response = put_json(app, "/genres/999999/", serde_json::json!({})).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn patch_genre_updates_supplied_fields(pool: PgPool) {
    let app = build_test_app(pool.clone());
    let created = body_json(
        post_json(app, "/genres/", serde_json::json!({"name": "Drma"})).await,
    )
    .await;
    let id = created["id"].as_i64().unwrap();

    let app = build_test_app(pool);
    let response = patch_json(
        app,
        &format!("/genres/{id}/"),
        serde_json::json!({"name": "Drama"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["name"], "Drama");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn patch_genre_with_empty_body_changes_nothing(pool: PgPool) {
    let app = build_test_app(pool.clone());
    let created = body_json(
        post_json(app, "/genres/", serde_json::json!({"name": "Comedy"})).await,
    )
    .await;
    let id = created["id"].as_i64().unwrap();

    let app = build_test_app(pool);
    let response = patch_json(app, &format!("/genres/{id}/"), serde_json::json!({})).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["name"], "Comedy");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn patch_nonexistent_genre_returns_404(pool: PgPool) {
    let app = build_test_app(pool);
    let response = patch_json(
        app,
        "/genres/999999/",
        serde_json::json!({"name": "Drama"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// Delete
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn delete_genre_returns_204_then_404(pool: PgPool) {
    let app = build_test_app(pool.clone());
    let created = body_json(
        post_json(app, "/genres/", serde_json::json!({"name": "Comedy"})).await,
    )
    .await;
    let id = created["id"].as_i64().unwrap();

    let app = build_test_app(pool.clone());
    let response = delete(app, &format!("/genres/{id}/")).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    // The id must stay gone.
    let app = build_test_app(pool.clone());
    let response = get(app, &format!("/genres/{id}/")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    // As should a second DELETE.
    let app = build_test_app(pool);
    let response = delete(app, &format!("/genres/{id}/")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
