mod common;

use axum::http::StatusCode;
use serde_json::Value;
use std::time::Duration;
use users_api::api::routes::app;
use users_api::constants::USER_NOT_FOUND;
use users_api::db::{Database, User};

#[tokio::test]
async fn list_users_empty_table() {
    let (_dir, database) = common::initialized_database();

    let (status, body) = common::get_json(app(database), "/api/v1/users").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, Value::Array(vec![]));
}

#[tokio::test]
async fn list_users_count_matches_rows() {
    for count in [1, 7] {
        let (_dir, database) = common::initialized_database();
        common::seed_users(&database, count);

        let (status, body) = common::get_json(app(database), "/api/v1/users").await;

        assert_eq!(status, StatusCode::OK);
        let users: Vec<User> = serde_json::from_value(body).unwrap();
        assert_eq!(users.len(), count);
    }
}

#[tokio::test]
async fn get_user_returns_exact_record() {
    let (_dir, database) = common::initialized_database();
    let seeded = common::seed_users(&database, 3);

    for expected in seeded {
        let uri = format!("/api/v1/users/{}", expected.id);
        let (status, body) = common::get_json(app(database.clone()), &uri).await;

        assert_eq!(status, StatusCode::OK);
        let user: User = serde_json::from_value(body).unwrap();
        assert_eq!(user, expected);
    }
}

#[tokio::test]
async fn get_user_missing_is_404() {
    let (_dir, database) = common::initialized_database();

    let (status, body) = common::get_json(app(database), "/api/v1/users/99").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["detail"], USER_NOT_FOUND);
    assert_eq!(body["code"], 404);
}

#[tokio::test]
async fn get_user_non_integer_id_is_422() {
    let (_dir, database) = common::initialized_database();

    let (status, body) = common::get_json(app(database), "/api/v1/users/abc").await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["code"], 422);
}

#[tokio::test]
async fn two_users_scenario() {
    let (_dir, database) = common::initialized_database();
    let seeded = common::seed_users(&database, 2);
    assert_eq!(seeded[0].id, 1);
    assert_eq!(seeded[1].id, 2);

    let (status, body) = common::get_json(app(database.clone()), "/api/v1/users").await;
    assert_eq!(status, StatusCode::OK);
    let mut users: Vec<User> = serde_json::from_value(body).unwrap();
    users.sort_by_key(|u| u.id);
    assert_eq!(users, seeded);

    let (status, body) = common::get_json(app(database.clone()), "/api/v1/users/1").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["id"], 1);
    assert_eq!(body["name"], "User 1");
    assert_eq!(body["email"], "user1@example.com");

    let (status, _) = common::get_json(app(database), "/api/v1/users/3").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn unknown_route_is_404() {
    let (_dir, database) = common::initialized_database();

    let (status, _) = common::get_raw(app(database), "/api/v2/users").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn ids_beyond_32_bits_round_trip() {
    let (_dir, database) = common::initialized_database();
    common::seed_users(&database, 1);
    let big = common::seed_user_with_id(&database, 5_000_000_000, "big");
    assert_eq!(big.id, 5_000_000_000);

    let (status, body) = common::get_json(app(database.clone()), "/api/v1/users").await;
    assert_eq!(status, StatusCode::OK);
    let users: Vec<User> = serde_json::from_value(body).unwrap();
    assert!(users.contains(&big), "{users:?}");

    let (status, body) =
        common::get_json(app(database), "/api/v1/users/5000000000").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["id"], 5_000_000_000_i64);
    assert_eq!(body["name"], "big");
}

#[tokio::test]
async fn absent_id_beyond_32_bits_is_404() {
    let (_dir, database) = common::initialized_database();

    let (status, body) =
        common::get_json(app(database), "/api/v1/users/3000000000").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["detail"], USER_NOT_FOUND);
}

#[tokio::test]
async fn session_is_released_after_failed_request() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("users.db");
    let database = Database::with_pool_size(path.to_str().unwrap(), 1).unwrap();

    // No schema yet: the query fails while holding the only connection.
    let (status, _) = common::get_json(app(database.clone()), "/api/v1/users").await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);

    database.init_schema().expect("connection should be back in the pool");
    common::seed_users(&database, 1);

    let (status, body) = tokio::time::timeout(
        Duration::from_secs(5),
        common::get_json(app(database.clone()), "/api/v1/users/1"),
    )
    .await
    .expect("checkout blocked: session was not released");
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["id"], 1);

    let (status, _) = tokio::time::timeout(
        Duration::from_secs(5),
        common::get_json(app(database), "/api/v1/users/2"),
    )
    .await
    .expect("checkout blocked after a 404");
    assert_eq!(status, StatusCode::NOT_FOUND);
}
