#![allow(dead_code)]

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use serde_json::Value;
use tempfile::TempDir;
use diesel::prelude::*;
use tower::ServiceExt; // for oneshot
use users_api::db::{Database, User, UserRepository};

/// A database living in its own temp dir. Keep the `TempDir` alive for the
/// duration of the test.
pub fn temp_database() -> (TempDir, Database) {
    let dir = tempfile::tempdir().expect("failed to create temp dir");
    let path = dir.path().join("users.db");
    let database =
        Database::connect(path.to_str().expect("temp path is utf-8")).expect("failed to connect");
    (dir, database)
}

pub fn initialized_database() -> (TempDir, Database) {
    let (dir, database) = temp_database();
    database.init_schema().expect("failed to init schema");
    (dir, database)
}

pub fn seed_users(database: &Database, count: usize) -> Vec<User> {
    let mut session = database.session().expect("failed to open session");
    let mut repo = UserRepository::new(session.connection());
    (1..=count)
        .map(|i| {
            repo.insert_user(&format!("User {i}"), &format!("user{i}@example.com"))
                .expect("failed to insert user")
        })
        .collect()
}

/// Inserts a row with a caller-chosen id, the way an external writer would.
pub fn seed_user_with_id(database: &Database, id: i64, name: &str) -> User {
    use users_api::schema::users;

    let mut session = database.session().expect("failed to open session");
    diesel::insert_into(users::table)
        .values((
            users::id.eq(id),
            users::name.eq(name),
            users::email.eq(format!("{name}@example.com")),
            users::created_at.eq("2024-01-01T00:00:00+00:00"),
        ))
        .execute(session.connection())
        .expect("failed to insert user");

    UserRepository::new(session.connection())
        .get_user(id)
        .expect("failed to read back user")
        .expect("inserted user is missing")
}

pub async fn get_json(app: Router, uri: &str) -> (StatusCode, Value) {
    let (status, bytes) = get_raw(app, uri).await;
    let body = serde_json::from_slice(&bytes).expect("response is not JSON");
    (status, body)
}

pub async fn get_raw(app: Router, uri: &str) -> (StatusCode, Vec<u8>) {
    let request = Request::builder()
        .uri(uri)
        .body(Body::empty())
        .expect("failed to build request");

    let response = app.oneshot(request).await.expect("router is infallible");
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("failed to read body");
    (status, bytes.to_vec())
}
