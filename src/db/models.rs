use crate::schema::users;
use diesel::{Identifiable, Insertable, Queryable, Selectable};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Represents a user row in the database
#[derive(
    Debug, Clone, PartialEq, Serialize, Deserialize, Queryable, Selectable, Identifiable, ToSchema,
)]
#[diesel(table_name = users)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct User {
    /// Primary key, assigned by the database
    pub id: i64,
    /// Display name
    pub name: String,
    /// Contact email address
    pub email: String,
    /// RFC 3339 timestamp of when the row was created
    pub created_at: String,
}

/// Column values for a user row that has not been assigned an id yet
#[derive(Debug, Insertable)]
#[diesel(table_name = users)]
pub struct NewUser<'a> {
    pub name: &'a str,
    pub email: &'a str,
    pub created_at: &'a str,
}
