use crate::db::models::{NewUser, User};
use crate::errors::Error;
use chrono::Utc;
use diesel::prelude::*;
use diesel::result::Error as DieselError;
use diesel::sqlite::SqliteConnection;

/// Repository for reading user records from the SQLite database
pub struct UserRepository<'a> {
    /// Database connection
    pub conn: &'a mut SqliteConnection,
}

impl<'a> UserRepository<'a> {
    /// Creates a new UserRepository instance
    ///
    /// # Arguments
    ///
    /// * `conn` - Mutable reference to SQLite database connection
    pub fn new(conn: &'a mut SqliteConnection) -> Self {
        UserRepository { conn }
    }

    /// Retrieves every user row, in the database's natural order
    ///
    /// # Errors
    ///
    /// Returns an Error if database operations fail
    pub fn list_users(&mut self) -> Result<Vec<User>, Error> {
        use crate::schema::users::dsl::*;

        let found = users.select(User::as_select()).load(self.conn)?;
        Ok(found)
    }

    /// Retrieves a single user by primary key
    ///
    /// # Arguments
    ///
    /// * `user_id` - The primary key to look up
    ///
    /// # Returns
    ///
    /// `None` when no row has that id
    ///
    /// # Errors
    ///
    /// Returns an Error if database operations fail
    pub fn get_user(&mut self, user_id: i64) -> Result<Option<User>, Error> {
        use crate::schema::users::dsl::*;

        let found = users
            .find(user_id)
            .select(User::as_select())
            .first(self.conn)
            .optional()?;
        Ok(found)
    }

    /// Inserts a user and returns the stored row.
    ///
    /// Only used to seed fixtures; the HTTP surface is read-only.
    ///
    /// # Errors
    ///
    /// Returns an Error if database operations fail
    pub fn insert_user(&mut self, name: &str, email: &str) -> Result<User, Error> {
        use crate::schema::users;

        let now = Utc::now().to_rfc3339();
        let new_user = NewUser {
            name,
            email,
            created_at: &now,
        };

        let stored = self.conn.transaction::<_, DieselError, _>(|conn| {
            diesel::insert_into(users::table)
                .values(&new_user)
                .execute(conn)?;
            users::table
                .order(users::id.desc())
                .select(User::as_select())
                .first(conn)
        })?;
        Ok(stored)
    }
}
