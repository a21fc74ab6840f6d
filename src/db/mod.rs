mod models;
mod session;
mod user_repository;

use crate::errors::Error;
use diesel::connection::SimpleConnection;
use diesel::r2d2::{Builder, ConnectionManager, Pool};
use diesel::sqlite::SqliteConnection;
use std::sync::Arc;
use tracing::{debug, info};

pub use models::*;
pub use session::DbSession;
pub use user_repository::*;

/// DDL for every table declared in `crate::schema`.
pub const CREATE_USERS_TABLE: &str = "CREATE TABLE IF NOT EXISTS users (
    id INTEGER PRIMARY KEY AUTOINCREMENT NOT NULL,
    name TEXT NOT NULL,
    email TEXT NOT NULL,
    created_at TEXT NOT NULL
);";

/// Process-wide persistence handle. Cheap to clone; all clones share one pool.
#[derive(Clone, Debug)]
pub struct Database {
    pool: Arc<Pool<ConnectionManager<SqliteConnection>>>,
}

impl Database {
    /// Builds the connection pool for `database_url`.
    ///
    /// # Errors
    ///
    /// Returns an Error if the pool cannot open its initial connections,
    /// which is the case when the database is unreachable.
    pub fn connect(database_url: &str) -> Result<Self, Error> {
        Self::build(database_url, Pool::builder())
    }

    /// Same as `connect`, capping the pool at `max_size` connections.
    pub fn with_pool_size(database_url: &str, max_size: u32) -> Result<Self, Error> {
        Self::build(database_url, Pool::builder().max_size(max_size))
    }

    fn build(
        database_url: &str,
        builder: Builder<ConnectionManager<SqliteConnection>>,
    ) -> Result<Self, Error> {
        let manager = ConnectionManager::<SqliteConnection>::new(database_url);
        let pool = builder.build(manager)?;
        info!(
            "Connected to database at {} (pool size {})",
            database_url,
            pool.max_size()
        );

        Ok(Database {
            pool: Arc::new(pool),
        })
    }

    /// Creates every declared entity table that does not exist yet.
    ///
    /// Safe to call any number of times against the same database.
    pub fn init_schema(&self) -> Result<(), Error> {
        let mut conn = self.pool.get()?;
        conn.batch_execute(CREATE_USERS_TABLE)?;
        debug!("Schema initialized");
        Ok(())
    }

    /// Checks a connection out of the pool for one unit of work.
    ///
    /// Blocks until a connection is free or the pool's checkout timeout
    /// expires.
    pub fn session(&self) -> Result<DbSession, Error> {
        let conn = self.pool.get()?;
        Ok(DbSession::new(conn))
    }
}
