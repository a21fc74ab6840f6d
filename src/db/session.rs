use crate::errors::Error;
use diesel::r2d2::{ConnectionManager, PooledConnection};
use diesel::sqlite::SqliteConnection;
use tracing::trace;

/// A database session scoped to a single request.
///
/// The underlying connection goes back to the pool when the session is
/// dropped, whichever way the request ends.
pub struct DbSession {
    conn: PooledConnection<ConnectionManager<SqliteConnection>>,
}

impl DbSession {
    pub(crate) fn new(conn: PooledConnection<ConnectionManager<SqliteConnection>>) -> Self {
        trace!("Database session opened");
        DbSession { conn }
    }

    pub fn connection(&mut self) -> &mut SqliteConnection {
        &mut self.conn
    }

    /// Runs `work` on the blocking thread pool, consuming the session.
    ///
    /// The session is released as soon as `work` returns or panics.
    pub async fn run<F, T>(mut self, work: F) -> Result<T, Error>
    where
        F: FnOnce(&mut SqliteConnection) -> Result<T, Error> + Send + 'static,
        T: Send + 'static,
    {
        tokio::task::spawn_blocking(move || work(self.connection())).await?
    }
}

impl Drop for DbSession {
    fn drop(&mut self) {
        trace!("Database session released");
    }
}
