use diesel::r2d2::PoolError;
use diesel::result::Error as DieselError;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Diesel error: {0}")]
    DieselError(#[from] DieselError),
    #[error("Connection pool error: {0}")]
    PoolError(#[from] PoolError),
    #[error("Blocking task failed: {0}")]
    JoinError(#[from] tokio::task::JoinError),
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}
