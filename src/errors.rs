//! Error types for the connection pool

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConnectionError {
    #[error("connection could not be established: {0}")]
    EstablishFailed(String),

    #[error("connection teardown failed: {0}")]
    TeardownFailed(String),

    #[error("factory refused to create a connection: {0}")]
    CreateFailed(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type PoolResult<T> = Result<T, ConnectionError>;
