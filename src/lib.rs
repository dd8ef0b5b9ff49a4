//! # Sumd - Memoizing Sum Service
//!
//! Computes integer sums over HTTP and memoizes every result keyed by the
//! exact input sequence.
//!
//! Sumd provides:
//! - Canonical string keys for ordered integer sequences
//! - Idempotent compute-and-store with 32-bit wraparound arithmetic
//! - SQLite-backed persistence with a uniqueness constraint on the key
//! - An axum HTTP endpoint (`POST /api/sum`) and a small CLI

pub mod config;
pub mod key;
pub mod server;
pub mod service;
pub mod storage;

// Re-exports for convenient access
pub use key::canonicalize;
pub use service::{compute_sum, Computation};
pub use storage::{MemoizedSum, SqliteStore, SumStore};

/// Result type alias for Sumd operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for Sumd operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Storage error: {0}")]
    Storage(#[from] rusqlite::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Whether this error is a SQLite uniqueness-constraint violation.
    ///
    /// Two concurrent writers can race on the same key; the loser's insert
    /// fails with this error and the caller re-reads the winner's row.
    pub fn is_unique_violation(&self) -> bool {
        match self {
            Error::Storage(rusqlite::Error::SqliteFailure(e, _)) => {
                e.code == rusqlite::ErrorCode::ConstraintViolation
            }
            _ => false,
        }
    }
}
