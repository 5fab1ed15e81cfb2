//! Error types for vocab-core.

use thiserror::Error;

/// Result type alias using [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// Errors surfaced by the session engine.
#[derive(Debug, Error)]
pub enum Error {
    /// The requested operation needs a running session. This is a contract
    /// violation; the only recovery is starting a new session.
    #[error("no running session: engine is {found}")]
    InvalidSessionState { found: &'static str },

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Errors from card store implementations. The in-memory store never fails;
/// persistent backends map their failures to [`StoreError::Backend`].
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("storage backend: {0}")]
    Backend(String),
}
