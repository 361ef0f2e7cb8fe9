//! Error types used across Copydesk.
use thiserror::Error;

/// High-level error categories for type-level operations and adapters.
#[derive(Debug, Copy, Clone, Error)]
pub enum ErrorKind {
    #[error("reference not found")]
    NotFound,
    #[error("assertion failed")]
    Assertion,
    #[error("navigation failed")]
    Navigation,
    #[error("store error")]
    Store,
}

/// Structured error with a kind and human message.
#[derive(Debug, Error)]
#[error("{kind:?}: {msg}")]
pub struct Error {
    pub kind: ErrorKind,
    pub msg: String,
}

/// Convenient alias for results returning a `types::Error`.
pub type Result<T> = std::result::Result<T, Error>;
