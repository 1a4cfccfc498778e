//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Each variant carries the human-readable detail that is surfaced to the
/// client unchanged. Requests fail independently; none of these is fatal.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A value failed validation (e.g. a negative price).
    #[error("validation failed: {0}")]
    Validation(String),

    /// The write would break a uniqueness invariant (e.g. duplicate username).
    #[error("conflict: {0}")]
    Conflict(String),

    /// Credentials did not verify.
    #[error("unauthorized: {0}")]
    Unauthorized(String),

    /// A requested record does not exist.
    #[error("not found: {0}")]
    NotFound(String),
}

impl DomainError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn conflict(msg: impl Into<String>) -> Self {
        Self::Conflict(msg.into())
    }

    pub fn unauthorized(msg: impl Into<String>) -> Self {
        Self::Unauthorized(msg.into())
    }

    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    /// The client-facing detail, without the variant prefix.
    pub fn detail(&self) -> &str {
        match self {
            Self::Validation(m)
            | Self::Conflict(m)
            | Self::Unauthorized(m)
            | Self::NotFound(m) => m.as_str(),
        }
    }
}
