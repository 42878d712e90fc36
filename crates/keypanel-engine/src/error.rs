//! Engine error types.

/// Account/entitlement error.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    /// A request parameter failed validation.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// No account exists for the given username.
    #[error("account not found")]
    NotFound,

    /// An account already exists for the given username.
    #[error("account already exists")]
    AlreadyExists,

    /// Store error (database, serialization, etc.).
    #[error("store error: {0}")]
    Store(String),
}

impl EngineError {
    /// Create a store error from any error type.
    #[inline]
    pub fn store<E: std::fmt::Display>(err: E) -> Self {
        Self::Store(err.to_string())
    }

    /// Create an invalid-input error from a message.
    #[inline]
    pub fn invalid(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }
}

impl From<sqlx::Error> for EngineError {
    fn from(err: sqlx::Error) -> Self {
        Self::Store(err.to_string())
    }
}
