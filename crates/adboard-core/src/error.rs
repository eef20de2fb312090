use thiserror::Error;

/// Application-wide error types for Adboard.
#[derive(Error, Debug)]
pub enum AppError {
    /// Login failed. Deliberately carries no detail about which check failed.
    #[error("Invalid credentials")]
    Unauthorized,

    /// Bearer token rejected by the verifier (bad signature, malformed, expired).
    #[error("Invalid token: {0}")]
    InvalidToken(String),

    /// A record with the same unique key already exists.
    #[error("Conflict: {0}")]
    Conflict(String),

    /// A required request field was missing or empty.
    #[error("Validation error: {0}")]
    Validation(String),

    /// Password hashing failed.
    #[error("Password hash error: {0}")]
    PasswordHash(String),

    /// Token signing failed.
    #[error("Token error: {0}")]
    Token(String),

    /// Database operation failed.
    #[error("Database error: {0}")]
    DatabaseError(String),

    /// Configuration is missing or invalid.
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Generic error.
    #[error("{0}")]
    Generic(String),
}

impl AppError {
    /// Returns true for failures the caller caused, as opposed to internal ones.
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            AppError::Unauthorized
                | AppError::InvalidToken(_)
                | AppError::Conflict(_)
                | AppError::Validation(_)
        )
    }
}
