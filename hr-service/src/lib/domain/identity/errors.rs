use thiserror::Error;

/// Error for EmailAddress validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum EmailError {
    #[error("Invalid email format: {0}")]
    InvalidFormat(String),
}

/// Top-level error for identity operations
#[derive(Debug, Error)]
pub enum IdentityError {
    /// Reported identically whether the identifier was unknown or the secret
    /// was wrong, so callers cannot enumerate accounts.
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Employee not found: {0}")]
    EmployeeNotFound(String),

    #[error("Invalid email: {0}")]
    InvalidEmail(#[from] EmailError),

    #[error("Password error: {0}")]
    Password(#[from] auth::PasswordError),

    #[error("Token error: {0}")]
    Token(#[from] auth::JwtError),

    // Infrastructure errors
    #[error("Store error: {0}")]
    Store(String),

    #[error("Unknown error: {0}")]
    Unknown(String),
}

impl From<anyhow::Error> for IdentityError {
    fn from(err: anyhow::Error) -> Self {
        IdentityError::Unknown(err.to_string())
    }
}
