//! Domain-specific error types and error handling.

use thiserror::Error;

/// Client-input errors surfaced directly to the caller
///
/// Each kind carries a stable machine code (see [`RecoveryError::code`])
/// plus a human message. `CodeInvalidOrExpired` deliberately unifies
/// wrong-code, expired, attempt-exhausted and already-consumed so the
/// external signal gives an attacker no oracle to distinguish them.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecoveryError {
    #[error("Required fields are missing")]
    MissingFields,

    #[error("Password must be at least 6 characters")]
    PasswordTooShort,

    #[error("No account exists for this email")]
    EmailNotFound,

    #[error("Verification code is invalid or has expired")]
    CodeInvalidOrExpired,
}

impl RecoveryError {
    /// Stable machine-readable code for API responses
    pub fn code(&self) -> &'static str {
        match self {
            RecoveryError::MissingFields => "MISSING_FIELDS",
            RecoveryError::PasswordTooShort => "PASSWORD_TOO_SHORT",
            RecoveryError::EmailNotFound => "EMAIL_NOT_FOUND",
            RecoveryError::CodeInvalidOrExpired => "CODE_INVALID_OR_EXPIRED",
        }
    }
}

/// Core domain errors
///
/// Client-input failures bridge through [`RecoveryError`];
/// infrastructure failures are kept distinct so the API layer never
/// conflates an unreachable directory with a bad code.
#[derive(Error, Debug)]
pub enum DomainError {
    #[error(transparent)]
    Recovery(#[from] RecoveryError),

    #[error("Service unavailable: {message}")]
    Unavailable { message: String },

    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl DomainError {
    /// Convenience constructor for infrastructure failures
    pub fn unavailable(message: impl Into<String>) -> Self {
        DomainError::Unavailable {
            message: message.into(),
        }
    }

    /// Convenience constructor for internal errors
    pub fn internal(message: impl Into<String>) -> Self {
        DomainError::Internal {
            message: message.into(),
        }
    }
}

pub type DomainResult<T> = Result<T, DomainError>;
