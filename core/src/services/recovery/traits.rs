//! Collaborator seams for the recovery service

use async_trait::async_trait;

use crate::errors::DomainError;

/// Out-of-band delivery of a one-time code to the account holder
///
/// Delivery is best-effort: the caller logs failures but does not roll
/// back issuance, so the code remains valid even when the channel is
/// down.
#[async_trait]
pub trait NotificationChannel: Send + Sync {
    /// Deliver a code to the given email address
    ///
    /// Returns a provider message id on success and a provider error
    /// description on failure.
    async fn send_code(&self, email: &str, code: &str) -> Result<String, String>;
}

/// Opaque `hash(password) -> credential` capability
///
/// Algorithm selection is outside this core; the account directory
/// stores whatever opaque string the hasher produces.
pub trait PasswordHasher: Send + Sync {
    fn hash(&self, password: &str) -> Result<String, DomainError>;
}
