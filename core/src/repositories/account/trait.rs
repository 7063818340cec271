//! Account directory trait defining the interface to user identity storage.
//!
//! The directory is an external collaborator: it owns the `User` records
//! and their credentials. The recovery core reads users by email and
//! performs exactly one kind of write, replacing the password hash.
//! Email is immutable post-registration, so no email setter exists on
//! this seam.

use async_trait::async_trait;

use crate::domain::entities::user::User;
use crate::errors::DomainError;

/// Contract for the external account directory
///
/// Implementations should treat the email argument as already
/// normalized (lowercase, trimmed); the services in this crate
/// normalize before calling.
#[async_trait]
pub trait AccountDirectory: Send + Sync {
    /// Find a user by their normalized email address
    ///
    /// # Returns
    /// * `Ok(Some(User))` - User found
    /// * `Ok(None)` - No user with this email
    /// * `Err(DomainError)` - Directory unreachable or other failure
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError>;

    /// Replace the stored password hash for a user
    ///
    /// # Returns
    /// * `Ok(())` - Credential replaced
    /// * `Err(DomainError::Recovery(EmailNotFound))` - No such user
    /// * `Err(DomainError)` - Directory unreachable or other failure
    async fn set_password_hash(&self, email: &str, password_hash: &str)
        -> Result<(), DomainError>;
}
