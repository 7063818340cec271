//! User entity as seen by the recovery core.
//!
//! Users are owned by the external account directory; this core only
//! ever reads them and replaces `password_hash`. Email is immutable
//! once set, which is why no setter for it exists here.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A registered account, referenced (not owned) by the recovery core
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique identifier for the user
    pub id: Uuid,

    /// Normalized email address; immutable post-registration
    pub email: String,

    /// Opaque credential produced by the password hasher
    pub password_hash: String,

    /// Timestamp when the user was created
    pub created_at: DateTime<Utc>,

    /// Timestamp when the user was last updated
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Creates a new User instance
    pub fn new(email: impl Into<String>, password_hash: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            email: email.into().trim().to_lowercase(),
            password_hash: password_hash.into(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Replaces the stored credential; the only write this core performs
    pub fn set_password_hash(&mut self, hash: impl Into<String>) {
        self.password_hash = hash.into();
        self.updated_at = Utc::now();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_user_normalizes_email() {
        let user = User::new(" Alice@Example.COM ", "hash");
        assert_eq!(user.email, "alice@example.com");
    }

    #[test]
    fn test_set_password_hash_touches_updated_at() {
        let mut user = User::new("alice@example.com", "old-hash");
        let created = user.updated_at;

        user.set_password_hash("new-hash");

        assert_eq!(user.password_hash, "new-hash");
        assert!(user.updated_at >= created);
    }
}
