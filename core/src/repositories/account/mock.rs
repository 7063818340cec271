//! In-memory implementation of the account directory.
//!
//! Backs tests and single-instance demos; a production deployment
//! implements [`AccountDirectory`] against the real identity store.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::entities::user::User;
use crate::errors::{DomainError, RecoveryError};

use super::trait_::AccountDirectory;

/// In-memory account directory keyed by normalized email
pub struct MockAccountDirectory {
    users: Arc<RwLock<HashMap<String, User>>>,
    password_writes: AtomicUsize,
}

impl MockAccountDirectory {
    /// Create an empty directory
    pub fn new() -> Self {
        Self {
            users: Arc::new(RwLock::new(HashMap::new())),
            password_writes: AtomicUsize::new(0),
        }
    }

    /// Create a directory pre-populated with one user
    pub fn with_user(user: User) -> Self {
        let mut users = HashMap::new();
        users.insert(user.email.clone(), user);
        Self {
            users: Arc::new(RwLock::new(users)),
            password_writes: AtomicUsize::new(0),
        }
    }

    /// Insert a user, replacing any existing record for the email
    pub async fn add_user(&self, user: User) {
        self.users.write().await.insert(user.email.clone(), user);
    }

    /// Number of password writes performed, for exactly-once assertions
    pub fn password_write_count(&self) -> usize {
        self.password_writes.load(Ordering::SeqCst)
    }
}

impl Default for MockAccountDirectory {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AccountDirectory for MockAccountDirectory {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError> {
        let users = self.users.read().await;
        Ok(users.get(email).cloned())
    }

    async fn set_password_hash(
        &self,
        email: &str,
        password_hash: &str,
    ) -> Result<(), DomainError> {
        let mut users = self.users.write().await;
        match users.get_mut(email) {
            Some(user) => {
                user.set_password_hash(password_hash);
                self.password_writes.fetch_add(1, Ordering::SeqCst);
                Ok(())
            }
            None => Err(DomainError::Recovery(RecoveryError::EmailNotFound)),
        }
    }
}
