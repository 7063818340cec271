//! Default bcrypt implementation of the password hasher seam.

use crate::errors::DomainError;

use super::traits::PasswordHasher;

/// Password hasher backed by bcrypt
#[derive(Debug, Clone)]
pub struct BcryptPasswordHasher {
    cost: u32,
}

impl BcryptPasswordHasher {
    pub fn new(cost: u32) -> Self {
        Self { cost }
    }
}

impl Default for BcryptPasswordHasher {
    fn default() -> Self {
        Self {
            cost: bcrypt::DEFAULT_COST,
        }
    }
}

impl PasswordHasher for BcryptPasswordHasher {
    fn hash(&self, password: &str) -> Result<String, DomainError> {
        bcrypt::hash(password, self.cost)
            .map_err(|e| DomainError::internal(format!("Password hashing failed: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_produces_verifiable_credential() {
        // Minimum cost keeps the test fast
        let hasher = BcryptPasswordHasher::new(4);
        let hash = hasher.hash("123456").unwrap();

        assert_ne!(hash, "123456");
        assert!(bcrypt::verify("123456", &hash).unwrap());
    }
}
