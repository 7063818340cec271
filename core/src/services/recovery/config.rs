//! Configuration for the recovery service

/// Minimum accepted password length in characters
pub const MIN_PASSWORD_LENGTH: usize = 6;

/// Configuration for the recovery service
#[derive(Debug, Clone)]
pub struct RecoveryServiceConfig {
    /// Minimum password length accepted by reset
    pub password_min_length: usize,
}

impl Default for RecoveryServiceConfig {
    fn default() -> Self {
        Self {
            password_min_length: MIN_PASSWORD_LENGTH,
        }
    }
}
