//! Cryptographically secure one-time code generation.

use rand::{rngs::OsRng, RngCore};

use crate::domain::entities::otp::CODE_LENGTH;

/// Generator for fixed-length numeric one-time codes
///
/// Draws from the OS CSPRNG. There is no per-call failure path: if the
/// OS randomness source is unavailable the process cannot safely issue
/// codes at all, and `OsRng` treats that as fatal.
#[derive(Debug, Clone, Copy, Default)]
pub struct CodeGenerator;

impl CodeGenerator {
    pub fn new() -> Self {
        Self
    }

    /// Generates a random 6-digit code as a zero-padded string
    pub fn generate(&self) -> String {
        let mut rng = OsRng;
        let mut bytes = [0u8; 4];
        rng.fill_bytes(&mut bytes);
        let num = u32::from_le_bytes(bytes);
        // Modulo introduces a bias of ~2^-32 per code value, negligible
        // against a 5-attempt guessing budget over a 15-minute window.
        let code = num % 1_000_000;
        format!("{:0width$}", code, width = CODE_LENGTH)
    }
}
