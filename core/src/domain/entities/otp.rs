//! One-time code entity for email-based credential recovery.

use chrono::{DateTime, Duration, Utc};
use constant_time_eq::constant_time_eq;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Maximum number of failed match attempts before a code is dead
pub const MAX_ATTEMPTS: u32 = 5;

/// Length of the one-time code
pub const CODE_LENGTH: usize = 6;

/// Default expiration time for one-time codes (15 minutes)
pub const DEFAULT_EXPIRATION_MINUTES: i64 = 15;

/// The workflow a one-time code is scoped to
///
/// A code issued for one purpose is never valid for another. Modeled as
/// a closed enum so new purposes are an explicit, exhaustiveness-checked
/// addition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OtpPurpose {
    /// Password reset for an existing account
    PasswordReset,
    /// Email verification during registration
    Registration,
}

impl OtpPurpose {
    /// Stable wire name of the purpose
    pub fn as_str(&self) -> &'static str {
        match self {
            OtpPurpose::PasswordReset => "password_reset",
            OtpPurpose::Registration => "registration",
        }
    }
}

impl fmt::Display for OtpPurpose {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A pending one-time code for an `(email, purpose)` pair
///
/// Records are owned exclusively by the OTP ledger. A record is **live**
/// while it is unexpired, unconsumed, not superseded by a newer issue,
/// and under the attempt ceiling; everything else is terminal. Dead
/// records are retained for audit, not deleted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OtpRecord {
    /// Unique identifier for this record
    pub id: Uuid,

    /// Normalized (lowercase) email the code was issued for
    pub email: String,

    /// Workflow this code is scoped to
    pub purpose: OtpPurpose,

    /// The code itself; never logged, never echoed in responses
    pub code: String,

    /// Timestamp when the code was issued
    pub issued_at: DateTime<Utc>,

    /// Timestamp when the code expires
    pub expires_at: DateTime<Utc>,

    /// Set by the verification pre-check; does not consume the code
    pub verified_at: Option<DateTime<Utc>>,

    /// Set exactly once by a successful reset; terminal
    pub consumed_at: Option<DateTime<Utc>>,

    /// Whether a newer record for the same pair replaced this one
    pub superseded: bool,

    /// Number of failed match attempts
    pub attempt_count: u32,
}

impl OtpRecord {
    /// Creates a new record with the default 15-minute validity window
    ///
    /// The email is normalized to lowercase; the code is supplied by the
    /// caller (the ledger owns the generator).
    pub fn new(email: &str, purpose: OtpPurpose, code: String) -> Self {
        Self::new_with_expiration(email, purpose, code, DEFAULT_EXPIRATION_MINUTES)
    }

    /// Creates a new record with a custom validity window in minutes
    pub fn new_with_expiration(
        email: &str,
        purpose: OtpPurpose,
        code: String,
        expiration_minutes: i64,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            email: normalize_email(email),
            purpose,
            code,
            issued_at: now,
            expires_at: now + Duration::minutes(expiration_minutes),
            verified_at: None,
            consumed_at: None,
            superseded: false,
            attempt_count: 0,
        }
    }

    /// Checks whether the validity window has passed
    ///
    /// Expiry is evaluated lazily at read time; no background sweep is
    /// involved in correctness.
    pub fn is_expired(&self) -> bool {
        Utc::now() > self.expires_at
    }

    /// Checks whether the code has been consumed by a reset
    pub fn is_consumed(&self) -> bool {
        self.consumed_at.is_some()
    }

    /// Checks whether the failed-attempt ceiling has been reached
    pub fn is_attempts_exhausted(&self) -> bool {
        self.attempt_count >= MAX_ATTEMPTS
    }

    /// Checks whether the record is live
    ///
    /// A live record is the only one that `verify` and `reset` will
    /// accept a code against. At most one live record exists per
    /// `(email, purpose)` pair.
    pub fn is_live(&self) -> bool {
        !self.is_expired() && !self.is_consumed() && !self.superseded && !self.is_attempts_exhausted()
    }

    /// Compares a candidate code against the stored one in constant time
    ///
    /// Constant-time comparison prevents an attacker from narrowing the
    /// code byte by byte through response timing.
    pub fn matches_code(&self, candidate: &str) -> bool {
        if self.code.len() != candidate.len() {
            return false;
        }
        constant_time_eq(self.code.as_bytes(), candidate.as_bytes())
    }

    /// Records a failed match attempt
    pub fn record_failed_attempt(&mut self) {
        self.attempt_count += 1;
    }

    /// Marks the record as verified unless it has already been consumed
    ///
    /// Idempotent: the first verification timestamp is kept.
    pub fn mark_verified(&mut self) {
        if self.consumed_at.is_none() && self.verified_at.is_none() {
            self.verified_at = Some(Utc::now());
        }
    }

    /// Attempts to consume the record
    ///
    /// Returns `true` only for the caller that transitions
    /// `consumed_at` from unset to set; every later call returns
    /// `false`. Consumption is terminal and never cleared.
    pub fn consume(&mut self) -> bool {
        if self.consumed_at.is_some() {
            return false;
        }
        self.consumed_at = Some(Utc::now());
        true
    }

    /// Marks the record as superseded by a newer issue
    pub fn supersede(&mut self) {
        self.superseded = true;
    }

    /// Gets the number of remaining match attempts
    pub fn remaining_attempts(&self) -> u32 {
        MAX_ATTEMPTS.saturating_sub(self.attempt_count)
    }
}

/// Normalizes an email for use as a ledger/directory key
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}
