//! OTP ledger trait: the single source of truth for pending codes.
//!
//! The ledger exclusively owns [`OtpRecord`] instances; services read
//! records and request mutations through this seam, never mutating a
//! record they hold directly. The in-memory implementation backs
//! single-instance deployments; a TTL-capable keyed store can implement
//! the same contract for multi-instance ones, provided `consume`
//! remains an atomic compare-and-set.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::domain::entities::otp::{OtpPurpose, OtpRecord};
use crate::errors::DomainError;

/// Outcome of a consumption attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConsumeOutcome {
    /// This caller transitioned the record to consumed
    Consumed,
    /// Another caller consumed the record first (or it is unknown)
    AlreadyConsumed,
}

/// Contract for the pending-code store
#[async_trait]
pub trait OtpLedger: Send + Sync {
    /// Issue a fresh code for an `(email, purpose)` pair
    ///
    /// Atomically supersedes any live record for the pair before
    /// inserting the new one: two concurrent issues must never leave
    /// two live records. Superseded records are marked dead, not
    /// deleted. The returned record is the only time the ledger ever
    /// exposes the code; the caller is responsible for out-of-band
    /// delivery.
    async fn issue(&self, email: &str, purpose: OtpPurpose) -> Result<OtpRecord, DomainError>;

    /// Find the current live record for a pair, if any
    async fn find_live(
        &self,
        email: &str,
        purpose: OtpPurpose,
    ) -> Result<Option<OtpRecord>, DomainError>;

    /// Record the outcome of a match attempt
    ///
    /// A failed attempt increments the record's counter atomically with
    /// respect to concurrent callers; a success leaves it unchanged.
    async fn record_attempt(&self, record_id: Uuid, success: bool) -> Result<(), DomainError>;

    /// Mark a record as verified unless it has been consumed
    ///
    /// Idempotent. Returns the verification timestamp, or `None` when
    /// the record is unknown or already consumed.
    async fn mark_verified(
        &self,
        record_id: Uuid,
    ) -> Result<Option<DateTime<Utc>>, DomainError>;

    /// Consume a record, exactly once across all callers
    ///
    /// Compare-and-set on the consumption timestamp: of any number of
    /// concurrent callers, exactly one observes [`ConsumeOutcome::Consumed`].
    /// Unknown record ids report `AlreadyConsumed`.
    async fn consume(&self, record_id: Uuid) -> Result<ConsumeOutcome, DomainError>;
}
