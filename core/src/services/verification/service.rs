//! Main verification service implementation

use std::sync::Arc;

use crate::domain::entities::otp::{normalize_email, OtpPurpose};
use crate::errors::{DomainResult, RecoveryError};
use crate::repositories::otp::OtpLedger;
use crate::services::email_utils::mask_email;

use super::types::VerifiedCode;

/// Verification service for the non-consuming code pre-check
pub struct VerificationService<L: OtpLedger> {
    /// Ledger holding pending codes
    ledger: Arc<L>,
}

impl<L: OtpLedger> VerificationService<L> {
    /// Create a new verification service
    pub fn new(ledger: Arc<L>) -> Self {
        Self { ledger }
    }

    /// Verify a code against the live record for `(email, purpose)`
    ///
    /// Side-effect-free with respect to account state. The externally
    /// visible failure is always `CodeInvalidOrExpired`: absent record,
    /// expired record, exhausted attempts and a wrong code are
    /// indistinguishable to the caller, so the endpoint leaks no
    /// account-enumeration signal.
    ///
    /// # Arguments
    ///
    /// * `email` - The claimed subject identity
    /// * `purpose` - The workflow the code must be scoped to
    /// * `code` - The candidate code
    ///
    /// # Returns
    ///
    /// * `Ok(VerifiedCode)` - Code matches and the record is live
    /// * `Err(DomainError)` - `MissingFields`, `CodeInvalidOrExpired`,
    ///   or an infrastructure failure from the ledger
    pub async fn verify(
        &self,
        email: &str,
        purpose: OtpPurpose,
        code: &str,
    ) -> DomainResult<VerifiedCode> {
        if email.trim().is_empty() || code.trim().is_empty() {
            return Err(RecoveryError::MissingFields.into());
        }
        let email = normalize_email(email);

        let record = match self.ledger.find_live(&email, purpose).await? {
            Some(record) => record,
            None => {
                tracing::warn!(
                    email = %mask_email(&email),
                    purpose = %purpose,
                    event = "otp_verify_no_live_record",
                    "Verification attempted with no live code"
                );
                return Err(RecoveryError::CodeInvalidOrExpired.into());
            }
        };

        if !record.matches_code(code) {
            self.ledger.record_attempt(record.id, false).await?;
            tracing::warn!(
                email = %mask_email(&email),
                purpose = %purpose,
                record_id = %record.id,
                event = "otp_verify_mismatch",
                "Verification code mismatch"
            );
            return Err(RecoveryError::CodeInvalidOrExpired.into());
        }

        self.ledger.record_attempt(record.id, true).await?;

        // A concurrent reset may have consumed the record between the
        // lookup and here; mark_verified reports that as None.
        let verified_at = match self.ledger.mark_verified(record.id).await? {
            Some(ts) => ts,
            None => return Err(RecoveryError::CodeInvalidOrExpired.into()),
        };

        tracing::info!(
            email = %mask_email(&email),
            purpose = %purpose,
            record_id = %record.id,
            event = "otp_verified",
            "Verification code accepted"
        );

        Ok(VerifiedCode {
            email,
            purpose,
            verified: true,
            verified_at,
        })
    }
}
