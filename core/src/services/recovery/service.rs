//! Main recovery service implementation

use std::sync::Arc;

use crate::domain::entities::otp::{normalize_email, OtpPurpose};
use crate::errors::{DomainResult, RecoveryError};
use crate::repositories::account::AccountDirectory;
use crate::repositories::otp::{ConsumeOutcome, OtpLedger};
use crate::services::email_utils::mask_email;

use super::compat::resolve_new_password;
use super::config::RecoveryServiceConfig;
use super::traits::{NotificationChannel, PasswordHasher};
use super::types::{RequestCodeResult, ResetOutcome, ResetRequest};

/// Recovery service owning issuance and password reset
pub struct RecoveryService<L, A, N, H>
where
    L: OtpLedger,
    A: AccountDirectory,
    N: NotificationChannel,
    H: PasswordHasher,
{
    /// Ledger holding pending codes
    ledger: Arc<L>,
    /// External account directory
    directory: Arc<A>,
    /// Out-of-band delivery channel
    notifier: Arc<N>,
    /// Opaque password hashing capability
    hasher: Arc<H>,
    /// Service configuration
    config: RecoveryServiceConfig,
}

impl<L, A, N, H> RecoveryService<L, A, N, H>
where
    L: OtpLedger,
    A: AccountDirectory,
    N: NotificationChannel,
    H: PasswordHasher,
{
    /// Create a new recovery service
    pub fn new(
        ledger: Arc<L>,
        directory: Arc<A>,
        notifier: Arc<N>,
        hasher: Arc<H>,
        config: RecoveryServiceConfig,
    ) -> Self {
        Self {
            ledger,
            directory,
            notifier,
            hasher,
            config,
        }
    }

    /// Issue a password-reset code for a claimed email
    ///
    /// Supersedes any pending code for the pair, so only the newest
    /// code is ever live. The code travels out-of-band through the
    /// notification channel; it appears in no response and no log. A
    /// delivery failure is reported in the result but does not roll
    /// back issuance.
    ///
    /// # Returns
    ///
    /// * `Ok(RequestCodeResult)` - Code issued (delivery may have failed)
    /// * `Err(DomainError)` - `MissingFields`, `EmailNotFound`, or an
    ///   infrastructure failure
    pub async fn request_code(&self, email: &str) -> DomainResult<RequestCodeResult> {
        if email.trim().is_empty() {
            return Err(RecoveryError::MissingFields.into());
        }
        let email = normalize_email(email);

        if self.directory.find_by_email(&email).await?.is_none() {
            tracing::info!(
                email = %mask_email(&email),
                event = "recovery_unknown_email",
                "Recovery requested for unknown email"
            );
            return Err(RecoveryError::EmailNotFound.into());
        }

        let record = self.ledger.issue(&email, OtpPurpose::PasswordReset).await?;

        let delivered = match self.notifier.send_code(&email, &record.code).await {
            Ok(message_id) => {
                tracing::info!(
                    email = %mask_email(&email),
                    message_id = %message_id,
                    record_id = %record.id,
                    event = "recovery_code_sent",
                    "Recovery code handed to notification channel"
                );
                true
            }
            Err(e) => {
                // Best-effort channel: the code stays valid so the user
                // can retry delivery without invalidating it.
                tracing::error!(
                    email = %mask_email(&email),
                    record_id = %record.id,
                    error = %e,
                    event = "recovery_code_delivery_failed",
                    "Notification channel failed; issuance stands"
                );
                false
            }
        };

        Ok(RequestCodeResult {
            message: "A verification code has been sent to your email".to_string(),
            delivered,
        })
    }

    /// Reset the account password using a previously issued code
    ///
    /// Check order: field presence, password policy, OTP validity and
    /// match, account existence, consumption, credential write. OTP
    /// validity is checked before account existence on purpose: a live
    /// code can only exist for an email that was resolvable at issue
    /// time, so this order leaks the least. Consumption happens after
    /// the existence check; every failure path is side-effect-free
    /// apart from failed-attempt accounting.
    ///
    /// Exactly one consumption and exactly one password write can occur
    /// per code, even under concurrent calls: the ledger's
    /// compare-and-set admits a single winner.
    pub async fn reset_password(&self, request: ResetRequest) -> DomainResult<ResetOutcome> {
        let password = resolve_new_password(
            request.new_password.as_deref(),
            request.new_password_legacy.as_deref(),
        )
        .ok_or(RecoveryError::MissingFields)?;

        if request.email.trim().is_empty() || request.code.trim().is_empty() || password.is_empty()
        {
            return Err(RecoveryError::MissingFields.into());
        }
        if password.chars().count() < self.config.password_min_length {
            return Err(RecoveryError::PasswordTooShort.into());
        }
        let email = normalize_email(&request.email);

        let record = self
            .ledger
            .find_live(&email, OtpPurpose::PasswordReset)
            .await?
            .ok_or(RecoveryError::CodeInvalidOrExpired)?;

        if !record.matches_code(&request.code) {
            self.ledger.record_attempt(record.id, false).await?;
            tracing::warn!(
                email = %mask_email(&email),
                record_id = %record.id,
                event = "recovery_code_mismatch",
                "Reset attempted with wrong code"
            );
            return Err(RecoveryError::CodeInvalidOrExpired.into());
        }
        self.ledger.record_attempt(record.id, true).await?;

        if self.directory.find_by_email(&email).await?.is_none() {
            return Err(RecoveryError::EmailNotFound.into());
        }

        match self.ledger.consume(record.id).await? {
            ConsumeOutcome::Consumed => {}
            ConsumeOutcome::AlreadyConsumed => {
                // Lost the race to a concurrent reset with the same code
                tracing::warn!(
                    email = %mask_email(&email),
                    record_id = %record.id,
                    event = "recovery_consume_race_lost",
                    "Code consumed by a concurrent reset"
                );
                return Err(RecoveryError::CodeInvalidOrExpired.into());
            }
        }

        let hash = self.hasher.hash(&password)?;
        self.directory.set_password_hash(&email, &hash).await?;

        tracing::info!(
            email = %mask_email(&email),
            record_id = %record.id,
            event = "password_reset_completed",
            "Password reset completed"
        );

        Ok(ResetOutcome {
            message: "Password updated successfully".to_string(),
        })
    }
}
