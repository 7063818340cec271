//! In-memory OTP ledger for single-instance deployments and tests.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::collections::HashMap;
use uuid::Uuid;

use tokio::sync::RwLock;

use crate::domain::code_generator::CodeGenerator;
use crate::domain::entities::otp::{normalize_email, OtpPurpose, OtpRecord};
use crate::errors::DomainError;

use super::trait_::{ConsumeOutcome, OtpLedger};

type PairKey = (String, OtpPurpose);

#[derive(Default)]
struct LedgerState {
    /// All records per pair, newest last; dead records stay for audit
    by_pair: HashMap<PairKey, Vec<OtpRecord>>,
    /// Record id -> owning pair, for id-addressed mutations
    index: HashMap<Uuid, PairKey>,
}

impl LedgerState {
    fn record_mut(&mut self, record_id: Uuid) -> Option<&mut OtpRecord> {
        let key = self.index.get(&record_id)?;
        self.by_pair
            .get_mut(key)?
            .iter_mut()
            .find(|r| r.id == record_id)
    }
}

/// In-memory ledger keyed by `(email, purpose)`
///
/// All mutations run under one write lock, which is what makes issuance
/// (supersede-then-insert) and consumption (compare-and-set) atomic
/// with respect to concurrent callers. Expiry is evaluated lazily at
/// read time; [`InMemoryOtpLedger::prune_dead`] is advisory cleanup
/// only and plays no part in correctness.
pub struct InMemoryOtpLedger {
    generator: CodeGenerator,
    state: RwLock<LedgerState>,
}

impl InMemoryOtpLedger {
    pub fn new() -> Self {
        Self {
            generator: CodeGenerator::new(),
            state: RwLock::new(LedgerState::default()),
        }
    }

    /// Drop records that are both expired and dead
    ///
    /// Returns the number of records removed. Callers that want an
    /// audit trail simply never call this.
    pub async fn prune_dead(&self) -> usize {
        let mut state = self.state.write().await;
        let mut removed = 0;

        for records in state.by_pair.values_mut() {
            let before = records.len();
            records.retain(|r| r.is_live() || !r.is_expired());
            removed += before - records.len();
        }
        let by_pair = std::mem::take(&mut state.by_pair);
        let by_pair: HashMap<PairKey, Vec<OtpRecord>> =
            by_pair.into_iter().filter(|(_, v)| !v.is_empty()).collect();
        state.index = by_pair
            .values()
            .flatten()
            .map(|r| (r.id, (r.email.clone(), r.purpose)))
            .collect();
        state.by_pair = by_pair;

        tracing::debug!(removed, event = "ledger_pruned", "Pruned dead OTP records");
        removed
    }

    /// Total number of records held, live or dead (test helper)
    pub async fn record_count(&self) -> usize {
        let state = self.state.read().await;
        state.by_pair.values().map(Vec::len).sum()
    }

    /// Issue a code with a custom validity window in minutes
    ///
    /// The trait method pins the window to 15 minutes; tests and demos
    /// use this to exercise expiry without waiting.
    pub async fn issue_with_expiration(
        &self,
        email: &str,
        purpose: OtpPurpose,
        expiration_minutes: i64,
    ) -> Result<OtpRecord, DomainError> {
        let record = OtpRecord::new_with_expiration(
            email,
            purpose,
            self.generator.generate(),
            expiration_minutes,
        );
        let key: PairKey = (record.email.clone(), purpose);

        let mut state = self.state.write().await;
        let records = state.by_pair.entry(key.clone()).or_default();
        for existing in records.iter_mut().filter(|r| r.is_live()) {
            existing.supersede();
        }
        records.push(record.clone());
        state.index.insert(record.id, key);
        Ok(record)
    }
}

impl Default for InMemoryOtpLedger {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl OtpLedger for InMemoryOtpLedger {
    async fn issue(&self, email: &str, purpose: OtpPurpose) -> Result<OtpRecord, DomainError> {
        let record = OtpRecord::new(email, purpose, self.generator.generate());
        let key: PairKey = (record.email.clone(), purpose);

        let mut state = self.state.write().await;
        let records = state.by_pair.entry(key.clone()).or_default();
        for existing in records.iter_mut().filter(|r| r.is_live()) {
            existing.supersede();
            tracing::info!(
                record_id = %existing.id,
                purpose = %purpose,
                event = "otp_superseded",
                "Superseded previous live code"
            );
        }
        records.push(record.clone());
        state.index.insert(record.id, key);

        tracing::info!(
            record_id = %record.id,
            purpose = %purpose,
            event = "otp_issued",
            "Issued new one-time code"
        );

        Ok(record)
    }

    async fn find_live(
        &self,
        email: &str,
        purpose: OtpPurpose,
    ) -> Result<Option<OtpRecord>, DomainError> {
        let key: PairKey = (normalize_email(email), purpose);
        let state = self.state.read().await;
        Ok(state
            .by_pair
            .get(&key)
            .and_then(|records| records.iter().find(|r| r.is_live()).cloned()))
    }

    async fn record_attempt(&self, record_id: Uuid, success: bool) -> Result<(), DomainError> {
        if success {
            return Ok(());
        }
        let mut state = self.state.write().await;
        if let Some(record) = state.record_mut(record_id) {
            record.record_failed_attempt();
            if record.is_attempts_exhausted() {
                tracing::warn!(
                    record_id = %record_id,
                    event = "otp_attempts_exhausted",
                    "Attempt ceiling reached; code is dead"
                );
            }
        }
        Ok(())
    }

    async fn mark_verified(
        &self,
        record_id: Uuid,
    ) -> Result<Option<DateTime<Utc>>, DomainError> {
        let mut state = self.state.write().await;
        Ok(state.record_mut(record_id).and_then(|record| {
            record.mark_verified();
            record.verified_at
        }))
    }

    async fn consume(&self, record_id: Uuid) -> Result<ConsumeOutcome, DomainError> {
        let mut state = self.state.write().await;
        match state.record_mut(record_id) {
            // The check-then-set runs entirely under the write guard,
            // so exactly one caller can ever observe `Consumed`.
            Some(record) => {
                if record.consume() {
                    tracing::info!(
                        record_id = %record_id,
                        event = "otp_consumed",
                        "One-time code consumed"
                    );
                    Ok(ConsumeOutcome::Consumed)
                } else {
                    Ok(ConsumeOutcome::AlreadyConsumed)
                }
            }
            None => Ok(ConsumeOutcome::AlreadyConsumed),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::otp::MAX_ATTEMPTS;

    #[tokio::test]
    async fn test_find_live_absent_for_unknown_pair() {
        let ledger = InMemoryOtpLedger::new();
        let found = ledger
            .find_live("nobody@example.com", OtpPurpose::PasswordReset)
            .await
            .unwrap();
        assert!(found.is_none());
    }

    #[tokio::test]
    async fn test_issue_creates_single_live_record() {
        let ledger = InMemoryOtpLedger::new();
        let record = ledger
            .issue("User@Example.com", OtpPurpose::PasswordReset)
            .await
            .unwrap();

        assert_eq!(record.email, "user@example.com");

        let live = ledger
            .find_live("user@example.com", OtpPurpose::PasswordReset)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(live.id, record.id);
    }

    #[tokio::test]
    async fn test_reissue_supersedes_previous_record() {
        let ledger = InMemoryOtpLedger::new();
        let first = ledger
            .issue("user@example.com", OtpPurpose::PasswordReset)
            .await
            .unwrap();
        let second = ledger
            .issue("user@example.com", OtpPurpose::PasswordReset)
            .await
            .unwrap();

        let live = ledger
            .find_live("user@example.com", OtpPurpose::PasswordReset)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(live.id, second.id, "only the newest record is live");

        // Superseded record is retained for audit, not deleted
        assert_eq!(ledger.record_count().await, 2);
        assert_ne!(first.id, second.id);
    }

    #[tokio::test]
    async fn test_purposes_do_not_interfere() {
        let ledger = InMemoryOtpLedger::new();
        let reset = ledger
            .issue("user@example.com", OtpPurpose::PasswordReset)
            .await
            .unwrap();
        let registration = ledger
            .issue("user@example.com", OtpPurpose::Registration)
            .await
            .unwrap();

        let live_reset = ledger
            .find_live("user@example.com", OtpPurpose::PasswordReset)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(live_reset.id, reset.id);

        let live_registration = ledger
            .find_live("user@example.com", OtpPurpose::Registration)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(live_registration.id, registration.id);
    }

    #[tokio::test]
    async fn test_consume_is_exactly_once() {
        let ledger = InMemoryOtpLedger::new();
        let record = ledger
            .issue("user@example.com", OtpPurpose::PasswordReset)
            .await
            .unwrap();

        assert_eq!(
            ledger.consume(record.id).await.unwrap(),
            ConsumeOutcome::Consumed
        );
        assert_eq!(
            ledger.consume(record.id).await.unwrap(),
            ConsumeOutcome::AlreadyConsumed
        );

        let live = ledger
            .find_live("user@example.com", OtpPurpose::PasswordReset)
            .await
            .unwrap();
        assert!(live.is_none(), "consumed record is no longer live");
    }

    #[tokio::test]
    async fn test_consume_unknown_record_reports_already_consumed() {
        let ledger = InMemoryOtpLedger::new();
        assert_eq!(
            ledger.consume(Uuid::new_v4()).await.unwrap(),
            ConsumeOutcome::AlreadyConsumed
        );
    }

    #[tokio::test]
    async fn test_failed_attempts_exhaust_record() {
        let ledger = InMemoryOtpLedger::new();
        let record = ledger
            .issue("user@example.com", OtpPurpose::PasswordReset)
            .await
            .unwrap();

        for _ in 0..MAX_ATTEMPTS {
            ledger.record_attempt(record.id, false).await.unwrap();
        }

        let live = ledger
            .find_live("user@example.com", OtpPurpose::PasswordReset)
            .await
            .unwrap();
        assert!(live.is_none(), "exhausted record is dead even if unexpired");
    }

    #[tokio::test]
    async fn test_successful_attempt_leaves_counter_unchanged() {
        let ledger = InMemoryOtpLedger::new();
        let record = ledger
            .issue("user@example.com", OtpPurpose::PasswordReset)
            .await
            .unwrap();

        ledger.record_attempt(record.id, true).await.unwrap();

        let live = ledger
            .find_live("user@example.com", OtpPurpose::PasswordReset)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(live.attempt_count, 0);
    }

    #[tokio::test]
    async fn test_mark_verified_is_idempotent() {
        let ledger = InMemoryOtpLedger::new();
        let record = ledger
            .issue("user@example.com", OtpPurpose::PasswordReset)
            .await
            .unwrap();

        let first = ledger.mark_verified(record.id).await.unwrap();
        assert!(first.is_some());
        let second = ledger.mark_verified(record.id).await.unwrap();
        assert_eq!(first, second);

        // Verification does not consume
        let live = ledger
            .find_live("user@example.com", OtpPurpose::PasswordReset)
            .await
            .unwrap();
        assert!(live.is_some());
    }

    #[tokio::test]
    async fn test_mark_verified_after_consume_reports_none() {
        let ledger = InMemoryOtpLedger::new();
        let record = ledger
            .issue("user@example.com", OtpPurpose::PasswordReset)
            .await
            .unwrap();

        ledger.consume(record.id).await.unwrap();
        let verified = ledger.mark_verified(record.id).await.unwrap();
        assert!(verified.is_none());
    }

    #[tokio::test]
    async fn test_concurrent_issue_leaves_one_live_record() {
        use std::sync::Arc;

        let ledger = Arc::new(InMemoryOtpLedger::new());
        let mut handles = Vec::new();
        for _ in 0..8 {
            let ledger = ledger.clone();
            handles.push(tokio::spawn(async move {
                ledger
                    .issue("user@example.com", OtpPurpose::PasswordReset)
                    .await
                    .unwrap()
            }));
        }
        for handle in handles {
            handle.await.unwrap();
        }

        let state = ledger.state.read().await;
        let records = state
            .by_pair
            .get(&("user@example.com".to_string(), OtpPurpose::PasswordReset))
            .unwrap();
        let live = records.iter().filter(|r| r.is_live()).count();
        assert_eq!(live, 1);
        assert_eq!(records.len(), 8);
    }

    #[tokio::test]
    async fn test_prune_dead_keeps_live_and_unexpired() {
        let ledger = InMemoryOtpLedger::new();
        ledger
            .issue("user@example.com", OtpPurpose::PasswordReset)
            .await
            .unwrap();
        ledger
            .issue("user@example.com", OtpPurpose::PasswordReset)
            .await
            .unwrap();

        // Superseded record is dead but not expired; prune keeps it
        assert_eq!(ledger.prune_dead().await, 0);
        assert_eq!(ledger.record_count().await, 2);
    }
}
