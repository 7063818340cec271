//! Types for verification service results

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::entities::otp::OtpPurpose;

/// Successful verification descriptor
///
/// This is the entire success payload: for password-reset verifications
/// it deliberately carries no account profile data, only the facts the
/// front-end needs to proceed to the reset step.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VerifiedCode {
    /// Normalized email the code was verified for
    pub email: String,

    /// Workflow the code is scoped to
    pub purpose: OtpPurpose,

    /// Always `true` on the success path
    pub verified: bool,

    /// Timestamp of the first successful verification
    pub verified_at: DateTime<Utc>,
}
