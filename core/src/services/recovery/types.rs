//! Types for recovery service requests and results

/// Reset request as received from the transport layer
///
/// The two password fields mirror the wire contract: `new_password` is
/// the canonical `newPassword` field, `new_password_legacy` the
/// legacy-named `new_password` field. The service resolves precedence
/// through the compatibility shim.
#[derive(Debug, Clone, Default)]
pub struct ResetRequest {
    pub email: String,
    pub code: String,
    pub new_password: Option<String>,
    pub new_password_legacy: Option<String>,
}

/// Result of requesting a recovery code
#[derive(Debug, Clone)]
pub struct RequestCodeResult {
    /// Human-readable confirmation; never contains the code
    pub message: String,

    /// Whether the notification channel accepted the delivery
    ///
    /// `false` means delivery failed; the code is still valid, since
    /// the channel is best-effort.
    pub delivered: bool,
}

/// Result of a successful password reset
#[derive(Debug, Clone)]
pub struct ResetOutcome {
    /// Human-readable confirmation; never contains password or code
    pub message: String,
}
