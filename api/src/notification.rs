//! Notification channel implementations.

use async_trait::async_trait;

use recovery_core::services::mask_email;
use recovery_core::services::recovery::NotificationChannel;

/// Channel that accepts deliveries without sending anything
///
/// Stand-in for local development until a mail provider is wired in.
/// Logs the delivery attempt with a masked address; the code itself is
/// never written to any log.
pub struct DiscardingNotificationChannel;

#[async_trait]
impl NotificationChannel for DiscardingNotificationChannel {
    async fn send_code(&self, email: &str, _code: &str) -> Result<String, String> {
        log::info!(
            "Discarding notification for {} (no mail provider configured)",
            mask_email(email)
        );
        Ok(format!("discarded-{}", chrono::Utc::now().timestamp_millis()))
    }
}
