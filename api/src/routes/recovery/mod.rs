//! Recovery route handlers

pub mod forgot_password;
pub mod reset_password;
pub mod verify_otp;

use std::sync::Arc;

use recovery_core::repositories::{AccountDirectory, OtpLedger};
use recovery_core::services::recovery::{NotificationChannel, PasswordHasher, RecoveryService};
use recovery_core::services::verification::VerificationService;

pub use forgot_password::forgot_password;
pub use reset_password::reset_password;
pub use verify_otp::verify_otp;

/// Application state holding the shared services
pub struct AppState<L, A, N, H>
where
    L: OtpLedger,
    A: AccountDirectory,
    N: NotificationChannel,
    H: PasswordHasher,
{
    pub recovery_service: Arc<RecoveryService<L, A, N, H>>,
    pub verification_service: Arc<VerificationService<L>>,
}
