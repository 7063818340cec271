//! Business services: verification pre-check and credential recovery

pub mod email_utils;
pub mod recovery;
pub mod verification;

pub use email_utils::mask_email;
pub use recovery::{
    BcryptPasswordHasher, NotificationChannel, PasswordHasher, RecoveryService,
    RecoveryServiceConfig, RequestCodeResult, ResetOutcome, ResetRequest,
};
pub use verification::{VerificationService, VerifiedCode};
