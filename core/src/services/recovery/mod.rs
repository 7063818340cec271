//! Recovery service: code issuance and exactly-once password reset.
//!
//! Issuance looks the account up, supersedes any pending code for the
//! pair, and hands the fresh code to the notification channel. Reset
//! validates the presented code, consumes it through the ledger's
//! compare-and-set, and writes the new credential to the account
//! directory.

mod compat;
mod config;
mod hasher;
mod service;
mod traits;
mod types;


pub use compat::resolve_new_password;
pub use config::RecoveryServiceConfig;
pub use hasher::BcryptPasswordHasher;
pub use service::RecoveryService;
pub use traits::{NotificationChannel, PasswordHasher};
pub use types::{RequestCodeResult, ResetOutcome, ResetRequest};
