//! Repository interfaces and in-memory implementations.
//!
//! Traits define the persistence seams (account directory, OTP ledger);
//! the in-memory implementations back single-instance deployments and
//! tests. A TTL-capable external store can implement the same traits
//! for multi-instance deployments.

pub mod account;
pub mod otp;

pub use account::{AccountDirectory, MockAccountDirectory};
pub use otp::{ConsumeOutcome, InMemoryOtpLedger, OtpLedger};
