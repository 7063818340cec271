//! # Recovery Core
//!
//! Core business logic and domain layer for the credential recovery
//! backend. This crate contains the OTP ledger, the verification and
//! recovery services, repository interfaces and error types. It has no
//! dependency on any web framework; the `recovery_api` crate provides
//! the HTTP surface.

pub mod domain;
pub mod errors;
pub mod repositories;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::*;
pub use errors::*;
pub use repositories::*;
pub use services::*;
