//! Verification service: non-consuming code pre-check.
//!
//! Front-ends call this before collecting a new password so the user
//! learns early whether the code they typed is good. Verifying never
//! consumes the code and never touches account state.

mod service;
mod types;


pub use service::VerificationService;
pub use types::VerifiedCode;
