//! Domain layer: entities owned by the recovery core

pub mod code_generator;
pub mod entities;

pub use code_generator::CodeGenerator;
pub use entities::otp::{OtpPurpose, OtpRecord, CODE_LENGTH, DEFAULT_EXPIRATION_MINUTES, MAX_ATTEMPTS};
pub use entities::user::User;
