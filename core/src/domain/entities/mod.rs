//! Domain entities

pub mod otp;
pub mod user;
