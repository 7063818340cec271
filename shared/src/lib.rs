//! Shared utilities and common types for the recovery backend
//!
//! This crate provides functionality used across the server modules:
//! - API response wrappers and error structures
//! - Server configuration types

pub mod config;
pub mod types;

// Re-export commonly used items at crate root
pub use config::ServerConfig;
pub use types::{ApiResponse, ErrorResponse, HealthResponse};
