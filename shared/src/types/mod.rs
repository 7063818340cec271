//! Common type definitions shared between the core and api crates

pub mod response;

pub use response::{ApiResponse, ErrorResponse, HealthResponse};
