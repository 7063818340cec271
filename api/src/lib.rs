//! HTTP surface for the credential recovery backend.
//!
//! Thin routing layer over `recovery_core`: DTOs (including the
//! legacy-field compatibility shim on the reset payload), error-to-HTTP
//! mapping, and the actix-web application factory.

pub mod app;
pub mod dto;
pub mod handlers;
pub mod notification;
pub mod routes;
