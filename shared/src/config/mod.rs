//! Configuration types shared by the server binaries

pub mod server;

pub use server::ServerConfig;
