//! Shared utilities and common types for the LawVriksh server
//!
//! This crate provides common functionality used across all server modules:
//! - Configuration types loaded from the environment
//! - Response envelopes returned by the HTTP layer
//! - Utility functions (email normalization and masking)

pub mod config;
pub mod types;
pub mod utils;

// Re-export commonly used items at crate root
pub use config::{
    AppConfig, DatabaseConfig, Environment, LoggingConfig, MailConfig, OtpConfig, ServerConfig,
    StorageBackend,
};
pub use types::{HealthResponse, StatusResponse};
pub use utils::email;
