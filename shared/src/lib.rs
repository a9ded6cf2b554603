//! Shared utilities and common types for the Verimail server
//!
//! This crate provides common functionality used across all server modules:
//! - Configuration types
//! - Error response structure
//! - Email address utilities (normalization, masking, validation)

pub mod config;
pub mod errors;
pub mod utils;

// Re-export commonly used items at crate root
pub use config::{
    AppConfig, CacheConfig, CacheType, CorsConfig, EmailConfig, EmailProvider, Environment,
    LogFormat, LoggingConfig, ServerConfig, SmtpConfig, VerificationConfig,
};
pub use errors::{error_codes, ErrorResponse};
pub use utils::email;
