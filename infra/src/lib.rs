//! # Infrastructure Layer
//!
//! This crate implements the infrastructure layer for Verimail. It provides
//! concrete implementations of the collaborators the verification service
//! depends on.
//!
//! ## Architecture
//!
//! The infrastructure layer contains:
//! - **Cache**: verification stores (in-memory, Redis)
//! - **Email**: email senders (SMTP, mock)
//!
//! ## Features
//!
//! - `redis-cache`: Enable the Redis verification store (default)
//! - `smtp-email`: Enable SMTP delivery through lettre (default)

/// Cache module - verification code stores
pub mod cache;

/// Email module - email delivery providers
pub mod email;

pub use cache::{create_verification_store, InMemoryVerificationStore};
#[cfg(feature = "redis-cache")]
pub use cache::RedisVerificationStore;
pub use email::{create_email_sender, MockEmailService};
#[cfg(feature = "smtp-email")]
pub use email::SmtpEmailService;

/// Infrastructure-specific error types
#[derive(Debug, thiserror::Error)]
pub enum InfrastructureError {
    /// Redis cache error
    #[cfg(feature = "redis-cache")]
    #[error("Cache error: {0}")]
    Cache(#[from] redis::RedisError),

    /// Email service error
    #[error("Email service error: {0}")]
    Email(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}
