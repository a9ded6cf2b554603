//! Verification service module for email-based verification codes
//!
//! This module provides the complete verification code workflow:
//! - Code generation and email rendering
//! - Delivery through an email provider
//! - Time-limited storage of pending codes
//! - Single-use code verification

mod code_generator;
mod config;
mod message;
mod service;
mod traits;
mod types;

#[cfg(test)]
mod tests;

pub use code_generator::{CodeGenerator, RandomCodeGenerator};
pub use config::VerificationServiceConfig;
pub use message::{render_verification_email, verification_link, EmailContent};
pub use service::VerificationService;
pub use traits::{EmailSenderTrait, VerificationStoreTrait};
pub use types::{
    EmailMessage, SaveVerificationCodeRequest, SendVerificationCodeRequest, VerificationResult,
    VerifyEmailRequest, EMAIL_REQUIRED_MESSAGE, INVALID_OR_EXPIRED_MESSAGE, SEND_FAILED_PREFIX,
    VERIFY_FIELDS_REQUIRED_MESSAGE,
};
