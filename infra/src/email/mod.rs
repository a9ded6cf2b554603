//! Email Service Module
//!
//! This module provides email sender implementations for delivering
//! verification codes.
//!
//! ## Features
//!
//! - **Mock Implementation**: Console output for development
//! - **SMTP Support**: Delivery through an SMTP relay via lettre
//! - **Security**: Recipient masking in logs

pub mod mock_email;
#[cfg(feature = "smtp-email")]
pub mod smtp_email;

pub use mock_email::MockEmailService;
#[cfg(feature = "smtp-email")]
pub use smtp_email::SmtpEmailService;


use vm_core::services::verification::EmailSenderTrait;
use vm_shared::config::{EmailConfig, EmailProvider};

use crate::InfrastructureError;

/// Create an email sender based on configuration
///
/// Returns the implementation for the configured provider. A provider that
/// cannot be built is an error rather than a silent fallback to the mock.
pub fn create_email_sender(
    config: &EmailConfig,
) -> Result<Box<dyn EmailSenderTrait>, InfrastructureError> {
    match config.provider {
        EmailProvider::Mock => {
            tracing::warn!("Using mock email service, messages are printed instead of sent");
            Ok(Box::new(MockEmailService::new()))
        }
        #[cfg(feature = "smtp-email")]
        EmailProvider::Smtp => Ok(Box::new(SmtpEmailService::new(&config.smtp)?)),
        #[cfg(not(feature = "smtp-email"))]
        EmailProvider::Smtp => Err(InfrastructureError::Config(
            "SMTP provider requested but the smtp-email feature is disabled".to_string(),
        )),
    }
}
