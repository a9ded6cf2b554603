//! Configuration for the verification service

use std::time::Duration;

use vm_shared::config::{EmailConfig, VerificationConfig};

use crate::domain::entities::verification_code::DEFAULT_EXPIRATION_MINUTES;

/// Configuration for the verification service
#[derive(Debug, Clone)]
pub struct VerificationServiceConfig {
    /// Address verification emails are sent from
    pub sender_address: String,
    /// How long an issued code stays valid
    pub code_ttl: Duration,
    /// Base URL of the verification page linked from the email
    pub verify_url: String,
    /// Name used in the email signature and footer
    pub brand_name: String,
}

impl Default for VerificationServiceConfig {
    fn default() -> Self {
        let defaults = VerificationConfig::default();
        Self {
            sender_address: EmailConfig::default().sender_address,
            code_ttl: Duration::from_secs(DEFAULT_EXPIRATION_MINUTES as u64 * 60),
            verify_url: defaults.verify_url,
            brand_name: defaults.brand_name,
        }
    }
}

impl VerificationServiceConfig {
    /// Assemble from the loaded application settings
    pub fn from_settings(email: &EmailConfig, verification: &VerificationConfig) -> Self {
        Self {
            sender_address: email.sender_address.clone(),
            code_ttl: verification.code_ttl(),
            verify_url: verification.verify_url.clone(),
            brand_name: verification.brand_name.clone(),
        }
    }

    /// Override the sender address
    pub fn with_sender_address(mut self, sender_address: impl Into<String>) -> Self {
        self.sender_address = sender_address.into();
        self
    }

    /// Override the code lifetime
    pub fn with_code_ttl(mut self, code_ttl: Duration) -> Self {
        self.code_ttl = code_ttl;
        self
    }
}
