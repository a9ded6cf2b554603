//! Configuration module with business-specific sub-modules
//!
//! This module organizes configuration into logical areas:
//! - `cache` - Verification store backend and Redis configuration
//! - `email` - Email provider and sender address
//! - `environment` - Environment detection and logging configuration
//! - `server` - HTTP server and CORS configuration
//! - `verification` - Code lifetime and message settings

pub mod cache;
pub mod email;
pub mod environment;
pub mod server;
pub mod verification;

use serde::{Deserialize, Serialize};

// Re-export commonly used types
pub use cache::{CacheConfig, CacheType};
pub use email::{EmailConfig, EmailProvider, SmtpConfig};
pub use environment::{Environment, LogFormat, LoggingConfig};
pub use server::{CorsConfig, ServerConfig};
pub use verification::VerificationConfig;

/// Complete application configuration combining all sub-configurations
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AppConfig {
    /// Environment configuration
    pub environment: Environment,

    /// Server configuration
    pub server: ServerConfig,

    /// CORS configuration
    #[serde(default)]
    pub cors: CorsConfig,

    /// Email delivery configuration
    pub email: EmailConfig,

    /// Verification store configuration
    pub cache: CacheConfig,

    /// Verification code configuration
    pub verification: VerificationConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::development()
    }
}

impl AppConfig {
    /// Create configuration for development environment
    pub fn development() -> Self {
        Self {
            environment: Environment::Development,
            server: ServerConfig::default(),
            cors: CorsConfig::development(),
            email: EmailConfig::default(),
            cache: CacheConfig::default(),
            verification: VerificationConfig::default(),
            logging: LoggingConfig::for_environment(Environment::Development),
        }
    }

    /// Create configuration for production environment
    pub fn production() -> Self {
        Self {
            environment: Environment::Production,
            server: ServerConfig::new("0.0.0.0", 8080),
            cors: CorsConfig::default(),
            email: EmailConfig {
                provider: EmailProvider::Smtp,
                sender_address: String::new(),
                ..Default::default()
            },
            cache: CacheConfig::default(),
            verification: VerificationConfig::default(),
            logging: LoggingConfig::for_environment(Environment::Production),
        }
    }

    /// Load configuration from environment variables on top of the environment preset
    pub fn from_env() -> Self {
        let environment = Environment::from_env();
        let preset = match environment {
            Environment::Production => Self::production(),
            Environment::Development | Environment::Staging => Self::development(),
        };

        Self {
            environment,
            server: ServerConfig::from_env(),
            cors: CorsConfig::from_env(preset.cors),
            email: EmailConfig::from_env(),
            cache: CacheConfig::from_env(),
            verification: VerificationConfig::from_env(),
            logging: LoggingConfig::from_env(environment),
        }
    }

    /// Check settings that would make the service unusable
    pub fn validate(&self) -> Result<(), String> {
        if self.email.sender_address.trim().is_empty() {
            return Err("EMAIL_SENDER_ADDRESS must be set".to_string());
        }
        if self.environment.is_production() && self.email.provider == EmailProvider::Mock {
            return Err("The mock email provider cannot be used in production".to_string());
        }
        if self.email.provider == EmailProvider::Smtp && self.email.smtp.host.trim().is_empty() {
            return Err("SMTP_HOST must be set when EMAIL_PROVIDER is smtp".to_string());
        }
        if self.verification.verify_url.trim().is_empty() {
            return Err("VERIFICATION_URL must be set".to_string());
        }
        Ok(())
    }
}
