//! Email delivery configuration

use serde::{Deserialize, Serialize};

/// Email provider selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EmailProvider {
    /// Deliver through an SMTP relay
    Smtp,
    /// Log messages instead of sending them
    Mock,
}

impl std::str::FromStr for EmailProvider {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "smtp" => Ok(EmailProvider::Smtp),
            "mock" => Ok(EmailProvider::Mock),
            _ => Err(format!("Unknown email provider: {}", s)),
        }
    }
}

impl std::fmt::Display for EmailProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EmailProvider::Smtp => write!(f, "smtp"),
            EmailProvider::Mock => write!(f, "mock"),
        }
    }
}

/// SMTP relay credentials
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SmtpConfig {
    /// Relay host name
    pub host: String,

    /// Relay port (STARTTLS)
    pub port: u16,

    /// Login user name
    pub username: String,

    /// Login password
    #[serde(default, skip_serializing)]
    pub password: String,
}

impl Default for SmtpConfig {
    fn default() -> Self {
        Self {
            host: String::from("localhost"),
            port: 587,
            username: String::new(),
            password: String::new(),
        }
    }
}

/// Email sender configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct EmailConfig {
    /// Which provider delivers messages
    pub provider: EmailProvider,

    /// Address verification emails are sent from
    pub sender_address: String,

    /// SMTP settings, used when `provider` is `smtp`
    #[serde(default)]
    pub smtp: SmtpConfig,
}

impl Default for EmailConfig {
    fn default() -> Self {
        Self {
            provider: EmailProvider::Mock,
            sender_address: String::from("DoNotReply@verimail.local"),
            smtp: SmtpConfig::default(),
        }
    }
}

impl EmailConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        let defaults = Self::default();
        let provider = std::env::var("EMAIL_PROVIDER")
            .ok()
            .and_then(|p| p.parse().ok())
            .unwrap_or(defaults.provider);

        Self {
            provider,
            sender_address: std::env::var("EMAIL_SENDER_ADDRESS")
                .unwrap_or(defaults.sender_address),
            smtp: SmtpConfig {
                host: std::env::var("SMTP_HOST").unwrap_or(defaults.smtp.host),
                port: std::env::var("SMTP_PORT")
                    .ok()
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(defaults.smtp.port),
                username: std::env::var("SMTP_USERNAME").unwrap_or_default(),
                password: std::env::var("SMTP_PASSWORD").unwrap_or_default(),
            },
        }
    }
}
