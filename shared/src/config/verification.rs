//! Verification code policy and message configuration

use serde::{Deserialize, Serialize};

/// Default lifetime of an issued code (5 minutes)
pub const DEFAULT_CODE_TTL_SECS: u64 = 300;

/// Verification code configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct VerificationConfig {
    /// Seconds an issued code stays valid
    #[serde(default = "default_code_ttl")]
    pub code_ttl_secs: u64,

    /// Page the emailed link points to; `email` and `code` are appended as query parameters
    pub verify_url: String,

    /// Name used in the greeting, signature and footer of the email
    pub brand_name: String,
}

impl Default for VerificationConfig {
    fn default() -> Self {
        Self {
            code_ttl_secs: default_code_ttl(),
            verify_url: String::from("https://ventixe.com/verify-email"),
            brand_name: String::from("Ventixe"),
        }
    }
}

impl VerificationConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            code_ttl_secs: std::env::var("VERIFICATION_CODE_TTL_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .filter(|ttl| *ttl > 0)
                .unwrap_or(defaults.code_ttl_secs),
            verify_url: std::env::var("VERIFICATION_URL").unwrap_or(defaults.verify_url),
            brand_name: std::env::var("VERIFICATION_BRAND_NAME").unwrap_or(defaults.brand_name),
        }
    }

    /// Code lifetime as a std duration
    pub fn code_ttl(&self) -> std::time::Duration {
        std::time::Duration::from_secs(self.code_ttl_secs)
    }
}

fn default_code_ttl() -> u64 {
    DEFAULT_CODE_TTL_SECS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_ttl_is_five_minutes() {
        let config = VerificationConfig::default();
        assert_eq!(config.code_ttl(), std::time::Duration::from_secs(5 * 60));
    }
}
