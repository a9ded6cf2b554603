//! Verification entry entity for email-based verification.

use chrono::{DateTime, Duration, Utc};
use constant_time_eq::constant_time_eq;
use serde::{Deserialize, Serialize};
use vm_shared::email::normalize_email;

/// Length of the verification code
pub const CODE_LENGTH: usize = 6;

/// Smallest code the generator may produce
pub const MIN_CODE: u32 = 100_000;

/// Largest code the generator may produce
pub const MAX_CODE: u32 = 999_999;

/// Default expiration time for verification codes (5 minutes)
pub const DEFAULT_EXPIRATION_MINUTES: i64 = 5;

/// A pending verification code for one email address
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerificationEntry {
    /// Lower-cased email address, the lookup key
    pub email: String,

    /// The code that was sent
    pub code: String,

    /// Instant after which the entry no longer verifies
    pub expires_at: DateTime<Utc>,
}

impl VerificationEntry {
    /// Creates an entry that expires `ttl` after `now`
    ///
    /// The email is normalized, so entries built from differently-cased
    /// addresses share a key.
    pub fn new(email: &str, code: impl Into<String>, ttl: Duration, now: DateTime<Utc>) -> Self {
        Self {
            email: normalize_email(email),
            code: code.into(),
            expires_at: now + ttl,
        }
    }

    /// Whether the entry is expired at `now`; the expiry instant itself counts as expired
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        now >= self.expires_at
    }

    /// Constant-time comparison against a submitted code
    pub fn matches(&self, submitted: &str) -> bool {
        constant_time_eq(self.code.as_bytes(), submitted.as_bytes())
    }
}
