//! Request, message and result types for the verification service

use serde::{Deserialize, Serialize};
use std::time::Duration;
use utoipa::ToSchema;

/// Failure message when a send request carries no address
pub const EMAIL_REQUIRED_MESSAGE: &str =
    "E-mail address is required, in order to send verification code.";

/// Failure message when a verify request is missing a field
pub const VERIFY_FIELDS_REQUIRED_MESSAGE: &str =
    "E-mail address and verification code are required.";

/// Failure message for any unsuccessful verification
pub const INVALID_OR_EXPIRED_MESSAGE: &str = "Verification code is invalid or expired.";

/// Prefix of the failure message returned when sending fails
pub const SEND_FAILED_PREFIX: &str = "An error occurred while sending the verification code";

/// Request to issue a code to an address
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SendVerificationCodeRequest {
    /// Recipient address; `None` models an absent field
    pub email: Option<String>,
}

impl SendVerificationCodeRequest {
    pub fn new(email: impl Into<String>) -> Self {
        Self {
            email: Some(email.into()),
        }
    }
}

/// Request to check a submitted code
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct VerifyEmailRequest {
    pub email: String,
    pub code: String,
}

impl VerifyEmailRequest {
    pub fn new(email: impl Into<String>, code: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            code: code.into(),
        }
    }
}

/// Request to store a code directly, bypassing delivery
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SaveVerificationCodeRequest {
    pub email: String,
    pub code: String,
    /// How long the code remains valid
    pub expiration: Duration,
}

/// A fully rendered email handed to the email sender
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmailMessage {
    /// Address the message is sent from
    pub sender_address: String,
    /// Single recipient address
    pub recipient: String,
    pub subject: String,
    pub plain_text: String,
    pub html: String,
}

/// Outcome of a send or verify operation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct VerificationResult {
    /// Whether the operation succeeded
    pub succeeded: bool,
    /// Human-readable reason when it did not
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl VerificationResult {
    pub fn success() -> Self {
        Self {
            succeeded: true,
            error: None,
        }
    }

    pub fn failure(error: impl Into<String>) -> Self {
        Self {
            succeeded: false,
            error: Some(error.into()),
        }
    }
}
