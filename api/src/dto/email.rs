use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::{Validate, ValidationError};

use vm_core::services::verification::{SendVerificationCodeRequest, VerifyEmailRequest};

/// Body of `POST /api/emails/send`
///
/// Field names also bind in PascalCase (`Email`).
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema, Validate)]
pub struct SendEmailCodeRequest {
    /// Recipient address
    #[serde(alias = "Email")]
    #[schema(example = "user@example.com")]
    #[validate(required, email)]
    pub email: Option<String>,
}

/// Body of `POST /api/emails/verify`
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema, Validate)]
pub struct VerifyEmailCodeRequest {
    #[serde(alias = "Email")]
    #[schema(example = "user@example.com")]
    #[validate(required, custom(function = "not_blank"))]
    pub email: Option<String>,

    /// Code from the verification email
    #[serde(alias = "Code")]
    #[schema(example = "482913")]
    #[validate(required, custom(function = "not_blank"))]
    pub code: Option<String>,
}

fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank"));
    }
    Ok(())
}

impl From<SendEmailCodeRequest> for SendVerificationCodeRequest {
    fn from(request: SendEmailCodeRequest) -> Self {
        Self {
            email: request.email,
        }
    }
}

impl From<VerifyEmailCodeRequest> for VerifyEmailRequest {
    fn from(request: VerifyEmailCodeRequest) -> Self {
        Self {
            email: request.email.unwrap_or_default(),
            code: request.code.unwrap_or_default(),
        }
    }
}
