//! Main verification service implementation

use chrono::{Datelike, Utc};
use constant_time_eq::constant_time_eq;
use std::sync::Arc;
use std::time::Duration;

use vm_shared::email::{is_blank, mask_email, normalize_email};

use crate::errors::{DomainError, DomainResult, ValidationError};

use super::code_generator::{CodeGenerator, RandomCodeGenerator};
use super::config::VerificationServiceConfig;
use super::message::render_verification_email;
use super::traits::{EmailSenderTrait, VerificationStoreTrait};
use super::types::{
    EmailMessage, SaveVerificationCodeRequest, SendVerificationCodeRequest, VerificationResult,
    VerifyEmailRequest, EMAIL_REQUIRED_MESSAGE, INVALID_OR_EXPIRED_MESSAGE, SEND_FAILED_PREFIX,
    VERIFY_FIELDS_REQUIRED_MESSAGE,
};

/// Verification service for issuing and checking email verification codes
pub struct VerificationService<E: EmailSenderTrait, S: VerificationStoreTrait> {
    /// Email provider used to deliver codes
    email_sender: Arc<E>,
    /// Store holding pending codes
    store: Arc<S>,
    /// Source of new codes
    code_generator: Arc<dyn CodeGenerator>,
    /// Service configuration
    config: VerificationServiceConfig,
}

impl<E: EmailSenderTrait, S: VerificationStoreTrait> VerificationService<E, S> {
    /// Create a new verification service
    ///
    /// # Arguments
    ///
    /// * `email_sender` - Email provider implementation
    /// * `store` - Verification store shared with other handles
    /// * `config` - Service configuration
    pub fn new(email_sender: Arc<E>, store: Arc<S>, config: VerificationServiceConfig) -> Self {
        Self {
            email_sender,
            store,
            code_generator: Arc::new(RandomCodeGenerator),
            config,
        }
    }

    /// Replace the code generator
    pub fn with_code_generator(mut self, code_generator: Arc<dyn CodeGenerator>) -> Self {
        self.code_generator = code_generator;
        self
    }

    /// Service configuration
    pub fn config(&self) -> &VerificationServiceConfig {
        &self.config
    }

    /// Send a verification code to an email address
    ///
    /// This method:
    /// 1. Rejects a missing or blank address without contacting the provider
    /// 2. Generates a new code and renders the email
    /// 3. Hands the email to the provider
    /// 4. Stores the code under the lower-cased address once the provider accepted it
    ///
    /// Every failure is logged and reported in the returned result; nothing
    /// is stored when the provider rejects the message.
    pub async fn send_verification_code(
        &self,
        request: &SendVerificationCodeRequest,
    ) -> VerificationResult {
        let email = match request.email.as_deref() {
            Some(email) if !is_blank(Some(email)) => email,
            _ => {
                tracing::warn!(
                    event = "send_rejected",
                    "Verification code requested without an email address"
                );
                return VerificationResult::failure(EMAIL_REQUIRED_MESSAGE);
            }
        };

        match self.issue_code(email).await {
            Ok(message_id) => {
                tracing::info!(
                    email = %mask_email(email),
                    message_id = %message_id,
                    event = "code_sent",
                    "Verification code sent"
                );
                VerificationResult::success()
            }
            Err(e) => {
                tracing::error!(
                    email = %mask_email(email),
                    error = %e,
                    event = "code_send_failed",
                    "Failed to send verification code"
                );
                VerificationResult::failure(format!("{}: {}", SEND_FAILED_PREFIX, e))
            }
        }
    }

    /// Store a code for an email address without sending anything
    pub async fn save_verification_code(
        &self,
        request: &SaveVerificationCodeRequest,
    ) -> DomainResult<()> {
        if is_blank(Some(request.email.as_str())) {
            return Err(ValidationError::RequiredField {
                field: "email".to_string(),
            }
            .into());
        }
        if is_blank(Some(request.code.as_str())) {
            return Err(ValidationError::RequiredField {
                field: "code".to_string(),
            }
            .into());
        }

        self.store_code(&request.email, &request.code, request.expiration)
            .await
    }

    /// Verify a submitted code
    ///
    /// A matching code is consumed, so it verifies at most once. A missing
    /// entry, an expired entry and a wrong code all produce the same failure.
    pub async fn verify_code(&self, request: &VerifyEmailRequest) -> VerificationResult {
        if is_blank(Some(request.email.as_str())) || is_blank(Some(request.code.as_str())) {
            return VerificationResult::failure(VERIFY_FIELDS_REQUIRED_MESSAGE);
        }

        let key = normalize_email(&request.email);

        match self.check_and_consume(&key, &request.code).await {
            Ok(true) => {
                tracing::info!(
                    email = %mask_email(&key),
                    event = "code_verified",
                    "Verification code successfully verified"
                );
                VerificationResult::success()
            }
            Ok(false) => {
                tracing::warn!(
                    email = %mask_email(&key),
                    event = "code_rejected",
                    "Verification code is invalid or expired"
                );
                VerificationResult::failure(INVALID_OR_EXPIRED_MESSAGE)
            }
            Err(e) => {
                tracing::error!(
                    email = %mask_email(&key),
                    error = %e,
                    event = "code_verification_error",
                    "System error during code verification"
                );
                VerificationResult::failure(INVALID_OR_EXPIRED_MESSAGE)
            }
        }
    }

    async fn issue_code(&self, email: &str) -> DomainResult<String> {
        let code = self.code_generator.generate();
        let content = render_verification_email(
            &self.config.brand_name,
            &self.config.verify_url,
            email,
            &code,
            Utc::now().year(),
        );

        let message = EmailMessage {
            sender_address: self.config.sender_address.clone(),
            recipient: email.to_string(),
            subject: content.subject,
            plain_text: content.plain_text,
            html: content.html,
        };

        let message_id = self
            .email_sender
            .send_email(&message)
            .await
            .map_err(|e| DomainError::Delivery { message: e })?;

        self.store_code(email, &code, self.config.code_ttl).await?;

        Ok(message_id)
    }

    async fn store_code(&self, email: &str, code: &str, ttl: Duration) -> DomainResult<()> {
        let key = normalize_email(email);

        self.store
            .set(&key, code, ttl)
            .await
            .map_err(|e| DomainError::Store { message: e })?;

        tracing::debug!(
            email = %mask_email(&key),
            ttl_secs = ttl.as_secs(),
            "Stored verification code"
        );

        Ok(())
    }

    async fn check_and_consume(&self, key: &str, code: &str) -> DomainResult<bool> {
        let stored = self
            .store
            .try_get(key)
            .await
            .map_err(|e| DomainError::Store { message: e })?;

        match stored {
            Some(stored) if constant_time_eq(stored.as_bytes(), code.as_bytes()) => self
                .store
                .consume(key, code)
                .await
                .map_err(|e| DomainError::Store { message: e }),
            _ => Ok(false),
        }
    }
}
