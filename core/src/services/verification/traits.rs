//! Traits for email delivery and verification store integration

use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;

use super::types::EmailMessage;

/// Trait for email provider integration
#[async_trait]
pub trait EmailSenderTrait: Send + Sync {
    /// Hand a message to the provider
    ///
    /// `Ok` means the provider accepted the message for delivery and carries
    /// the provider's message id; delivery itself is not confirmed.
    async fn send_email(&self, message: &EmailMessage) -> Result<String, String>;
}

/// Trait for the store holding pending codes
///
/// Keys are normalized email addresses. Implementations keep at most one
/// entry per key and never return an expired entry.
#[async_trait]
pub trait VerificationStoreTrait: Send + Sync {
    /// Insert or replace the code for an email, restarting its lifetime
    async fn set(&self, email: &str, code: &str, ttl: Duration) -> Result<(), String>;

    /// Current unexpired code for an email
    async fn try_get(&self, email: &str) -> Result<Option<String>, String>;

    /// Delete the entry for an email; absent keys are a no-op
    async fn remove(&self, email: &str) -> Result<(), String>;

    /// Atomically remove the entry only if it is unexpired and holds `code`
    ///
    /// Returns whether an entry was removed.
    async fn consume(&self, email: &str, code: &str) -> Result<bool, String>;
}

#[async_trait]
impl<T: EmailSenderTrait + ?Sized> EmailSenderTrait for Box<T> {
    async fn send_email(&self, message: &EmailMessage) -> Result<String, String> {
        (**self).send_email(message).await
    }
}

#[async_trait]
impl<T: EmailSenderTrait + ?Sized> EmailSenderTrait for Arc<T> {
    async fn send_email(&self, message: &EmailMessage) -> Result<String, String> {
        (**self).send_email(message).await
    }
}

#[async_trait]
impl<T: VerificationStoreTrait + ?Sized> VerificationStoreTrait for Box<T> {
    async fn set(&self, email: &str, code: &str, ttl: Duration) -> Result<(), String> {
        (**self).set(email, code, ttl).await
    }

    async fn try_get(&self, email: &str) -> Result<Option<String>, String> {
        (**self).try_get(email).await
    }

    async fn remove(&self, email: &str) -> Result<(), String> {
        (**self).remove(email).await
    }

    async fn consume(&self, email: &str, code: &str) -> Result<bool, String> {
        (**self).consume(email, code).await
    }
}

#[async_trait]
impl<T: VerificationStoreTrait + ?Sized> VerificationStoreTrait for Arc<T> {
    async fn set(&self, email: &str, code: &str, ttl: Duration) -> Result<(), String> {
        (**self).set(email, code, ttl).await
    }

    async fn try_get(&self, email: &str) -> Result<Option<String>, String> {
        (**self).try_get(email).await
    }

    async fn remove(&self, email: &str) -> Result<(), String> {
        (**self).remove(email).await
    }

    async fn consume(&self, email: &str, code: &str) -> Result<bool, String> {
        (**self).consume(email, code).await
    }
}
