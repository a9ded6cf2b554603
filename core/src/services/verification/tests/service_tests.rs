//! Unit tests for verification service

use std::sync::Arc;
use std::time::Duration;

use crate::domain::entities::verification_code::{CODE_LENGTH, MAX_CODE, MIN_CODE};
use crate::errors::{DomainError, ValidationError};
use crate::services::verification::{
    SaveVerificationCodeRequest, SendVerificationCodeRequest, VerificationService,
    VerificationServiceConfig, VerificationStoreTrait, VerifyEmailRequest, EMAIL_REQUIRED_MESSAGE,
    INVALID_OR_EXPIRED_MESSAGE, SEND_FAILED_PREFIX, VERIFY_FIELDS_REQUIRED_MESSAGE,
};

use super::mocks::{MockEmailSender, MockVerificationStore, SequenceCodeGenerator};

type TestService = VerificationService<MockEmailSender, MockVerificationStore>;

fn setup(
    sender_fails: bool,
    store_fails: bool,
) -> (TestService, Arc<MockEmailSender>, Arc<MockVerificationStore>) {
    let email_sender = Arc::new(MockEmailSender::new(sender_fails));
    let store = Arc::new(MockVerificationStore::new(store_fails));
    let config = VerificationServiceConfig::default()
        .with_sender_address("DoNotReply@test.local")
        .with_code_ttl(Duration::from_secs(300));

    let service = VerificationService::new(email_sender.clone(), store.clone(), config);
    (service, email_sender, store)
}

#[tokio::test]
async fn test_send_verification_code_success() {
    let (service, email_sender, store) = setup(false, false);

    let result = service
        .send_verification_code(&SendVerificationCodeRequest::new("user@example.com"))
        .await;
    assert!(result.succeeded);
    assert!(result.error.is_none());

    let message = email_sender.last_message().unwrap();
    assert_eq!(message.recipient, "user@example.com");
    assert_eq!(message.sender_address, "DoNotReply@test.local");

    let stored = store.entry("user@example.com").unwrap();
    assert_eq!(stored.len(), CODE_LENGTH);
    assert_eq!(message.subject, format!("Your code is {}", stored));
    assert!(message.plain_text.contains(&stored));
    assert!(message.html.contains(&stored));
}

#[tokio::test]
async fn test_generated_codes_are_six_digits_in_range() {
    let (service, _email_sender, store) = setup(false, false);

    for i in 0..50 {
        let email = format!("user{}@example.com", i);
        let result = service
            .send_verification_code(&SendVerificationCodeRequest::new(email.clone()))
            .await;
        assert!(result.succeeded);

        let code = store.entry(&email).unwrap();
        assert_eq!(code.len(), CODE_LENGTH);
        let value: u32 = code.parse().unwrap();
        assert!((MIN_CODE..=MAX_CODE).contains(&value));
    }
}

#[tokio::test]
async fn test_send_then_verify_succeeds_only_once() {
    let (service, _email_sender, store) = setup(false, false);
    let service = service.with_code_generator(Arc::new(SequenceCodeGenerator::fixed("482913")));

    let sent = service
        .send_verification_code(&SendVerificationCodeRequest::new("user@example.com"))
        .await;
    assert!(sent.succeeded);

    let first = service
        .verify_code(&VerifyEmailRequest::new("user@example.com", "482913"))
        .await;
    assert!(first.succeeded);
    assert!(store.entry("user@example.com").is_none());

    let second = service
        .verify_code(&VerifyEmailRequest::new("user@example.com", "482913"))
        .await;
    assert!(!second.succeeded);
    assert_eq!(second.error.as_deref(), Some(INVALID_OR_EXPIRED_MESSAGE));
}

#[tokio::test]
async fn test_verify_without_send_fails_generically() {
    let (service, _email_sender, _store) = setup(false, false);

    let result = service
        .verify_code(&VerifyEmailRequest::new("nobody@example.com", "123456"))
        .await;
    assert!(!result.succeeded);
    assert_eq!(result.error.as_deref(), Some(INVALID_OR_EXPIRED_MESSAGE));
}

#[tokio::test]
async fn test_wrong_code_fails_with_same_message_and_keeps_entry() {
    let (service, _email_sender, store) = setup(false, false);
    let service = service.with_code_generator(Arc::new(SequenceCodeGenerator::fixed("482913")));

    service
        .send_verification_code(&SendVerificationCodeRequest::new("user@example.com"))
        .await;

    let result = service
        .verify_code(&VerifyEmailRequest::new("user@example.com", "000000"))
        .await;
    assert!(!result.succeeded);
    assert_eq!(result.error.as_deref(), Some(INVALID_OR_EXPIRED_MESSAGE));

    // A wrong guess does not burn the pending code
    assert_eq!(store.entry("user@example.com").as_deref(), Some("482913"));
    let result = service
        .verify_code(&VerifyEmailRequest::new("user@example.com", "482913"))
        .await;
    assert!(result.succeeded);
}

#[tokio::test]
async fn test_send_with_missing_email_does_not_invoke_sender() {
    let (service, email_sender, store) = setup(false, false);

    for request in [
        SendVerificationCodeRequest { email: None },
        SendVerificationCodeRequest::new(""),
        SendVerificationCodeRequest::new("   "),
    ] {
        let result = service.send_verification_code(&request).await;
        assert!(!result.succeeded);
        assert_eq!(result.error.as_deref(), Some(EMAIL_REQUIRED_MESSAGE));
    }

    assert_eq!(email_sender.call_count(), 0);
    assert_eq!(store.len(), 0);
}

#[tokio::test]
async fn test_verify_with_blank_fields_fails() {
    let (service, _email_sender, _store) = setup(false, false);

    let result = service
        .verify_code(&VerifyEmailRequest::new("", "123456"))
        .await;
    assert_eq!(result.error.as_deref(), Some(VERIFY_FIELDS_REQUIRED_MESSAGE));

    let result = service
        .verify_code(&VerifyEmailRequest::new("user@example.com", " "))
        .await;
    assert!(!result.succeeded);
    assert_eq!(result.error.as_deref(), Some(VERIFY_FIELDS_REQUIRED_MESSAGE));
}

#[tokio::test]
async fn test_code_expires_after_ttl() {
    let (service, _email_sender, store) = setup(false, false);
    let service = service.with_code_generator(Arc::new(SequenceCodeGenerator::fixed("482913")));

    service
        .send_verification_code(&SendVerificationCodeRequest::new("user@example.com"))
        .await;

    store.clock.advance(chrono::Duration::seconds(299));
    assert_eq!(
        store.try_get("user@example.com").await.unwrap().as_deref(),
        Some("482913")
    );

    store.clock.advance(chrono::Duration::seconds(1));
    let result = service
        .verify_code(&VerifyEmailRequest::new("user@example.com", "482913"))
        .await;
    assert!(!result.succeeded);
    assert_eq!(result.error.as_deref(), Some(INVALID_OR_EXPIRED_MESSAGE));
}

#[tokio::test]
async fn test_resend_overwrites_previous_code() {
    let (service, _email_sender, store) = setup(false, false);
    let service =
        service.with_code_generator(Arc::new(SequenceCodeGenerator::new(&["111111", "222222"])));

    service
        .send_verification_code(&SendVerificationCodeRequest::new("user@example.com"))
        .await;
    store.clock.advance(chrono::Duration::seconds(200));
    service
        .send_verification_code(&SendVerificationCodeRequest::new("user@example.com"))
        .await;

    let stale = service
        .verify_code(&VerifyEmailRequest::new("user@example.com", "111111"))
        .await;
    assert!(!stale.succeeded);

    // The fresh send restarted the lifetime
    store.clock.advance(chrono::Duration::seconds(200));
    let fresh = service
        .verify_code(&VerifyEmailRequest::new("user@example.com", "222222"))
        .await;
    assert!(fresh.succeeded);
}

#[tokio::test]
async fn test_email_is_case_insensitive() {
    let (service, email_sender, store) = setup(false, false);
    let service = service.with_code_generator(Arc::new(SequenceCodeGenerator::fixed("482913")));

    service
        .send_verification_code(&SendVerificationCodeRequest::new("User@Example.COM"))
        .await;

    // The message goes to the address as given, the entry is keyed lower-case
    assert_eq!(email_sender.last_message().unwrap().recipient, "User@Example.COM");
    assert!(store.entry("user@example.com").is_some());

    let result = service
        .verify_code(&VerifyEmailRequest::new("USER@example.com", "482913"))
        .await;
    assert!(result.succeeded);
}

#[tokio::test]
async fn test_sender_failure_persists_nothing() {
    let (service, email_sender, store) = setup(true, false);

    let result = service
        .send_verification_code(&SendVerificationCodeRequest::new("user@example.com"))
        .await;
    assert!(!result.succeeded);

    let error = result.error.unwrap();
    assert!(error.starts_with(SEND_FAILED_PREFIX));
    assert!(error.contains("Email service error"));

    assert_eq!(email_sender.call_count(), 1);
    assert_eq!(store.len(), 0);
}

#[tokio::test]
async fn test_store_failure_on_send_reports_failure() {
    let (service, email_sender, _store) = setup(false, true);

    let result = service
        .send_verification_code(&SendVerificationCodeRequest::new("user@example.com"))
        .await;
    assert!(!result.succeeded);
    assert!(result.error.unwrap().starts_with(SEND_FAILED_PREFIX));
    assert_eq!(email_sender.call_count(), 1);
}

#[tokio::test]
async fn test_store_failure_on_verify_is_reported_generically() {
    let (service, _email_sender, _store) = setup(false, true);

    let result = service
        .verify_code(&VerifyEmailRequest::new("user@example.com", "123456"))
        .await;
    assert!(!result.succeeded);
    assert_eq!(result.error.as_deref(), Some(INVALID_OR_EXPIRED_MESSAGE));
}

#[tokio::test]
async fn test_message_contains_escaped_link() {
    let (service, email_sender, _store) = setup(false, false);
    let service = service.with_code_generator(Arc::new(SequenceCodeGenerator::fixed("482913")));

    service
        .send_verification_code(&SendVerificationCodeRequest::new("a+b@example.com"))
        .await;

    let message = email_sender.last_message().unwrap();
    let expected = format!(
        "{}?email=a%2Bb%40example.com&code=482913",
        service.config().verify_url
    );
    assert!(message.plain_text.contains(&expected));
}

#[tokio::test]
async fn test_concurrent_sends_for_different_emails() {
    let (service, email_sender, store) = setup(false, false);
    let service = Arc::new(service);

    let handles: Vec<_> = (0..20)
        .map(|i| {
            let service = service.clone();
            tokio::spawn(async move {
                let email = format!("user{}@example.com", i);
                service
                    .send_verification_code(&SendVerificationCodeRequest::new(email))
                    .await
            })
        })
        .collect();

    for handle in handles {
        assert!(handle.await.unwrap().succeeded);
    }

    assert_eq!(store.len(), 20);
    assert_eq!(email_sender.sent().len(), 20);

    for message in email_sender.sent() {
        let code = store.entry(&message.recipient).unwrap();
        assert_eq!(message.subject, format!("Your code is {}", code));
        let result = service
            .verify_code(&VerifyEmailRequest::new(message.recipient.clone(), code))
            .await;
        assert!(result.succeeded);
    }
}

#[tokio::test]
async fn test_save_verification_code() {
    let (service, email_sender, store) = setup(false, false);

    service
        .save_verification_code(&SaveVerificationCodeRequest {
            email: "Saved@Example.com".to_string(),
            code: "654321".to_string(),
            expiration: Duration::from_secs(60),
        })
        .await
        .unwrap();

    assert_eq!(email_sender.call_count(), 0);
    assert_eq!(store.entry("saved@example.com").as_deref(), Some("654321"));

    store.clock.advance(chrono::Duration::seconds(61));
    let result = service
        .verify_code(&VerifyEmailRequest::new("saved@example.com", "654321"))
        .await;
    assert!(!result.succeeded);
}

#[tokio::test]
async fn test_save_verification_code_requires_fields() {
    let (service, _email_sender, _store) = setup(false, false);

    let result = service
        .save_verification_code(&SaveVerificationCodeRequest {
            email: " ".to_string(),
            code: "654321".to_string(),
            expiration: Duration::from_secs(60),
        })
        .await;

    match result.unwrap_err() {
        DomainError::ValidationErr(ValidationError::RequiredField { field }) => {
            assert_eq!(field, "email");
        }
        other => panic!("Expected required field error, got {:?}", other),
    }
}
