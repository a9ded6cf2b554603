//! SMTP Email Service Implementation
//!
//! Sends verification emails through an SMTP relay using lettre's tokio
//! transport with STARTTLS.

use async_trait::async_trait;
use lettre::{
    message::{header::ContentType, Mailbox, MultiPart, SinglePart},
    transport::smtp::authentication::Credentials,
    AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor,
};
use tracing::{error, info};
use uuid::Uuid;

use vm_core::services::verification::{EmailMessage, EmailSenderTrait};
use vm_shared::config::SmtpConfig;
use vm_shared::email::mask_email;

use crate::InfrastructureError;

/// Email sender backed by an SMTP relay
pub struct SmtpEmailService {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    host: String,
}

impl SmtpEmailService {
    /// Build the transport; no connection is opened until the first send
    pub fn new(config: &SmtpConfig) -> Result<Self, InfrastructureError> {
        if config.host.trim().is_empty() {
            return Err(InfrastructureError::Config("SMTP host is not set".to_string()));
        }

        let mut builder = AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&config.host)
            .map_err(|e| InfrastructureError::Config(format!("Failed to create SMTP relay: {}", e)))?
            .port(config.port);

        if !config.username.is_empty() {
            builder = builder.credentials(Credentials::new(
                config.username.clone(),
                config.password.clone(),
            ));
        }

        info!("SMTP email service configured for {}:{}", config.host, config.port);

        Ok(Self {
            transport: builder.build(),
            host: config.host.clone(),
        })
    }

    /// Build the MIME message with plain-text and HTML alternatives
    pub fn build_message(message: &EmailMessage) -> Result<Message, InfrastructureError> {
        let from: Mailbox = message
            .sender_address
            .parse()
            .map_err(|e| InfrastructureError::Config(format!("Invalid sender address: {}", e)))?;

        let to: Mailbox = message
            .recipient
            .parse()
            .map_err(|e| InfrastructureError::Email(format!("Invalid recipient: {}", e)))?;

        Message::builder()
            .from(from)
            .to(to)
            .subject(&message.subject)
            .multipart(
                MultiPart::alternative()
                    .singlepart(
                        SinglePart::builder()
                            .header(ContentType::TEXT_PLAIN)
                            .body(message.plain_text.clone()),
                    )
                    .singlepart(
                        SinglePart::builder()
                            .header(ContentType::TEXT_HTML)
                            .body(message.html.clone()),
                    ),
            )
            .map_err(|e| InfrastructureError::Email(format!("Failed to build message: {}", e)))
    }

    /// Hand a message to the relay and return the relay's message ID
    pub async fn deliver(&self, message: &EmailMessage) -> Result<String, InfrastructureError> {
        let email = Self::build_message(message)?;

        let response = self.transport.send(email).await.map_err(|e| {
            error!(
                recipient = %mask_email(&message.recipient),
                host = %self.host,
                "SMTP send failed: {}", e
            );
            InfrastructureError::Email(format!("Failed to send email: {}", e))
        })?;

        // Relays usually answer "2.0.0 Ok: queued as <id>"; fall back to a local id
        let message_id = response
            .message()
            .next()
            .map(|line| line.to_string())
            .unwrap_or_else(|| format!("smtp_{}", Uuid::new_v4()));

        info!(
            target: "email_service",
            provider = "smtp",
            recipient = %mask_email(&message.recipient),
            message_id = %message_id,
            "Email accepted by SMTP relay"
        );

        Ok(message_id)
    }

    /// Open a connection to check the relay is reachable
    pub async fn health_check(&self) -> Result<bool, InfrastructureError> {
        self.transport
            .test_connection()
            .await
            .map_err(|e| InfrastructureError::Email(format!("SMTP connection test failed: {}", e)))
    }
}

#[async_trait]
impl EmailSenderTrait for SmtpEmailService {
    async fn send_email(&self, message: &EmailMessage) -> Result<String, String> {
        self.deliver(message).await.map_err(|e| e.to_string())
    }
}
