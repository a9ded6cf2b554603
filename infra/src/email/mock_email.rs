//! Mock Email Service Implementation
//!
//! A mock implementation of the email sender for development and testing.
//! This implementation prints messages to the console instead of sending them.

use async_trait::async_trait;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tracing::{info, warn};
use uuid::Uuid;

use vm_core::services::verification::{EmailMessage, EmailSenderTrait};
use vm_shared::email::{is_valid_email, mask_email};

use crate::InfrastructureError;

/// Mock email service for development and testing
///
/// This implementation:
/// - Prints messages to the console
/// - Validates recipient addresses
/// - Generates mock message IDs
/// - Tracks message count for testing
#[derive(Clone)]
pub struct MockEmailService {
    /// Counter for tracking number of messages sent
    message_count: Arc<AtomicU64>,
    /// Whether to simulate failures (for testing)
    simulate_failure: bool,
    /// Whether to print messages to console
    console_output: bool,
}

impl MockEmailService {
    /// Create a new mock email service
    pub fn new() -> Self {
        Self::with_options(true, false)
    }

    /// Create a mock service with configurable options
    pub fn with_options(console_output: bool, simulate_failure: bool) -> Self {
        Self {
            message_count: Arc::new(AtomicU64::new(0)),
            simulate_failure,
            console_output,
        }
    }

    /// Get the total number of messages sent
    pub fn get_message_count(&self) -> u64 {
        self.message_count.load(Ordering::SeqCst)
    }

    /// Reset the message counter
    pub fn reset_counter(&self) {
        self.message_count.store(0, Ordering::SeqCst);
    }

    /// Enable or disable failure simulation
    pub fn set_simulate_failure(&mut self, simulate: bool) {
        self.simulate_failure = simulate;
    }

    /// Accept a message and return its mock message ID
    pub async fn deliver(&self, message: &EmailMessage) -> Result<String, InfrastructureError> {
        if !is_valid_email(&message.recipient) {
            return Err(InfrastructureError::Email(format!(
                "Invalid recipient address: {}",
                mask_email(&message.recipient)
            )));
        }

        if self.simulate_failure {
            warn!(
                "Mock email service simulating failure for recipient: {}",
                mask_email(&message.recipient)
            );
            return Err(InfrastructureError::Email(
                "Simulated email sending failure".to_string(),
            ));
        }

        let message_id = format!("mock_{}", Uuid::new_v4());
        let count = self.message_count.fetch_add(1, Ordering::SeqCst) + 1;
        let masked_recipient = mask_email(&message.recipient);

        if self.console_output {
            println!("\n{}", "=".repeat(60));
            println!("MOCK EMAIL SERVICE - MESSAGE #{}", count);
            println!("{}", "=".repeat(60));
            println!("From: {}", message.sender_address);
            println!("To: {} (masked: {})", message.recipient, masked_recipient);
            println!("Subject: {}", message.subject);
            println!("Message ID: {}", message_id);
            println!("{}", message.plain_text);
            println!("{}\n", "=".repeat(60));
        }

        info!(
            target: "email_service",
            provider = "mock",
            recipient = %masked_recipient,
            message_id = %message_id,
            html_length = message.html.len(),
            "Email sent successfully (mock)"
        );

        Ok(message_id)
    }
}

impl Default for MockEmailService {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl EmailSenderTrait for MockEmailService {
    async fn send_email(&self, message: &EmailMessage) -> Result<String, String> {
        self.deliver(message).await.map_err(|e| e.to_string())
    }
}
