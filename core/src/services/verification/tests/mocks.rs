//! Mock implementations for testing verification service

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use crate::domain::clock::{Clock, ManualClock};
use crate::services::verification::code_generator::CodeGenerator;
use crate::services::verification::traits::{EmailSenderTrait, VerificationStoreTrait};
use crate::services::verification::types::EmailMessage;

// Mock email sender that records every accepted message
pub struct MockEmailSender {
    pub sent_messages: Arc<Mutex<Vec<EmailMessage>>>,
    pub should_fail: bool,
    calls: AtomicUsize,
}

impl MockEmailSender {
    pub fn new(should_fail: bool) -> Self {
        Self {
            sent_messages: Arc::new(Mutex::new(Vec::new())),
            should_fail,
            calls: AtomicUsize::new(0),
        }
    }

    /// Number of times the sender was invoked, including failed attempts
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn sent(&self) -> Vec<EmailMessage> {
        self.sent_messages.lock().unwrap().clone()
    }

    pub fn last_message(&self) -> Option<EmailMessage> {
        self.sent_messages.lock().unwrap().last().cloned()
    }
}

#[async_trait]
impl EmailSenderTrait for MockEmailSender {
    async fn send_email(&self, message: &EmailMessage) -> Result<String, String> {
        let n = self.calls.fetch_add(1, Ordering::SeqCst);
        if self.should_fail {
            return Err("Email service error".to_string());
        }
        self.sent_messages.lock().unwrap().push(message.clone());
        Ok(format!("mock-msg-{}", n))
    }
}

// Mock store evaluated against a manual clock
pub struct MockVerificationStore {
    pub codes: Arc<Mutex<HashMap<String, (String, DateTime<Utc>)>>>,
    pub clock: Arc<ManualClock>,
    pub should_fail: bool,
}

impl MockVerificationStore {
    pub fn new(should_fail: bool) -> Self {
        Self {
            codes: Arc::new(Mutex::new(HashMap::new())),
            clock: Arc::new(ManualClock::default()),
            should_fail,
        }
    }

    /// Raw entry regardless of expiry
    pub fn entry(&self, email: &str) -> Option<String> {
        self.codes
            .lock()
            .unwrap()
            .get(email)
            .map(|(code, _)| code.clone())
    }

    pub fn len(&self) -> usize {
        self.codes.lock().unwrap().len()
    }

    fn fail(&self) -> Result<(), String> {
        if self.should_fail {
            Err("Store unavailable".to_string())
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl VerificationStoreTrait for MockVerificationStore {
    async fn set(&self, email: &str, code: &str, ttl: Duration) -> Result<(), String> {
        self.fail()?;
        let ttl = chrono::Duration::from_std(ttl).map_err(|e| e.to_string())?;
        let expires_at = self.clock.now() + ttl;
        self.codes
            .lock()
            .unwrap()
            .insert(email.to_string(), (code.to_string(), expires_at));
        Ok(())
    }

    async fn try_get(&self, email: &str) -> Result<Option<String>, String> {
        self.fail()?;
        let now = self.clock.now();
        Ok(self
            .codes
            .lock()
            .unwrap()
            .get(email)
            .filter(|(_, expires_at)| now < *expires_at)
            .map(|(code, _)| code.clone()))
    }

    async fn remove(&self, email: &str) -> Result<(), String> {
        self.fail()?;
        self.codes.lock().unwrap().remove(email);
        Ok(())
    }

    async fn consume(&self, email: &str, code: &str) -> Result<bool, String> {
        self.fail()?;
        let now = self.clock.now();
        let mut codes = self.codes.lock().unwrap();
        let matched = matches!(
            codes.get(email),
            Some((stored, expires_at)) if stored == code && now < *expires_at
        );
        if matched {
            codes.remove(email);
        }
        Ok(matched)
    }
}

// Code generator returning a queued sequence, then repeating the last code
pub struct SequenceCodeGenerator {
    codes: Mutex<Vec<String>>,
}

impl SequenceCodeGenerator {
    pub fn new(codes: &[&str]) -> Self {
        let mut codes: Vec<String> = codes.iter().map(|c| c.to_string()).collect();
        codes.reverse();
        Self {
            codes: Mutex::new(codes),
        }
    }

    pub fn fixed(code: &str) -> Self {
        Self::new(&[code])
    }
}

impl CodeGenerator for SequenceCodeGenerator {
    fn generate(&self) -> String {
        let mut codes = self.codes.lock().unwrap();
        if codes.len() > 1 {
            codes.pop().unwrap()
        } else {
            codes.last().cloned().unwrap_or_default()
        }
    }
}
