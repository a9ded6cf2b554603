//! In-memory verification store
//!
//! Entries live in a sharded [`DashMap`], so requests for different
//! addresses only contend when they hash to the same shard. Expiry is
//! checked against an injected [`Clock`]: expired entries are dropped lazily
//! when read and eagerly by [`InMemoryVerificationStore::purge_expired`],
//! which the background sweeper calls on an interval.

use async_trait::async_trait;
use dashmap::DashMap;
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tracing::{debug, info};

use vm_core::domain::{Clock, SystemClock, VerificationEntry};
use vm_core::services::verification::VerificationStoreTrait;
use vm_shared::config::CacheConfig;
use vm_shared::email::mask_email;

use crate::InfrastructureError;

/// Process-local verification store
pub struct InMemoryVerificationStore {
    entries: DashMap<String, VerificationEntry>,
    clock: Arc<dyn Clock>,
    /// Upper bound on stored entries; `None` means unbounded
    capacity: Option<usize>,
}

impl InMemoryVerificationStore {
    /// Create an unbounded store on the system clock
    pub fn new() -> Self {
        Self::with_clock(Arc::new(SystemClock))
    }

    /// Create an unbounded store evaluated against `clock`
    pub fn with_clock(clock: Arc<dyn Clock>) -> Self {
        Self {
            entries: DashMap::new(),
            clock,
            capacity: None,
        }
    }

    /// Bound the number of stored entries
    ///
    /// When a new address arrives at a full store, expired entries are purged
    /// first and then the entry closest to expiry is evicted. The bound is
    /// approximate while inserts race each other.
    pub fn with_capacity(mut self, capacity: usize) -> Self {
        self.capacity = Some(capacity.max(1));
        self
    }

    /// Create a store from cache settings
    pub fn from_config(config: &CacheConfig) -> Self {
        let store = Self::new();
        match config.max_entries {
            Some(capacity) => store.with_capacity(capacity),
            None => store,
        }
    }

    /// Insert or replace the code for `email`, restarting its lifetime
    pub fn insert(&self, email: &str, code: &str, ttl: Duration) -> Result<(), InfrastructureError> {
        let now = self.clock.now();
        let ttl = chrono::Duration::from_std(ttl)
            .ok()
            .filter(|ttl| now.checked_add_signed(*ttl).is_some())
            .ok_or_else(|| {
                InfrastructureError::Config(format!("Verification code TTL out of range: {:?}", ttl))
            })?;

        let entry = VerificationEntry::new(email, code, ttl, now);

        if let Some(capacity) = self.capacity {
            if !self.entries.contains_key(&entry.email) && self.entries.len() >= capacity {
                self.make_room(capacity);
            }
        }

        self.entries.insert(entry.email.clone(), entry);
        Ok(())
    }

    /// Current code for `email` if present and unexpired
    pub fn get(&self, email: &str) -> Option<String> {
        let now = self.clock.now();
        let expired = match self.entries.get(email) {
            Some(entry) if !entry.is_expired_at(now) => return Some(entry.code.clone()),
            Some(_) => true,
            None => false,
        };

        if expired {
            self.entries.remove_if(email, |_, entry| entry.is_expired_at(now));
        }
        None
    }

    /// Delete the entry for `email`; returns whether one existed
    pub fn delete(&self, email: &str) -> bool {
        self.entries.remove(email).is_some()
    }

    /// Remove the entry only while it is unexpired and holds `code`
    ///
    /// The check and the removal happen under the shard lock, so of several
    /// concurrent callers with the right code exactly one gets `true`.
    pub fn take_if_matches(&self, email: &str, code: &str) -> bool {
        let now = self.clock.now();
        self.entries
            .remove_if(email, |_, entry| {
                !entry.is_expired_at(now) && entry.matches(code)
            })
            .is_some()
    }

    /// Drop every expired entry and return how many were removed
    pub fn purge_expired(&self) -> usize {
        let now = self.clock.now();
        let before = self.entries.len();
        self.entries.retain(|_, entry| !entry.is_expired_at(now));
        before.saturating_sub(self.entries.len())
    }

    /// Number of stored entries, including expired ones not yet purged
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Spawn a task that purges expired entries every `interval`
    ///
    /// The task holds only a weak reference and exits once the store is
    /// dropped.
    pub fn spawn_sweeper(self: &Arc<Self>, interval: Duration) -> JoinHandle<()> {
        let store = Arc::downgrade(self);
        let period = interval.max(Duration::from_secs(1));

        info!(interval_secs = period.as_secs(), "Starting verification store sweeper");

        tokio::spawn(async move {
            let mut ticker = tokio::time::interval(period);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
            // The first tick completes immediately
            ticker.tick().await;

            loop {
                ticker.tick().await;
                let Some(store) = store.upgrade() else {
                    debug!("Verification store dropped, stopping sweeper");
                    break;
                };

                let purged = store.purge_expired();
                if purged > 0 {
                    debug!(purged, remaining = store.len(), "Purged expired verification codes");
                }
            }
        })
    }

    fn make_room(&self, capacity: usize) {
        if self.purge_expired() > 0 && self.entries.len() < capacity {
            return;
        }

        let oldest = self
            .entries
            .iter()
            .min_by_key(|entry| entry.expires_at)
            .map(|entry| entry.key().clone());

        if let Some(email) = oldest {
            self.entries.remove(&email);
            debug!(
                email = %mask_email(&email),
                capacity,
                "Verification store full, evicted entry closest to expiry"
            );
        }
    }
}

impl Default for InMemoryVerificationStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl VerificationStoreTrait for InMemoryVerificationStore {
    async fn set(&self, email: &str, code: &str, ttl: Duration) -> Result<(), String> {
        self.insert(email, code, ttl).map_err(|e| e.to_string())
    }

    async fn try_get(&self, email: &str) -> Result<Option<String>, String> {
        Ok(self.get(email))
    }

    async fn remove(&self, email: &str) -> Result<(), String> {
        self.delete(email);
        Ok(())
    }

    async fn consume(&self, email: &str, code: &str) -> Result<bool, String> {
        Ok(self.take_if_matches(email, code))
    }
}
