//! Cache module for verification code storage
//!
//! This module provides the stores that hold pending verification codes:
//! a process-local in-memory store and a Redis store that can be shared
//! between instances.

pub mod memory_store;
#[cfg(feature = "redis-cache")]
pub mod redis_store;


pub use memory_store::InMemoryVerificationStore;
#[cfg(feature = "redis-cache")]
pub use redis_store::RedisVerificationStore;

use std::sync::Arc;
use std::time::Duration;

use vm_core::services::verification::VerificationStoreTrait;
use vm_shared::config::{CacheConfig, CacheType};

use crate::InfrastructureError;

/// Create a verification store based on configuration
///
/// The in-memory store gets a background sweeper running every
/// `cleanup_interval` seconds, so this must be called inside a tokio runtime.
pub async fn create_verification_store(
    config: &CacheConfig,
) -> Result<Box<dyn VerificationStoreTrait>, InfrastructureError> {
    match config.cache_type {
        CacheType::Memory => {
            let store = Arc::new(InMemoryVerificationStore::from_config(config));
            store.spawn_sweeper(Duration::from_secs(config.cleanup_interval));
            tracing::info!(
                capacity = ?config.max_entries,
                "Using in-memory verification store"
            );
            Ok(Box::new(store))
        }
        #[cfg(feature = "redis-cache")]
        CacheType::Redis => {
            let store = RedisVerificationStore::connect(config.clone()).await?;
            tracing::info!("Using Redis verification store");
            Ok(Box::new(store))
        }
        #[cfg(not(feature = "redis-cache"))]
        CacheType::Redis => Err(InfrastructureError::Config(
            "Redis verification store requested but the redis-cache feature is disabled"
                .to_string(),
        )),
    }
}
