//! Durable "remote disabled" flag.
//!
//! Once a quota-type rejection trips the breaker, every analysis and
//! suggestion request takes the offline path until the user explicitly
//! resets it. There is no expiry and no half-open probing.

pub mod store;

pub use store::{FileStore, KeyValueStore, MemoryStore};

use anyhow::Result;
use std::sync::Arc;

/// Key under which the flag is stored. `"true"` means disabled; absence or
/// any other value means remote calls are allowed.
pub const DISABLED_KEY: &str = "openrouter_api_disabled";

const DISABLED_VALUE: &str = "true";

#[derive(Clone)]
pub struct CircuitBreaker {
    store: Arc<dyn KeyValueStore>,
}

impl CircuitBreaker {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    /// Breaker backed by a process-local store.
    pub fn in_memory() -> Self {
        Self::new(Arc::new(MemoryStore::new()))
    }

    /// An unreadable store counts as enabled.
    pub fn is_disabled(&self) -> bool {
        match self.store.get(DISABLED_KEY) {
            Ok(value) => value.as_deref() == Some(DISABLED_VALUE),
            Err(error) => {
                tracing::warn!(error = %error, "failed to read circuit flag; assuming enabled");
                false
            }
        }
    }

    /// Idempotent; a failed write is logged and the next quota rejection retries it.
    pub fn disable(&self) {
        match self.store.set(DISABLED_KEY, DISABLED_VALUE) {
            Ok(()) => tracing::warn!("remote analysis disabled after quota exhaustion"),
            Err(error) => tracing::warn!(error = %error, "failed to persist circuit flag"),
        }
    }

    /// Explicit user action that re-enables remote calls.
    pub fn reset(&self) -> Result<()> {
        self.store.remove(DISABLED_KEY)?;
        tracing::info!("remote analysis re-enabled");
        Ok(())
    }
}
