//! In-memory backend: the default store for a session's inputs.

use async_trait::async_trait;
use aadinet_core::error::MemoryError;
use aadinet_core::memory::SessionMemory;
use tokio::sync::RwLock;

/// Stores raw inputs in a Vec, in submission order.
/// No capacity bound, no dedup, nothing is ever removed.
pub struct InMemorySessionMemory {
    entries: RwLock<Vec<String>>,
}

impl InMemorySessionMemory {
    pub fn new() -> Self {
        Self {
            entries: RwLock::new(Vec::new()),
        }
    }
}

impl Default for InMemorySessionMemory {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SessionMemory for InMemorySessionMemory {
    fn name(&self) -> &str { "in_memory" }

    async fn append(&self, input: &str) -> Result<(), MemoryError> {
        let mut entries = self.entries.write().await;
        entries.push(input.to_string());
        tracing::trace!(count = entries.len(), "Session memory appended");
        Ok(())
    }

    async fn snapshot(&self) -> Result<Vec<String>, MemoryError> {
        Ok(self.entries.read().await.clone())
    }

    async fn len(&self) -> Result<usize, MemoryError> {
        Ok(self.entries.read().await.len())
    }
}
