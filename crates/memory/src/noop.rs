//! No-op memory backend: disables session memory entirely.
//!
//! With this backend every snapshot is empty, so memory-conditioned
//! responses never fire and the default reply carries no remembered context.

use async_trait::async_trait;
use aadinet_core::error::MemoryError;
use aadinet_core::memory::SessionMemory;

/// A no-op memory backend that stores nothing.
pub struct NoopMemory;

#[async_trait]
impl SessionMemory for NoopMemory {
    fn name(&self) -> &str { "none" }

    async fn append(&self, _input: &str) -> Result<(), MemoryError> {
        Ok(())
    }

    async fn snapshot(&self) -> Result<Vec<String>, MemoryError> {
        Ok(Vec::new())
    }
}
