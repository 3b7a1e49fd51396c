//! Session memory implementations for AadiNet.

pub mod in_memory;
pub mod noop;

pub use in_memory::InMemorySessionMemory;
pub use noop::NoopMemory;

use std::sync::Arc;

use aadinet_core::memory::SessionMemory;

/// Backend names accepted by `memory.backend` in the config.
pub const BACKENDS: &[&str] = &["in_memory", "none"];

/// Build a fresh memory store for one session.
///
/// Returns `None` for an unknown backend name.
pub fn build(backend: &str) -> Option<Arc<dyn SessionMemory>> {
    match backend {
        "in_memory" => Some(Arc::new(InMemorySessionMemory::new())),
        "none" => Some(Arc::new(NoopMemory)),
        other => {
            tracing::warn!(backend = %other, "Unknown session memory backend");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_known_backends() {
        assert_eq!(build("in_memory").unwrap().name(), "in_memory");
        assert_eq!(build("none").unwrap().name(), "none");
    }

    #[test]
    fn unknown_backend_is_rejected() {
        assert!(build("sqlite").is_none());
    }
}
