//! Session memory trait: the ordered log of a visitor's raw inputs.
//!
//! Memory is append-only for the lifetime of one session and is never
//! persisted. The resolver reads a snapshot; only the session shell appends.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::MemoryError;

/// How many recent entries the memory panel shows.
pub const PANEL_RECENT: usize = 3;

/// The core SessionMemory trait.
///
/// Implementations: in-memory (default), none (no-op).
#[async_trait]
pub trait SessionMemory: Send + Sync {
    /// The backend name (e.g., "in_memory", "none").
    fn name(&self) -> &str;

    /// Append a raw input to the end of the log.
    async fn append(&self, input: &str) -> std::result::Result<(), MemoryError>;

    /// An ordered copy of every input appended so far.
    async fn snapshot(&self) -> std::result::Result<Vec<String>, MemoryError>;

    /// Number of stored inputs.
    async fn len(&self) -> std::result::Result<usize, MemoryError> {
        Ok(self.snapshot().await?.len())
    }

    /// Whether nothing has been stored yet.
    async fn is_empty(&self) -> std::result::Result<bool, MemoryError> {
        Ok(self.len().await? == 0)
    }
}

/// Summary of session memory for the "Memory Active" panel.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemoryPanel {
    /// Total queries in this session
    pub total: usize,

    /// The most recent queries, oldest first
    pub recent: Vec<String>,

    /// Queries not shown in `recent`
    pub hidden: usize,
}

impl MemoryPanel {
    pub fn from_entries(entries: &[String]) -> Self {
        let start = entries.len().saturating_sub(PANEL_RECENT);
        Self {
            total: entries.len(),
            recent: entries[start..].to_vec(),
            hidden: start,
        }
    }

    /// The panel is hidden until the first query.
    pub fn is_visible(&self) -> bool {
        self.total > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entries(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn panel_for_empty_memory_is_hidden() {
        let panel = MemoryPanel::from_entries(&[]);
        assert!(!panel.is_visible());
        assert_eq!(panel.hidden, 0);
        assert!(panel.recent.is_empty());
    }

    #[test]
    fn panel_shows_last_three_and_counts_the_rest() {
        let panel = MemoryPanel::from_entries(&entries(&["a", "b", "c", "d", "e"]));
        assert_eq!(panel.total, 5);
        assert_eq!(panel.recent, entries(&["c", "d", "e"]));
        assert_eq!(panel.hidden, 2);
    }

    #[test]
    fn panel_with_fewer_than_three_entries() {
        let panel = MemoryPanel::from_entries(&entries(&["help"]));
        assert_eq!(panel.recent, entries(&["help"]));
        assert_eq!(panel.hidden, 0);
    }
}
