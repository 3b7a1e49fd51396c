//! Domain event system: decoupled communication between the session and
//! whatever is rendering it.
//!
//! The session publishes events when a command resolves or the display state
//! changes. Renderers (the CLI, the gateway's SSE stream) subscribe and
//! filter for the session they care about.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tokio::sync::broadcast;

use crate::action::{ActionKind, View};

/// All domain events in the system.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DomainEvent {
    /// A command was submitted to a session
    CommandReceived {
        session_id: String,
        input_preview: String,
        timestamp: DateTime<Utc>,
    },

    /// The resolver produced a response
    ResponseGenerated {
        session_id: String,
        action: ActionKind,
        timestamp: DateTime<Utc>,
    },

    /// The active panel changed
    ViewChanged {
        session_id: String,
        view: View,
        timestamp: DateTime<Utc>,
    },

    /// Chaos mode was switched on or off
    ChaosModeChanged {
        session_id: String,
        active: bool,
        timestamp: DateTime<Utc>,
    },

    /// An error occurred
    ErrorOccurred {
        context: String,
        error_message: String,
        timestamp: DateTime<Utc>,
    },
}

impl DomainEvent {
    /// The session this event belongs to, if it is session-scoped.
    pub fn session_id(&self) -> Option<&str> {
        match self {
            DomainEvent::CommandReceived { session_id, .. }
            | DomainEvent::ResponseGenerated { session_id, .. }
            | DomainEvent::ViewChanged { session_id, .. }
            | DomainEvent::ChaosModeChanged { session_id, .. } => Some(session_id),
            DomainEvent::ErrorOccurred { .. } => None,
        }
    }
}

/// A broadcast-based event bus for domain events.
///
/// Uses `tokio::sync::broadcast` for multi-consumer pub/sub.
pub struct EventBus {
    sender: broadcast::Sender<Arc<DomainEvent>>,
}

impl EventBus {
    /// Create a new event bus with the given capacity.
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    /// Publish an event to all subscribers.
    pub fn publish(&self, event: DomainEvent) {
        // No subscribers is fine
        let _ = self.sender.send(Arc::new(event));
    }

    /// Subscribe to receive events.
    pub fn subscribe(&self) -> broadcast::Receiver<Arc<DomainEvent>> {
        self.sender.subscribe()
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new(256)
    }
}
