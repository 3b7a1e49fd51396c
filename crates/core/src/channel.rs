//! Channel trait: the abstraction over input surfaces.
//!
//! A Channel feeds raw command text into a terminal session and shows the
//! responses back. The interactive terminal is one; quick-command buttons and
//! HTTP clients reach the session through the gateway instead.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::error::ChannelError;

/// Unique identifier for a channel instance.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ChannelId(pub String);

impl std::fmt::Display for ChannelId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A line of input received from a channel.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChannelMessage {
    /// The channel this message belongs to
    pub channel_id: ChannelId,

    /// Sender identifier
    pub sender_id: String,

    /// The raw command text
    pub content: String,

    /// Whether the text came from a quick-command shortcut rather than typing
    #[serde(default)]
    pub quick_command: bool,
}

/// The core Channel trait.
#[async_trait]
pub trait Channel: Send + Sync {
    /// Human-readable channel name (e.g., "cli").
    fn name(&self) -> &str;

    /// Unique ID for this channel instance.
    fn id(&self) -> &ChannelId;

    /// Start listening for input.
    ///
    /// Returns a receiver that yields each submitted line. The channel stops
    /// yielding when the visitor leaves.
    async fn start(
        &self,
    ) -> std::result::Result<
        tokio::sync::mpsc::Receiver<std::result::Result<ChannelMessage, ChannelError>>,
        ChannelError,
    >;

    /// Show a response to the visitor.
    async fn send(&self, content: &str) -> std::result::Result<(), ChannelError>;

    /// Show the "Analyzing request..." indicator (if the surface has one).
    async fn show_processing(&self) -> std::result::Result<(), ChannelError> {
        Ok(())
    }

    /// Stop the channel gracefully.
    async fn stop(&self) -> std::result::Result<(), ChannelError> {
        Ok(())
    }
}
