//! Transcript types.
//!
//! These are the value objects the presentation shell shows:
//! User types a command → Session resolves it → an ai entry is appended.
//! The resolver never sees these; it only produces the content/action pair.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::action::ActionKind;

/// Unique identifier for a terminal session.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SessionId(pub String);

impl SessionId {
    pub fn new() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl Default for SessionId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for SessionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Who a transcript entry is attributed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// The visitor typing commands
    User,
    /// The terminal's canned assistant
    Ai,
    /// Banner and status lines
    System,
}

impl Role {
    /// The prompt label shown next to the entry.
    pub fn label(&self) -> &'static str {
        match self {
            Role::User => "user@terminal",
            Role::Ai => "aadinet",
            Role::System => "system",
        }
    }
}

/// A single transcript entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    /// Unique message ID
    pub id: String,

    /// Who sent this message
    pub role: Role,

    /// The text content
    pub content: String,

    /// Timestamp
    pub timestamp: DateTime<Utc>,

    /// Action the response carried, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action: Option<ActionKind>,
}

impl Message {
    fn new(role: Role, content: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            role,
            content: content.into(),
            timestamp: Utc::now(),
            action: None,
        }
    }

    /// Create a new user message.
    pub fn user(content: impl Into<String>) -> Self {
        Self::new(Role::User, content)
    }

    /// Create a new ai message. `ActionKind::None` is stored as absent.
    pub fn ai(content: impl Into<String>, action: ActionKind) -> Self {
        let mut msg = Self::new(Role::Ai, content);
        msg.action = (!action.is_none()).then_some(action);
        msg
    }

    /// Create a new system message.
    pub fn system(content: impl Into<String>) -> Self {
        Self::new(Role::System, content)
    }
}

/// The ordered, append-only list of entries shown in the terminal.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Transcript {
    messages: Vec<Message>,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, message: Message) {
        self.messages.push(message);
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn last(&self) -> Option<&Message> {
        self.messages.last()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ai_message_drops_none_action() {
        let msg = Message::ai("plain", ActionKind::None);
        assert_eq!(msg.role, Role::Ai);
        assert!(msg.action.is_none());

        let msg = Message::ai("go", ActionKind::ShowSkills);
        assert_eq!(msg.action, Some(ActionKind::ShowSkills));
    }

    #[test]
    fn message_serialization_omits_absent_action() {
        let msg = Message::user("help");
        let json = serde_json::to_string(&msg).unwrap();
        assert!(json.contains("\"role\":\"user\""));
        assert!(!json.contains("action"));
    }

    #[test]
    fn transcript_keeps_insertion_order() {
        let mut transcript = Transcript::new();
        transcript.push(Message::system("boot"));
        transcript.push(Message::user("help"));
        assert_eq!(transcript.len(), 2);
        assert_eq!(transcript.messages()[0].content, "boot");
        assert_eq!(transcript.last().unwrap().content, "help");
    }

    #[test]
    fn role_labels() {
        assert_eq!(Role::User.label(), "user@terminal");
        assert_eq!(Role::Ai.label(), "aadinet");
        assert_eq!(Role::System.label(), "system");
    }
}
