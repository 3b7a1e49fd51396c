//! Command responses, actions, and the display state they drive.
//!
//! The resolver produces a [`CommandResponse`]; its [`ActionKind`] is the only
//! signal the presentation layer branches on. Matching on it is exhaustive,
//! so adding a variant forces every consumer to decide what it means.

use serde::{Deserialize, Serialize};

/// A view/mode change requested alongside a response message.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActionKind {
    /// No presentation change (default)
    #[default]
    None,
    /// Switch the active panel to the project cards
    ShowProjects,
    /// Switch the active panel to the skill chart
    ShowSkills,
    /// Résumé text was shown inline; no panel change
    ShowResume,
    /// Enable the transient glitch mode
    ChaosMode,
}

impl ActionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ActionKind::None => "none",
            ActionKind::ShowProjects => "show_projects",
            ActionKind::ShowSkills => "show_skills",
            ActionKind::ShowResume => "show_resume",
            ActionKind::ChaosMode => "chaos_mode",
        }
    }

    pub fn is_none(&self) -> bool {
        matches!(self, ActionKind::None)
    }
}

impl std::fmt::Display for ActionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single static entry of the trigger table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CommandEntry {
    /// Exact-match key, stored lower-case
    pub trigger: &'static str,

    /// Canned response text (formatting markers are opaque)
    pub message: &'static str,

    /// Action to trigger when this entry is selected
    pub action: ActionKind,
}

impl CommandEntry {
    /// The response this entry resolves to.
    pub fn response(&self) -> CommandResponse {
        CommandResponse {
            message: self.message.to_string(),
            action: self.action,
        }
    }
}

/// The `{message, action}` pair returned for every input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandResponse {
    pub message: String,

    #[serde(default)]
    pub action: ActionKind,
}

impl CommandResponse {
    /// A plain text response with no action.
    pub fn text(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            action: ActionKind::None,
        }
    }
}

/// Which panel the presentation layer is showing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum View {
    #[default]
    Terminal,
    Projects,
    Skills,
}

impl std::fmt::Display for View {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            View::Terminal => f.write_str("terminal"),
            View::Projects => f.write_str("projects"),
            View::Skills => f.write_str("skills"),
        }
    }
}

/// Presentation state driven by dispatched actions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayState {
    /// The active panel
    pub view: View,

    /// Whether the transient glitch mode is on
    pub chaos_mode: bool,
}
