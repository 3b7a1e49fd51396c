//! Input → response resolution.

use std::sync::Arc;

use aadinet_core::action::CommandResponse;
use serde::Serialize;
use tracing::debug;

use crate::delay::{NoDelay, ProcessingDelay};
use crate::table::{
    ANALYZE_SKILLS, CAT_RESUME, CommandTable, SHOW_PROJECTS, UNLOCK_SECRET, WHOAMI_CONTACT,
};

/// How many memory entries the follow-up rules and default reply look back.
const RECENT_WINDOW: usize = 3;
/// How many entries the "tell me more" reply echoes.
const ECHO_WINDOW: usize = 2;

/// Topic keywords, checked in order; the first hit reuses that trigger's entry.
const TOPICS: &[(&[&str], &str)] = &[
    (&["project", "work", "portfolio"], SHOW_PROJECTS),
    (&["skill", "diagnostic", "abilities"], ANALYZE_SKILLS),
    (&["resume", "cv", "experience"], CAT_RESUME),
    (&["contact", "email", "reach"], WHOAMI_CONTACT),
    (&["secret", "easter", "hidden"], UNLOCK_SECRET),
];

const GREETINGS: &[&str] = &["hello", "hi", "hey", "greetings"];

const RELATED_PROJECTS: &str = "🤔 Based on your interest in projects, you might also like:\n\n🏥 Colorectal Cancer Prediction - MLOps pipeline with Docker & PyTorch\n💰 Khutruke AI - Financial planning chatbot (Hackathon Winner)\n🎬 Tube2Text Agent - YouTube to blog conversion\n\nTry: 'show --project [name]' for details!";

const FOLLOW_UP_MENU: &str = "What specific aspect would you like to explore further? I can provide:\n• Technical implementation details\n• Project challenges and solutions\n• Technology stack deep-dives\n• Performance metrics and results";

const GREETING: &str = "👋 Hello! I'm Aaditya's AI assistant. I'm here to help you explore his capabilities and projects.\n\n🚀 Try asking me about:\n• His projects and technical work\n• Skills and expertise\n• Professional experience\n• Contact information\n\nWhat would you like to know?";

const SUGGESTIONS: &str = "💡 Try these commands:\n• show --projects\n• analyze --skills\n• cat resume.pdf\n• whoami --contact\n• unlock secret\n• help\n\n🗣️ Or just ask me naturally! I understand conversational queries too.";

/// Which rule produced a response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchRule {
    /// The normalized input is a trigger
    Exact,
    /// "more" after recent project talk
    RelatedProjects,
    /// "tell me more" / "details" echoing recent inputs
    MemoryEcho,
    /// Substring topic fallback
    Topic,
    Greeting,
    /// Nothing matched
    Fallback,
}

/// Maps raw input plus session memory to a canned response.
pub struct CommandResolver {
    table: CommandTable,
    delay: Arc<dyn ProcessingDelay>,
}

impl CommandResolver {
    /// A resolver over the built-in table with no simulated latency.
    pub fn new() -> Self {
        Self {
            table: CommandTable::builtin(),
            delay: Arc::new(NoDelay),
        }
    }

    /// Set the simulated processing latency.
    pub fn with_delay(mut self, delay: Arc<dyn ProcessingDelay>) -> Self {
        self.delay = delay;
        self
    }

    pub fn table(&self) -> &CommandTable {
        &self.table
    }

    pub fn delay(&self) -> &dyn ProcessingDelay {
        self.delay.as_ref()
    }

    /// Wait out the processing delay, then resolve.
    ///
    /// `memory` is the ordered log of earlier raw inputs.
    pub async fn process(&self, input: &str, memory: &[String]) -> CommandResponse {
        self.delay.wait().await;
        self.resolve(input, memory)
    }

    /// Resolve `input` against the table and `memory`. Total and pure.
    pub fn resolve(&self, input: &str, memory: &[String]) -> CommandResponse {
        self.resolve_with_rule(input, memory).0
    }

    /// Like [`resolve`](Self::resolve), also reporting which rule fired.
    pub fn resolve_with_rule(
        &self,
        input: &str,
        memory: &[String],
    ) -> (CommandResponse, MatchRule) {
        let normalized = normalize(input);

        let (response, rule) = self.match_input(input, &normalized, memory);
        debug!(
            rule = ?rule,
            action = %response.action,
            memory_len = memory.len(),
            "Command resolved"
        );
        (response, rule)
    }

    fn match_input(
        &self,
        original: &str,
        normalized: &str,
        memory: &[String],
    ) -> (CommandResponse, MatchRule) {
        if let Some(entry) = self.table.get(normalized) {
            return (entry.response(), MatchRule::Exact);
        }

        if !memory.is_empty() {
            let recent = tail(memory, RECENT_WINDOW).join(" ").to_lowercase();

            if normalized.contains("more") && recent.contains("project") {
                return (CommandResponse::text(RELATED_PROJECTS), MatchRule::RelatedProjects);
            }

            if normalized.contains("tell me more") || normalized.contains("details") {
                let message = format!(
                    "🧠 I remember you asked about: {}\n\n{FOLLOW_UP_MENU}",
                    tail(memory, ECHO_WINDOW).join(", ")
                );
                return (CommandResponse::text(message), MatchRule::MemoryEcho);
            }
        }

        for (keywords, trigger) in TOPICS {
            if keywords.iter().any(|k| normalized.contains(k)) {
                if let Some(entry) = self.table.get(trigger) {
                    return (entry.response(), MatchRule::Topic);
                }
            }
        }

        if GREETINGS.iter().any(|g| normalized.contains(g)) {
            return (CommandResponse::text(GREETING), MatchRule::Greeting);
        }

        (CommandResponse::text(fallback_message(original, memory)), MatchRule::Fallback)
    }
}

impl Default for CommandResolver {
    fn default() -> Self {
        Self::new()
    }
}

/// Lower-cased input with surrounding whitespace and byte-order marks removed.
fn normalize(input: &str) -> String {
    input
        .trim_matches(|c: char| c.is_whitespace() || c == '\u{feff}')
        .to_lowercase()
}

fn tail(memory: &[String], n: usize) -> &[String] {
    &memory[memory.len().saturating_sub(n)..]
}

fn fallback_message(original: &str, memory: &[String]) -> String {
    let mut message = format!("🤖 Command not recognized: \"{original}\"\n\n{SUGGESTIONS}");
    if !memory.is_empty() {
        message.push_str("\n\n🧠 I remember our conversation about: ");
        message.push_str(&tail(memory, RECENT_WINDOW).join(", "));
    }
    message
}
