//! The terminal session shell.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use aadinet_config::{AppConfig, MemoryVisibility};
use aadinet_core::action::{CommandResponse, DisplayState};
use aadinet_core::error::{MemoryError, SessionError};
use aadinet_core::event::{DomainEvent, EventBus};
use aadinet_core::memory::{MemoryPanel, SessionMemory};
use aadinet_core::message::{Message, SessionId, Transcript};
use aadinet_resolver::CommandResolver;
use chrono::{DateTime, Utc};
use tokio::sync::RwLock;
use tracing::{debug, info, warn};

use crate::dispatcher::{ActionDispatcher, DispatchTimings};

pub const WELCOME_MESSAGE: &str = "🚀 Welcome to AadiNet Neural Interface v3.0.1!";

pub const WELCOME_GREETING: &str = "Hello! I'm Aaditya's AI assistant. I can help you explore projects, view skills, access resume data, and more.\n\n💡 Try commands like 'help' or use the quick access buttons below!";

/// Shown in place of a response when the session cannot process input.
pub const PROCESSING_ERROR_MESSAGE: &str = "⚠️ Neural processing error occurred. Please try again.";

/// Longest input prefix carried on `CommandReceived` events.
const PREVIEW_CHARS: usize = 100;

/// Per-session behaviour knobs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SessionSettings {
    pub visibility: MemoryVisibility,
    pub timings: DispatchTimings,
}

impl SessionSettings {
    pub fn from_config(config: &AppConfig) -> Self {
        Self {
            visibility: config.terminal.memory_visibility,
            timings: DispatchTimings::from_config(&config.terminal),
        }
    }
}

/// Clears the busy flag when dropped, including on cancellation.
struct BusyGuard<'a>(&'a AtomicBool);

impl Drop for BusyGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

/// One visitor's interaction: transcript, memory and display state.
pub struct TerminalSession {
    id: SessionId,
    created_at: DateTime<Utc>,
    resolver: Arc<CommandResolver>,
    memory: Arc<dyn SessionMemory>,
    visibility: MemoryVisibility,
    transcript: RwLock<Transcript>,
    busy: AtomicBool,
    dispatcher: ActionDispatcher,
    event_bus: Arc<EventBus>,
}

impl TerminalSession {
    /// Create a session with default settings and the two welcome entries.
    pub fn new(
        resolver: Arc<CommandResolver>,
        memory: Arc<dyn SessionMemory>,
        event_bus: Arc<EventBus>,
    ) -> Self {
        Self::with_settings(resolver, memory, event_bus, SessionSettings::default())
    }

    pub fn with_settings(
        resolver: Arc<CommandResolver>,
        memory: Arc<dyn SessionMemory>,
        event_bus: Arc<EventBus>,
        settings: SessionSettings,
    ) -> Self {
        let id = SessionId::new();
        let dispatcher = ActionDispatcher::new(id.0.clone(), settings.timings, event_bus.clone());

        let mut transcript = Transcript::new();
        transcript.push(Message::system(WELCOME_MESSAGE));
        transcript.push(Message::ai(WELCOME_GREETING, Default::default()));

        debug!(session_id = %id, memory = memory.name(), "Session created");

        Self {
            id,
            created_at: Utc::now(),
            resolver,
            memory,
            visibility: settings.visibility,
            transcript: RwLock::new(transcript),
            busy: AtomicBool::new(false),
            dispatcher,
            event_bus,
        }
    }

    /// Build a session whose memory backend and timings come from config.
    pub fn from_config(
        config: &AppConfig,
        resolver: Arc<CommandResolver>,
        event_bus: Arc<EventBus>,
    ) -> Result<Self, SessionError> {
        let memory = aadinet_memory::build(&config.memory.backend).ok_or_else(|| {
            SessionError::Memory(MemoryError::Unavailable(format!(
                "unknown memory backend: {}",
                config.memory.backend
            )))
        })?;
        Ok(Self::with_settings(
            resolver,
            memory,
            event_bus,
            SessionSettings::from_config(config),
        ))
    }

    pub fn id(&self) -> &SessionId {
        &self.id
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Whether a resolution is in flight (input disabled).
    pub fn is_busy(&self) -> bool {
        self.busy.load(Ordering::Acquire)
    }

    pub fn display(&self) -> DisplayState {
        self.dispatcher.state()
    }

    pub fn return_to_terminal(&self) {
        self.dispatcher.return_to_terminal();
    }

    /// A copy of the transcript so far.
    pub async fn transcript(&self) -> Vec<Message> {
        self.transcript.read().await.messages().to_vec()
    }

    pub async fn message_count(&self) -> usize {
        self.transcript.read().await.len()
    }

    /// The "Memory Active" summary of earlier inputs.
    pub async fn memory_panel(&self) -> Result<MemoryPanel, SessionError> {
        let entries = self.memory.snapshot().await?;
        Ok(MemoryPanel::from_entries(&entries))
    }

    /// Submit one line of input and return the response.
    ///
    /// The action is dispatched after the busy flag clears, so view switches
    /// and chaos mode start from the moment the response is visible.
    pub async fn submit(&self, input: &str) -> Result<CommandResponse, SessionError> {
        if input.trim().is_empty() {
            return Err(SessionError::EmptyInput);
        }

        if self
            .busy
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            return Err(SessionError::Busy(self.id.to_string()));
        }
        let guard = BusyGuard(&self.busy);

        self.transcript.write().await.push(Message::user(input));
        self.event_bus.publish(DomainEvent::CommandReceived {
            session_id: self.id.to_string(),
            input_preview: input.chars().take(PREVIEW_CHARS).collect(),
            timestamp: Utc::now(),
        });

        match self.resolve(input).await {
            Ok(response) => {
                self.transcript
                    .write()
                    .await
                    .push(Message::ai(response.message.clone(), response.action));
                self.event_bus.publish(DomainEvent::ResponseGenerated {
                    session_id: self.id.to_string(),
                    action: response.action,
                    timestamp: Utc::now(),
                });
                info!(session_id = %self.id, action = %response.action, "Command processed");

                drop(guard);
                self.dispatcher.dispatch(response.action);
                Ok(response)
            }
            Err(e) => {
                warn!(session_id = %self.id, error = %e, "Command processing failed");
                self.transcript
                    .write()
                    .await
                    .push(Message::ai(PROCESSING_ERROR_MESSAGE, Default::default()));
                self.event_bus.publish(DomainEvent::ErrorOccurred {
                    context: format!("session {}", self.id),
                    error_message: e.to_string(),
                    timestamp: Utc::now(),
                });
                Err(e.into())
            }
        }
    }

    async fn resolve(&self, input: &str) -> Result<CommandResponse, MemoryError> {
        let snapshot = match self.visibility {
            MemoryVisibility::ExcludeCurrent => {
                let snapshot = self.memory.snapshot().await?;
                self.memory.append(input).await?;
                snapshot
            }
            MemoryVisibility::IncludeCurrent => {
                self.memory.append(input).await?;
                self.memory.snapshot().await?
            }
        };
        Ok(self.resolver.process(input, &snapshot).await)
    }
}
