//! Turns response actions into display state changes.
//!
//! View switches and the chaos revert happen on spawned tokio tasks. Each
//! kind of transition carries a generation counter: a task only applies its
//! change if no newer request of the same kind arrived while it slept.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use aadinet_config::TerminalConfig;
use aadinet_core::action::{ActionKind, DisplayState, View};
use aadinet_core::event::{DomainEvent, EventBus};
use chrono::Utc;
use tracing::debug;

/// Delays applied to dispatched actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DispatchTimings {
    pub view_switch_delay: Duration,
    pub chaos_duration: Duration,
}

impl DispatchTimings {
    pub fn from_config(config: &TerminalConfig) -> Self {
        Self {
            view_switch_delay: config.view_switch_delay(),
            chaos_duration: config.chaos_duration(),
        }
    }
}

impl Default for DispatchTimings {
    fn default() -> Self {
        Self::from_config(&TerminalConfig::default())
    }
}

struct Inner {
    session_id: String,
    state: Mutex<DisplayState>,
    view_generation: AtomicU64,
    chaos_generation: AtomicU64,
    timings: DispatchTimings,
    event_bus: Arc<EventBus>,
}

impl Inner {
    fn read(&self) -> DisplayState {
        *self.state.lock().unwrap_or_else(|e| e.into_inner())
    }

    fn set_view(&self, view: View) {
        let changed = {
            let mut state = self.state.lock().unwrap_or_else(|e| e.into_inner());
            let changed = state.view != view;
            state.view = view;
            changed
        };
        if changed {
            debug!(session_id = %self.session_id, %view, "View changed");
            self.event_bus.publish(DomainEvent::ViewChanged {
                session_id: self.session_id.clone(),
                view,
                timestamp: Utc::now(),
            });
        }
    }

    fn set_chaos(&self, active: bool) {
        let changed = {
            let mut state = self.state.lock().unwrap_or_else(|e| e.into_inner());
            let changed = state.chaos_mode != active;
            state.chaos_mode = active;
            changed
        };
        if changed {
            debug!(session_id = %self.session_id, active, "Chaos mode changed");
            self.event_bus.publish(DomainEvent::ChaosModeChanged {
                session_id: self.session_id.clone(),
                active,
                timestamp: Utc::now(),
            });
        }
    }
}

/// Owns one session's [`DisplayState`]. Cheap to clone.
#[derive(Clone)]
pub struct ActionDispatcher {
    inner: Arc<Inner>,
}

impl ActionDispatcher {
    pub fn new(
        session_id: impl Into<String>,
        timings: DispatchTimings,
        event_bus: Arc<EventBus>,
    ) -> Self {
        Self {
            inner: Arc::new(Inner {
                session_id: session_id.into(),
                state: Mutex::new(DisplayState::default()),
                view_generation: AtomicU64::new(0),
                chaos_generation: AtomicU64::new(0),
                timings,
                event_bus,
            }),
        }
    }

    /// The current display state.
    pub fn state(&self) -> DisplayState {
        self.inner.read()
    }

    pub fn timings(&self) -> DispatchTimings {
        self.inner.timings
    }

    /// Apply an action. Must be called inside a tokio runtime.
    pub fn dispatch(&self, action: ActionKind) {
        match action {
            ActionKind::ShowProjects => self.schedule_view(View::Projects),
            ActionKind::ShowSkills => self.schedule_view(View::Skills),
            ActionKind::ChaosMode => self.start_chaos(),
            ActionKind::ShowResume | ActionKind::None => {}
        }
    }

    /// Switch back to the terminal now, cancelling any pending view switch.
    pub fn return_to_terminal(&self) {
        self.inner.view_generation.fetch_add(1, Ordering::SeqCst);
        self.inner.set_view(View::Terminal);
    }

    fn schedule_view(&self, view: View) {
        let generation = self.inner.view_generation.fetch_add(1, Ordering::SeqCst) + 1;
        let inner = Arc::clone(&self.inner);
        tokio::spawn(async move {
            tokio::time::sleep(inner.timings.view_switch_delay).await;
            if inner.view_generation.load(Ordering::SeqCst) == generation {
                inner.set_view(view);
            }
        });
    }

    fn start_chaos(&self) {
        let generation = self.inner.chaos_generation.fetch_add(1, Ordering::SeqCst) + 1;
        self.inner.set_chaos(true);

        let inner = Arc::clone(&self.inner);
        tokio::spawn(async move {
            tokio::time::sleep(inner.timings.chaos_duration).await;
            if inner.chaos_generation.load(Ordering::SeqCst) == generation {
                inner.set_chaos(false);
            }
        });
    }
}
