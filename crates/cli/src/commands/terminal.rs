//! `aadinet terminal`: Interactive or single-command terminal mode.

use std::io::Write;
use std::sync::Arc;

use aadinet_channels::CliChannel;
use aadinet_config::AppConfig;
use aadinet_core::action::{ActionKind, View};
use aadinet_core::channel::Channel;
use aadinet_core::event::{DomainEvent, EventBus};
use aadinet_core::message::Message;
use aadinet_resolver::{CommandResolver, delay, quick_commands};
use aadinet_session::{PROCESSING_ERROR_MESSAGE, TerminalSession};
use tokio::sync::broadcast::error::RecvError;
use tracing::debug;

use crate::render;

pub async fn run(message: Option<String>) -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load().map_err(|e| format!("Failed to load config: {e}"))?;

    let resolver = Arc::new(
        CommandResolver::new().with_delay(delay::from_millis(config.terminal.processing_delay_ms)),
    );
    let event_bus = Arc::new(EventBus::default());
    let session = TerminalSession::from_config(&config, resolver, event_bus.clone())?;

    match message {
        Some(msg) => single(&session, &msg).await,
        None => interactive(&session, &event_bus).await,
    }
}

/// Run one command, print the reply and whatever panel it opens.
async fn single(session: &TerminalSession, input: &str) -> Result<(), Box<dyn std::error::Error>> {
    let response = session.submit(input).await?;
    println!("{}", render::message(&Message::ai(&response.message, response.action)));

    if let Some(panel) = action_panel(response.action) {
        println!();
        println!("{panel}");
    }
    Ok(())
}

async fn interactive(
    session: &TerminalSession,
    event_bus: &EventBus,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut events = event_bus.subscribe();

    println!();
    println!("  ╔══════════════════════════════════════════════╗");
    println!("  ║        AadiNet Neural Interface v3.0.1        ║");
    println!("  ╚══════════════════════════════════════════════╝");
    println!();
    for entry in session.transcript().await {
        println!("{}", render::message(&entry));
        println!();
    }
    println!("  Quick commands:");
    for (i, quick) in quick_commands().iter().enumerate() {
        println!("    :{}  {:<22} {}", i + 1, quick.label, quick.command);
    }
    println!("  Type 'exit' or Ctrl+D to quit.");
    println!();

    let channel = CliChannel::new();
    let mut rx = channel.start().await.map_err(|e| format!("Channel error: {e}"))?;
    let session_id = session.id().to_string();

    prompt()?;
    loop {
        tokio::select! {
            line = rx.recv() => {
                let Some(line) = line else { break };
                let chan_msg = match line {
                    Ok(chan_msg) => chan_msg,
                    Err(e) => {
                        eprintln!("  [Channel Error] {e}");
                        break;
                    }
                };

                if session.display().view != View::Terminal {
                    session.return_to_terminal();
                }

                channel.show_processing().await?;
                match session.submit(&chan_msg.content).await {
                    Ok(response) => {
                        let reply =
                            render::message(&Message::ai(&response.message, response.action));
                        if session.display().chaos_mode {
                            println!("{}", render::glitch(&reply));
                        } else {
                            println!("{reply}");
                        }
                    }
                    Err(e) => {
                        debug!(error = %e, "Submit failed");
                        let error = Message::ai(PROCESSING_ERROR_MESSAGE, ActionKind::None);
                        println!("{}", render::message(&error));
                    }
                }

                if let Ok(panel) = session.memory_panel().await {
                    let footer = render::memory_panel(&panel);
                    if !footer.is_empty() {
                        println!();
                        println!("{footer}");
                    }
                }
                println!();
                prompt()?;
            }
            event = events.recv() => {
                match event {
                    Ok(event) => {
                        if let Some(out) = event_output(&event, &session_id) {
                            println!();
                            println!("{out}");
                            println!();
                            prompt()?;
                        }
                    }
                    Err(RecvError::Lagged(skipped)) => debug!(skipped, "Event stream lagged"),
                    Err(RecvError::Closed) => break,
                }
            }
        }
    }

    println!();
    println!("  Session closed. Goodbye! 👋");
    println!();
    Ok(())
}

fn prompt() -> std::io::Result<()> {
    print!("  user@terminal $ ");
    std::io::stdout().flush()
}

/// What the single-command mode shows after the reply, if anything.
fn action_panel(action: ActionKind) -> Option<String> {
    match action {
        ActionKind::ShowProjects => Some(render::projects(aadinet_catalog::projects())),
        ActionKind::ShowSkills => Some(render::skills(
            aadinet_catalog::skills(),
            &aadinet_catalog::summary(),
        )),
        ActionKind::ChaosMode => Some(format!("  ⚡ {}", render::glitch(render::CHAOS_BANNER))),
        ActionKind::None | ActionKind::ShowResume => None,
    }
}

/// What the interactive terminal prints for a display-state event of this session.
fn event_output(event: &DomainEvent, session_id: &str) -> Option<String> {
    if event.session_id() != Some(session_id) {
        return None;
    }
    match event {
        DomainEvent::ViewChanged { view: View::Projects, .. } => {
            Some(render::projects(aadinet_catalog::projects()))
        }
        DomainEvent::ViewChanged { view: View::Skills, .. } => Some(render::skills(
            aadinet_catalog::skills(),
            &aadinet_catalog::summary(),
        )),
        DomainEvent::ChaosModeChanged { active: true, .. } => {
            Some(format!("  ⚡ {}", render::glitch(render::CHAOS_BANNER)))
        }
        DomainEvent::ChaosModeChanged { active: false, .. } => {
            Some("  ✓ System stabilized.".to_string())
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn panels_follow_actions() {
        assert!(action_panel(ActionKind::ShowProjects).unwrap().contains("PROJECT MODULES"));
        assert!(action_panel(ActionKind::ShowSkills).unwrap().contains("SKILL DIAGNOSTICS"));
        assert!(action_panel(ActionKind::ChaosMode).is_some());
        assert!(action_panel(ActionKind::ShowResume).is_none());
        assert!(action_panel(ActionKind::None).is_none());
    }

    #[test]
    fn events_of_other_sessions_are_ignored() {
        let event = DomainEvent::ViewChanged {
            session_id: "other".into(),
            view: View::Projects,
            timestamp: Utc::now(),
        };
        assert!(event_output(&event, "mine").is_none());
        assert!(event_output(&event, "other").is_some());
    }

    #[test]
    fn returning_to_terminal_prints_nothing() {
        let event = DomainEvent::ViewChanged {
            session_id: "s".into(),
            view: View::Terminal,
            timestamp: Utc::now(),
        };
        assert!(event_output(&event, "s").is_none());
    }

    #[test]
    fn chaos_off_prints_stabilized() {
        let event = DomainEvent::ChaosModeChanged {
            session_id: "s".into(),
            active: false,
            timestamp: Utc::now(),
        };
        assert_eq!(event_output(&event, "s").unwrap(), "  ✓ System stabilized.");
    }
}
