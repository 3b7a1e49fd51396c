//! CLI channel: interactive terminal input.
//!
//! Reads lines from stdin (or any async reader), writes responses to stdout.
//! Used for `aadinet terminal` interactive mode.

use aadinet_core::channel::{Channel, ChannelId, ChannelMessage};
use aadinet_core::error::ChannelError;
use aadinet_resolver::quick_commands;
use async_trait::async_trait;
use tokio::io::{self, AsyncBufReadExt, AsyncRead, BufReader};
use tokio::sync::{Mutex, mpsc};
use tracing::debug;

/// What a single input line means to the terminal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineAction {
    /// Blank line
    Skip,
    /// Leave the terminal
    Exit,
    /// Text to submit to the session
    Submit { content: String, quick_command: bool },
}

/// Classify one raw line.
///
/// `:N` selects the N-th quick command (1-based). Anything else is
/// submitted as typed, including out-of-range shortcuts.
pub fn parse_line(line: &str) -> LineAction {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return LineAction::Skip;
    }

    if matches!(trimmed, "exit" | "quit" | "/exit" | "/quit" | ":q") {
        return LineAction::Exit;
    }

    if let Some(index) = trimmed.strip_prefix(':').and_then(|n| n.parse::<usize>().ok()) {
        if let Some(quick) = index.checked_sub(1).and_then(|i| quick_commands().get(i)) {
            return LineAction::Submit {
                content: quick.command.to_string(),
                quick_command: true,
            };
        }
    }

    LineAction::Submit {
        content: line.to_string(),
        quick_command: false,
    }
}

type Reader = Box<dyn AsyncRead + Send + Unpin>;

/// Interactive CLI channel for the terminal.
pub struct CliChannel {
    id: ChannelId,
    reader: Mutex<Option<Reader>>,
}

impl CliChannel {
    /// A channel over the process's stdin.
    pub fn new() -> Self {
        Self::with_reader(io::stdin())
    }

    /// A channel over any async reader.
    pub fn with_reader(reader: impl AsyncRead + Send + Unpin + 'static) -> Self {
        Self {
            id: ChannelId("cli".into()),
            reader: Mutex::new(Some(Box::new(reader))),
        }
    }
}

impl Default for CliChannel {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Channel for CliChannel {
    fn name(&self) -> &str {
        "cli"
    }

    fn id(&self) -> &ChannelId {
        &self.id
    }

    async fn start(
        &self,
    ) -> Result<mpsc::Receiver<Result<ChannelMessage, ChannelError>>, ChannelError> {
        let reader = self
            .reader
            .lock()
            .await
            .take()
            .ok_or_else(|| ChannelError::NotConfigured("cli channel already started".into()))?;

        let (tx, rx) = mpsc::channel(32);
        let channel_id = self.id.clone();

        tokio::spawn(async move {
            let mut lines = BufReader::new(reader).lines();

            loop {
                match lines.next_line().await {
                    Ok(Some(line)) => match parse_line(&line) {
                        LineAction::Skip => continue,
                        LineAction::Exit => break,
                        LineAction::Submit {
                            content,
                            quick_command,
                        } => {
                            let msg = ChannelMessage {
                                channel_id: channel_id.clone(),
                                sender_id: "local_user".into(),
                                content,
                                quick_command,
                            };

                            if tx.send(Ok(msg)).await.is_err() {
                                break;
                            }
                        }
                    },
                    Ok(None) => break, // EOF (Ctrl+D)
                    Err(e) => {
                        let _ = tx.send(Err(ChannelError::ConnectionLost(e.to_string()))).await;
                        break;
                    }
                }
            }
            debug!("CLI input closed");
        });

        Ok(rx)
    }

    async fn send(&self, content: &str) -> Result<(), ChannelError> {
        println!("{content}");
        Ok(())
    }

    async fn show_processing(&self) -> Result<(), ChannelError> {
        println!("⏳ Analyzing request...");
        Ok(())
    }
}
