//! Error types for the AadiNet domain.
//!
//! Uses `thiserror` for ergonomic error definitions.
//! Each bounded context has its own error variant. The command resolver is
//! total and has no error type of its own.

use thiserror::Error;

/// The top-level error type for all AadiNet operations.
#[derive(Debug, Error)]
pub enum Error {
    // --- Session errors ---
    #[error("Session error: {0}")]
    Session(#[from] SessionError),

    // --- Memory errors ---
    #[error("Memory error: {0}")]
    Memory(#[from] MemoryError),

    // --- Channel errors ---
    #[error("Channel error: {0}")]
    Channel(#[from] ChannelError),

    // --- Configuration errors ---
    #[error("Configuration error: {message}")]
    Config { message: String },
}

// --- Bounded context errors ---

#[derive(Debug, Clone, Error)]
pub enum SessionError {
    #[error("Input is empty")]
    EmptyInput,

    #[error("Session {0} is still processing the previous command")]
    Busy(String),

    #[error("Session not found: {0}")]
    NotFound(String),

    #[error("Session memory unavailable: {0}")]
    Memory(#[from] MemoryError),
}

#[derive(Debug, Clone, Error)]
pub enum MemoryError {
    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Memory backend not available: {0}")]
    Unavailable(String),
}

#[derive(Debug, Error)]
pub enum ChannelError {
    #[error("Channel not configured: {0}")]
    NotConfigured(String),

    #[error("Channel connection lost: {0}")]
    ConnectionLost(String),
}
