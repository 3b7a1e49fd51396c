//! # AadiNet Session
//!
//! The shell around the resolver. A [`TerminalSession`] owns one visitor's
//! transcript, memory and display state:
//!
//! 1. Receive raw input (rejected while a resolution is in flight)
//! 2. Record it in the transcript and session memory
//! 3. Resolve it against the memory snapshot
//! 4. Append the response and hand its action to the [`ActionDispatcher`]

pub mod dispatcher;
pub mod terminal;

pub use dispatcher::{ActionDispatcher, DispatchTimings};
pub use terminal::{
    PROCESSING_ERROR_MESSAGE, SessionSettings, TerminalSession, WELCOME_GREETING, WELCOME_MESSAGE,
};
