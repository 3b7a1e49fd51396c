//! Input channels for AadiNet.
//!
//! A channel feeds lines of visitor input into a terminal session and shows
//! the responses. The HTTP gateway is not a channel; it drives sessions
//! directly.
//!
//! Available channels:
//! - **CLI**: Interactive terminal (stdin/stdout) with `:1`..`:4` quick commands

pub mod cli;

pub use cli::{CliChannel, LineAction, parse_line};
