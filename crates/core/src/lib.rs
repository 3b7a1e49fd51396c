//! # AadiNet Core
//!
//! Domain types, traits, and error definitions for the AadiNet terminal.
//! This crate has **no framework dependencies**: it defines the domain model
//! that the resolver, memory, session, gateway and CLI crates build on.
//!
//! ## Design Philosophy
//!
//! Every seam is defined here as a type or trait. Implementations live in
//! their respective crates:
//! - `SessionMemory` is implemented by `aadinet-memory`
//! - `Channel` is implemented by `aadinet-channels`
//! - `CommandResponse` is produced by `aadinet-resolver` and consumed by
//!   `aadinet-session`

pub mod action;
pub mod channel;
pub mod error;
pub mod event;
pub mod memory;
pub mod message;

// Re-export key types at crate root for ergonomics
pub use action::{ActionKind, CommandEntry, CommandResponse, DisplayState, View};
pub use channel::{Channel, ChannelId, ChannelMessage};
pub use error::Error;
pub use event::{DomainEvent, EventBus};
pub use memory::{MemoryPanel, SessionMemory};
pub use message::{Message, Role, SessionId, Transcript};
