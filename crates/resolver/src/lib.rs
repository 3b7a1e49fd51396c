//! The command resolver: the heart of the AadiNet terminal.
//!
//! Every input resolves to a `{message, action}` pair by walking a fixed
//! priority chain:
//!
//! 1. **Exact match** on the normalized input against the trigger table
//! 2. **Memory-conditioned** follow-ups ("more", "tell me more", "details")
//! 3. **Topic fallback** by substring (projects, skills, résumé, contact, secrets)
//! 4. **Greeting**
//! 5. **Default** reply echoing the input and recent memory
//!
//! Resolution is pure: the same `(input, memory)` always gives the same
//! response, and memory is never touched here.

pub mod delay;
pub mod resolver;
pub mod table;

pub use delay::{FixedDelay, NoDelay, ProcessingDelay};
pub use resolver::{CommandResolver, MatchRule};
pub use table::{CommandTable, QuickCommand, quick_commands};
