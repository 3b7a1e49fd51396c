//! Subcommand implementations. Each returns `Box<dyn Error>` to `main`.

pub mod config_cmd;
pub mod onboard;
pub mod projects;
pub mod serve;
pub mod skills;
pub mod status;
pub mod terminal;
