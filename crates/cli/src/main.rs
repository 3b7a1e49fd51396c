//! AadiNet CLI: the main entry point.
//!
//! Commands:
//! - `terminal`: Interactive terminal or single-command mode
//! - `serve`    - Start the HTTP gateway
//! - `projects`: Print the project archive
//! - `skills`   - Print the skill diagnostics
//! - `config`   - Show, locate or validate the configuration
//! - `onboard`  - Write the default configuration
//! - `status`   - Show system status

use clap::{Parser, Subcommand};

mod commands;
mod render;

#[derive(Parser)]
#[command(
    name = "aadinet",
    about = "AadiNet: an interactive portfolio terminal",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Open the AadiNet terminal
    Terminal {
        /// Run a single command instead of entering interactive mode
        #[arg(short, long)]
        message: Option<String>,
    },

    /// Start the HTTP gateway server
    Serve {
        /// Override the port
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// List projects
    Projects {
        /// Only show one category (e.g. "AI/ML", "NLP"); "All" shows everything
        #[arg(short, long)]
        category: Option<String>,
    },

    /// Show skill levels
    Skills,

    /// Configuration management
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },

    /// Write the default configuration file
    Onboard,

    /// Show system status
    Status,
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Print the effective configuration
    Show,
    /// Print the configuration file path
    Path,
    /// Validate the configuration file
    Validate,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Initialize tracing
    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter)),
        )
        .with_target(false)
        .init();

    match cli.command {
        Commands::Terminal { message } => commands::terminal::run(message).await?,
        Commands::Serve { port } => commands::serve::run(port).await?,
        Commands::Projects { category } => commands::projects::run(category).await?,
        Commands::Skills => commands::skills::run().await?,
        Commands::Config { action } => match action {
            ConfigAction::Show => commands::config_cmd::show().await?,
            ConfigAction::Path => commands::config_cmd::path().await?,
            ConfigAction::Validate => commands::config_cmd::validate().await?,
        },
        Commands::Onboard => commands::onboard::run().await?,
        Commands::Status => commands::status::run().await?,
    }

    Ok(())
}
