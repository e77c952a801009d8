use std::sync::Arc;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use termfolio_core::AppConfig;

mod commands;

#[derive(Parser)]
#[command(name = "termfolio")]
#[command(author, version, about = "A personal portfolio for the terminal")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the TUI
    Run,
    /// Send a contact message through the configured relay
    Send {
        /// Sender name
        #[arg(short = 'n', long)]
        name: String,
        /// Sender email address
        #[arg(short = 'e', long)]
        email: String,
        /// Message subject
        #[arg(short = 's', long)]
        subject: String,
        /// Message body
        #[arg(short = 'm', long)]
        message: String,
    },
    /// Show the available theme palettes
    Themes,
    /// Show or initialize the configuration
    Config {
        /// Write a default config file if none exists
        #[arg(long)]
        init: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();

    let cli = Cli::parse();

    // Load configuration
    let config = Arc::new(AppConfig::load()?);

    match cli.command {
        Some(Commands::Run) | None => commands::run::run(config).await,
        Some(Commands::Send {
            name,
            email,
            subject,
            message,
        }) => commands::send::run(&config, name, email, subject, message).await,
        Some(Commands::Themes) => commands::themes::run(&config),
        Some(Commands::Config { init }) => commands::config::run(&config, init),
    }
}
