//! # UP-NEXUS CLI
//!
//! Command-line interface for the UP-NEXUS platform.
//!
//! ## Usage
//!
//! ```bash
//! up-nexus serve    # Start the API server (runs migrations automatically)
//! up-nexus migrate  # Run database migrations
//! up-nexus validate # Verify configuration
//! up-nexus --help   # Show help
//! ```

mod commands;
mod config;
mod server;

use clap::{Parser, Subcommand};
use commands::{CompletionsArgs, MigrateArgs, ServeArgs};
use error::Result;

/// UP-NEXUS - Algeria's startup ecosystem platform
#[derive(Parser, Debug)]
#[command(name = "up-nexus")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Log level (debug, info, warn, error)
    #[arg(short = 'L', long, env = "RUST_LOG", default_value = "info")]
    log_level: String,

    /// Output format (json, pretty, compact)
    #[arg(short, long, env = "UPNEXUS_LOG_FORMAT", default_value = "pretty")]
    log_format: String,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Start the API server
    Serve(ServeArgs),

    /// Run database migrations
    Migrate(MigrateArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),

    /// Verify configuration
    Validate,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    logging::init(&cli.log_level, &cli.log_format, None)
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {e}"))?;

    match cli.command {
        Commands::Serve(args) => {
            let config = config::AppConfig::from_env()?;
            server::serve(&config, &args).await?;
        },
        Commands::Migrate(args) => {
            let config = config::AppConfig::from_env()?;
            commands::migrate::migrate(&config, &args).await?;
        },
        Commands::Completions(args) => commands::completions::completions(&args)?,
        Commands::Validate => commands::validate::validate()?,
    }

    Ok(())
}
