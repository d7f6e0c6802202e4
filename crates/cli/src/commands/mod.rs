//! # CLI Commands

pub mod completions;
pub mod migrate;
pub mod validate;

use clap::Args;

/// Arguments for the `serve` command
#[derive(Args, Debug)]
pub struct ServeArgs {
    /// Server host to bind to
    #[arg(long, env = "UPNEXUS_HOST", default_value = "0.0.0.0")]
    pub host: String,

    /// Server port to bind to
    #[arg(short, long, env = "UPNEXUS_PORT", default_value = "3000")]
    pub port: u16,
}

/// Arguments for the `migrate` command
#[derive(Args, Debug)]
pub struct MigrateArgs {
    /// Roll back the last migration instead of applying pending ones
    #[arg(long)]
    pub rollback: bool,
}

/// Arguments for the `completions` command
#[derive(Args, Debug)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: clap_complete::Shell,
}
