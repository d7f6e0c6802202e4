//! Shell completion generation.

use clap::CommandFactory as _;
use clap_complete::generate;
use error::Result;

use crate::commands::CompletionsArgs;

/// Writes completions for the requested shell to stdout.
pub fn completions(args: &CompletionsArgs) -> Result<()> {
    let mut cmd = crate::Cli::command();
    let name = cmd.get_name().to_string();
    generate(args.shell, &mut cmd, name, &mut std::io::stdout());
    Ok(())
}
