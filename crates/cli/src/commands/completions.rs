//! # CLI Completions Command
//!
//! Shell completions generation for the HNTB CLI.

use std::io::Write;

use clap::Command;
use clap_complete::Shell;
use error::Result;

/// Writes shell completions for `cmd` to `out`; a failed flush is an `Io` error
pub fn completions(shell: Shell, cmd: &mut Command, out: &mut dyn Write) -> Result<()> {
    let name = cmd.get_name().to_string();
    clap_complete::generate(shell, cmd, name, out);
    out.flush()?;
    Ok(())
}
