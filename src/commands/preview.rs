use anyhow::Result;

use skipper::process::{split_command, CommandRunner};
use skipper::Config;

/// Start the local preview server. Blocks until the server exits.
pub fn cmd_preview(runner: &dyn CommandRunner, config: &Config) -> Result<()> {
    let (program, args) = split_command(&config.build.preview);
    runner.run(&program, &args)?;
    Ok(())
}
