use anyhow::Result;

use skipper::process::{split_command, CommandRunner};
use skipper::{ui, Config};

pub fn cmd_build(runner: &dyn CommandRunner, config: &Config) -> Result<()> {
    ui::success("Building site...");

    let (program, args) = split_command(&config.build.build);
    runner.run(&program, &args)?;

    ui::success("Build complete.");
    Ok(())
}
