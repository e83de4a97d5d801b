use anyhow::Result;

use skipper::process::{split_command, CommandRunner};
use skipper::Config;

/// Run the build tool's watch mode. Blocks for the lifetime of the watcher.
pub fn cmd_watch(runner: &dyn CommandRunner, config: &Config) -> Result<()> {
    let (program, args) = split_command(&config.build.watch);
    runner.run(&program, &args)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::testing::RecordingRunner;

    #[test]
    fn watch_issues_exactly_the_configured_command() {
        let runner = RecordingRunner::new();
        cmd_watch(&runner, &Config::default()).unwrap();

        assert_eq!(runner.calls(), vec![vec!["npm", "run", "watch"]]);
    }
}
