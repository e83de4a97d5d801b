//! External command execution
//!
//! Every task in Skipper is a thin wrapper around one external process
//! (`npm`, `aws`, `scp`). The [`CommandRunner`] trait is the single seam
//! through which those processes are started, so tests can substitute a
//! recorder and assert the exact argv a task issues, and `--dry-run` can
//! substitute a printer.

use std::process::{Command, Stdio};

use crate::error::{SkipperError, SkipperResult};
use crate::ui;

/// Strategy for running an external command to completion.
///
/// Implementations block until the child exits. There are no timeouts and
/// no retries; a non-zero exit surfaces as [`SkipperError::CommandFailed`].
pub trait CommandRunner {
    /// Run `program` with `args`, inheriting the parent's stdio.
    fn run(&self, program: &str, args: &[String]) -> SkipperResult<()>;
}

/// Runs commands for real via `std::process::Command`.
pub struct SystemRunner {
    echo: bool,
}

impl SystemRunner {
    /// `echo` prints the command line to stderr before running it (`-v`).
    pub fn new(echo: bool) -> Self {
        Self { echo }
    }
}

impl CommandRunner for SystemRunner {
    fn run(&self, program: &str, args: &[String]) -> SkipperResult<()> {
        if self.echo {
            eprintln!("+ {}", render_command(program, args));
        }

        let status = Command::new(program)
            .args(args)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .map_err(|e| SkipperError::Spawn {
                program: program.to_string(),
                source: e,
            })?;

        if status.success() {
            return Ok(());
        }

        match status.code() {
            Some(code) => Err(SkipperError::CommandFailed {
                program: program.to_string(),
                code,
            }),
            None => Err(SkipperError::CommandKilled {
                program: program.to_string(),
            }),
        }
    }
}

/// Prints the command instead of running it (`--dry-run`).
pub struct DryRunRunner;

impl CommandRunner for DryRunRunner {
    fn run(&self, program: &str, args: &[String]) -> SkipperResult<()> {
        println!(
            "{}",
            ui::dim(&format!("would run: {}", render_command(program, args)))
        );
        Ok(())
    }
}

/// Split a configured command string like `npm run build` into program and
/// args. Splitting is on whitespace only; command strings never go through
/// a shell.
pub fn split_command(command: &str) -> (String, Vec<String>) {
    let mut parts = command.split_whitespace().map(String::from);
    let program = parts.next().unwrap_or_default();
    (program, parts.collect())
}

fn render_command(program: &str, args: &[String]) -> String {
    let mut line = program.to_string();
    for arg in args {
        line.push(' ');
        line.push_str(arg);
    }
    line
}

/// Records every issued command without running anything. Used by unit
/// tests to assert which argv a task produces.
#[cfg(test)]
pub struct RecordingRunner {
    calls: std::cell::RefCell<Vec<Vec<String>>>,
}

#[cfg(test)]
impl RecordingRunner {
    pub fn new() -> Self {
        Self {
            calls: std::cell::RefCell::new(Vec::new()),
        }
    }

    /// All recorded invocations, each as `[program, arg...]`.
    pub fn calls(&self) -> Vec<Vec<String>> {
        self.calls.borrow().clone()
    }
}

#[cfg(test)]
impl CommandRunner for RecordingRunner {
    fn run(&self, program: &str, args: &[String]) -> SkipperResult<()> {
        let mut call = vec![program.to_string()];
        call.extend(args.iter().cloned());
        self.calls.borrow_mut().push(call);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn split_command_basic() {
        let (program, args) = split_command("npm run build");
        assert_eq!(program, "npm");
        assert_eq!(args, vec!["run".to_string(), "build".to_string()]);
    }

    #[test]
    fn split_command_single_word() {
        let (program, args) = split_command("make");
        assert_eq!(program, "make");
        assert!(args.is_empty());
    }

    #[test]
    fn split_command_collapses_whitespace() {
        let (program, args) = split_command("  npm   run\twatch ");
        assert_eq!(program, "npm");
        assert_eq!(args, vec!["run".to_string(), "watch".to_string()]);
    }

    #[test]
    fn split_command_empty() {
        let (program, args) = split_command("");
        assert_eq!(program, "");
        assert!(args.is_empty());
    }

    #[test]
    fn render_command_joins_with_spaces() {
        let args = vec!["s3".to_string(), "cp".to_string()];
        assert_eq!(render_command("aws", &args), "aws s3 cp");
    }

    #[test]
    fn recording_runner_captures_argv() {
        let runner = RecordingRunner::new();
        runner
            .run("npm", &["run".to_string(), "build".to_string()])
            .unwrap();
        assert_eq!(runner.calls(), vec![vec!["npm", "run", "build"]]);
    }

    proptest! {
        /// Splitting a command built from single-space-joined tokens
        /// recovers exactly those tokens.
        #[test]
        fn split_command_roundtrips_tokens(
            tokens in proptest::collection::vec("[a-z0-9./-]{1,8}", 1..6)
        ) {
            let command = tokens.join(" ");
            let (program, args) = split_command(&command);
            prop_assert_eq!(&program, &tokens[0]);
            prop_assert_eq!(&args[..], &tokens[1..]);
        }
    }
}
