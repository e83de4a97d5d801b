//! Secure-copy transfer to a remote environment
//!
//! Copies every top-level entry of the build directory to
//! `user@host:remote_path` in a single `scp -r` invocation. The entry list
//! is expanded here rather than by a shell, so nothing is quoted or
//! globbed behind Skipper's back.

use std::path::{Path, PathBuf};

use crate::config::Environment;
use crate::error::{SkipperError, SkipperResult};
use crate::process::CommandRunner;

use super::{expand_tilde, Transfer};

/// Transfer strategy using scp against one environment.
///
/// Only the environment's first host is targeted; remaining hosts are
/// ignored until multi-host rollout is specified.
pub struct ScpTransfer<'a> {
    env: &'a Environment,
    env_name: String,
}

impl<'a> ScpTransfer<'a> {
    pub fn new(env_name: impl Into<String>, env: &'a Environment) -> Self {
        Self {
            env,
            env_name: env_name.into(),
        }
    }

    /// Top-level build directory entries, sorted so the issued command is
    /// deterministic.
    fn collect_entries(build_dir: &Path) -> SkipperResult<Vec<PathBuf>> {
        let mut entries: Vec<PathBuf> = std::fs::read_dir(build_dir)?
            .collect::<Result<Vec<_>, _>>()?
            .into_iter()
            .map(|e| e.path())
            .collect();
        entries.sort();
        Ok(entries)
    }
}

impl Transfer for ScpTransfer<'_> {
    fn name(&self) -> &'static str {
        "scp"
    }

    fn push(&self, runner: &dyn CommandRunner, build_dir: &Path) -> SkipperResult<()> {
        let host = self
            .env
            .primary_host()
            .ok_or_else(|| SkipperError::NoHosts {
                name: self.env_name.clone(),
            })?;

        if !build_dir.is_dir() {
            return Err(SkipperError::BuildDirMissing {
                path: build_dir.to_path_buf(),
            });
        }

        let entries = Self::collect_entries(build_dir)?;
        if entries.is_empty() {
            // Nothing to transfer
            return Ok(());
        }

        let key_file = expand_tilde(&self.env.key_file);

        let mut args = vec![
            "-i".to_string(),
            key_file.display().to_string(),
            "-r".to_string(),
        ];
        for entry in &entries {
            args.push(entry.display().to_string());
        }
        args.push(format!(
            "{}@{}:{}",
            self.env.user, host, self.env.remote_path
        ));

        runner.run("scp", &args)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::process::RecordingRunner;
    use std::fs;
    use tempfile::tempdir;

    fn staging_with_plain_key() -> Environment {
        let mut env = Environment::staging();
        // Avoid home-directory lookups in assertions
        env.key_file = PathBuf::from("/keys/id_rsa");
        env
    }

    #[test]
    fn scp_transfer_name() {
        let env = Environment::staging();
        assert_eq!(ScpTransfer::new("staging", &env).name(), "scp");
    }

    #[test]
    fn push_issues_single_scp_with_sorted_entries() {
        let dir = tempdir().unwrap();
        let build_dir = dir.path().join("build");
        fs::create_dir(&build_dir).unwrap();
        fs::write(build_dir.join("index.html"), "<html></html>").unwrap();
        fs::create_dir(build_dir.join("css")).unwrap();
        fs::write(build_dir.join("css").join("site.css"), "body{}").unwrap();

        let env = staging_with_plain_key();
        let runner = RecordingRunner::new();
        ScpTransfer::new("staging", &env)
            .push(&runner, &build_dir)
            .unwrap();

        let calls = runner.calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(
            calls[0],
            vec![
                "scp".to_string(),
                "-i".to_string(),
                "/keys/id_rsa".to_string(),
                "-r".to_string(),
                build_dir.join("css").display().to_string(),
                build_dir.join("index.html").display().to_string(),
                "root@138.197.125.212:/var/www/html".to_string(),
            ]
        );
    }

    #[test]
    fn push_targets_first_host_only() {
        let dir = tempdir().unwrap();
        let build_dir = dir.path().join("build");
        fs::create_dir(&build_dir).unwrap();
        fs::write(build_dir.join("index.html"), "x").unwrap();

        let mut env = staging_with_plain_key();
        env.hosts.push("10.0.0.2".to_string());

        let runner = RecordingRunner::new();
        ScpTransfer::new("staging", &env)
            .push(&runner, &build_dir)
            .unwrap();

        let calls = runner.calls();
        assert_eq!(calls.len(), 1);
        let dest = calls[0].last().unwrap();
        assert_eq!(dest, "root@138.197.125.212:/var/www/html");
    }

    #[test]
    fn push_without_hosts_fails() {
        let mut env = staging_with_plain_key();
        env.hosts.clear();

        let runner = RecordingRunner::new();
        let err = ScpTransfer::new("staging", &env)
            .push(&runner, Path::new("build"))
            .unwrap_err();

        assert!(matches!(err, SkipperError::NoHosts { .. }));
        assert!(runner.calls().is_empty());
    }

    #[test]
    fn push_without_build_dir_fails() {
        let dir = tempdir().unwrap();
        let missing = dir.path().join("build");

        let env = staging_with_plain_key();
        let runner = RecordingRunner::new();
        let err = ScpTransfer::new("staging", &env)
            .push(&runner, &missing)
            .unwrap_err();

        assert!(matches!(err, SkipperError::BuildDirMissing { .. }));
        assert!(runner.calls().is_empty());
    }

    #[test]
    fn push_empty_build_dir_issues_nothing() {
        let dir = tempdir().unwrap();
        let build_dir = dir.path().join("build");
        fs::create_dir(&build_dir).unwrap();

        let env = staging_with_plain_key();
        let runner = RecordingRunner::new();
        ScpTransfer::new("staging", &env)
            .push(&runner, &build_dir)
            .unwrap();

        assert!(runner.calls().is_empty());
    }

    #[test]
    fn push_expands_tilde_in_key_file() {
        let dir = tempdir().unwrap();
        let build_dir = dir.path().join("build");
        fs::create_dir(&build_dir).unwrap();
        fs::write(build_dir.join("index.html"), "x").unwrap();

        let env = Environment::staging();
        let runner = RecordingRunner::new();
        ScpTransfer::new("staging", &env)
            .push(&runner, &build_dir)
            .unwrap();

        let calls = runner.calls();
        let key_arg = &calls[0][2];
        if dirs::home_dir().is_some() {
            assert!(!key_arg.starts_with('~'));
            assert!(key_arg.ends_with(".ssh/id_rsa"));
        }
    }
}
