//! Configuration type definitions

use std::collections::BTreeMap;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::{SkipperError, SkipperResult};

/// Build tool command strings.
///
/// These are passed through verbatim (split on whitespace, no shell); the
/// build tool itself is outside Skipper's responsibility.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BuildConfig {
    #[serde(default = "default_build_command")]
    pub build: String,

    #[serde(default = "default_preview_command")]
    pub preview: String,

    #[serde(default = "default_watch_command")]
    pub watch: String,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            build: default_build_command(),
            preview: default_preview_command(),
            watch: default_watch_command(),
        }
    }
}

fn default_build_command() -> String {
    "npm run build".to_string()
}

fn default_preview_command() -> String {
    "npm run start".to_string()
}

fn default_watch_command() -> String {
    "npm run watch".to_string()
}

/// Deploy configuration: where the build output lives locally and which
/// bucket receives it when no environment is selected.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeployConfig {
    #[serde(default = "default_bucket")]
    pub bucket: String,

    #[serde(default = "default_build_dir")]
    pub build_dir: PathBuf,
}

impl Default for DeployConfig {
    fn default() -> Self {
        Self {
            bucket: default_bucket(),
            build_dir: default_build_dir(),
        }
    }
}

fn default_bucket() -> String {
    "s3://joecmarshall/".to_string()
}

fn default_build_dir() -> PathBuf {
    PathBuf::from("build")
}

/// One named deployment target reachable over SSH.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Environment {
    #[serde(default)]
    pub description: String,

    pub hosts: Vec<String>,
    pub user: String,
    pub key_file: PathBuf,
    pub remote_path: String,
}

impl Environment {
    /// The built-in staging environment.
    pub fn staging() -> Self {
        Self {
            description: "staging environment".to_string(),
            hosts: vec!["138.197.125.212".to_string()],
            user: "root".to_string(),
            key_file: PathBuf::from("~/.ssh/id_rsa"),
            remote_path: "/var/www/html".to_string(),
        }
    }

    /// Deploy targets the first configured host; any others are ignored
    /// until multi-host rollout semantics are settled.
    pub fn primary_host(&self) -> Option<&str> {
        self.hosts.first().map(String::as_str)
    }
}

/// Root configuration structure, mirroring `skipper.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub build: BuildConfig,

    #[serde(default)]
    pub deploy: DeployConfig,

    /// `[env.<name>]` tables. A table named `staging` overwrites the
    /// built-in staging environment wholesale.
    #[serde(default, rename = "env")]
    pub environments: BTreeMap<String, Environment>,
}

impl Config {
    /// Resolve a named environment: config file first, then built-ins.
    pub fn environment(&self, name: &str) -> SkipperResult<Environment> {
        if let Some(env) = self.environments.get(name) {
            return Ok(env.clone());
        }

        if name == "staging" {
            return Ok(Environment::staging());
        }

        Err(SkipperError::UnknownEnvironment {
            name: name.to_string(),
        })
    }

    /// Environment names available for `deploy --env`, built-ins included.
    pub fn environment_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.environments.keys().cloned().collect();
        if !self.environments.contains_key("staging") {
            names.push("staging".to_string());
        }
        names.sort();
        names
    }
}
