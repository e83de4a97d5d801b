//! Configuration module for Skipper
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Project config (`skipper.toml` at the project root)
//! 3. Built-in defaults (lowest priority)
//!
//! Environments are plain values resolved here and passed by reference into
//! the deploy command; nothing in the process holds environment state.

mod loader;
mod types;

pub use loader::{load_or_default, load_with_warnings, ConfigWarning};
pub use types::{BuildConfig, Config, DeployConfig, Environment};

/// Project config file name, looked up at the project root.
pub const CONFIG_FILE: &str = "skipper.toml";
