//! Skipper - build and deploy tool for static websites
//!
//! Wraps the build/preview/watch lifecycle of a static site and pushes the
//! build output to its deployment target: either an object-storage bucket
//! (`aws s3 cp --recursive`) or a named remote environment over `scp`.
//!
//! The library layer holds the pieces the CLI binary composes:
//! - [`config`]: `skipper.toml` loading and deployment environments
//! - [`process`]: external command execution behind a swappable runner
//! - [`transfer`]: the bucket and secure-copy transfer strategies
//! - [`error`]: the error taxonomy shared by all of the above

pub mod config;
pub mod error;
pub mod process;
pub mod transfer;
pub mod ui;

pub use config::{Config, Environment};
pub use error::{SkipperError, SkipperResult};
