//! Command implementations for the Skipper CLI
//!
//! One module per subcommand. Each command borrows the loaded [`Config`]
//! and a [`CommandRunner`]; none of them holds state across invocations.
//!
//! [`Config`]: skipper::Config
//! [`CommandRunner`]: skipper::process::CommandRunner

pub mod build;
pub mod deploy;
pub mod env;
pub mod preview;
pub mod watch;
