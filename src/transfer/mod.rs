//! Transfer strategies for pushing the build directory to its target
//!
//! Two strategies exist: [`s3::S3Transfer`] copies recursively into an
//! object-storage bucket via the `aws` CLI, and [`scp::ScpTransfer`] copies
//! to a remote environment over secure copy. Both issue exactly one
//! external command and propagate its failure unchanged; there is no
//! retry and no rollback.

pub mod s3;
pub mod scp;

use std::path::{Path, PathBuf};

use crate::error::SkipperResult;
use crate::process::CommandRunner;

pub use s3::S3Transfer;
pub use scp::ScpTransfer;

/// Strategy for transferring a local build directory to a deploy target.
pub trait Transfer {
    /// Name of this transfer method (for logging).
    fn name(&self) -> &'static str;

    /// Push the contents of `build_dir` to the target via `runner`.
    fn push(&self, runner: &dyn CommandRunner, build_dir: &Path) -> SkipperResult<()>;
}

/// Expand a leading `~` or `~/` against the user's home directory.
///
/// Key-file paths in environment config are written `~/.ssh/...`; the path
/// handed to `scp -i` must be concrete. Paths without a leading tilde, and
/// tildes when no home directory is known, pass through unchanged.
pub fn expand_tilde(path: &Path) -> PathBuf {
    let Some(rest) = path.to_str().and_then(|s| s.strip_prefix('~')) else {
        return path.to_path_buf();
    };

    let Some(home) = dirs::home_dir() else {
        return path.to_path_buf();
    };

    match rest.strip_prefix('/') {
        Some(tail) => home.join(tail),
        None if rest.is_empty() => home,
        // "~user" form is not supported; leave it alone
        None => path.to_path_buf(),
    }
}
