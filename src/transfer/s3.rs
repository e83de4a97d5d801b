//! Object-storage transfer via the `aws` CLI

use std::path::Path;

use crate::error::SkipperResult;
use crate::process::CommandRunner;

use super::Transfer;

/// Recursive copy of the build directory into an S3 bucket.
///
/// Credentials, region, and endpoint are whatever the `aws` CLI picks up
/// from its own configuration; none of that is Skipper's concern.
pub struct S3Transfer {
    bucket: String,
}

impl S3Transfer {
    pub fn new(bucket: impl Into<String>) -> Self {
        Self {
            bucket: bucket.into(),
        }
    }
}

impl Transfer for S3Transfer {
    fn name(&self) -> &'static str {
        "s3"
    }

    fn push(&self, runner: &dyn CommandRunner, build_dir: &Path) -> SkipperResult<()> {
        let args = vec![
            "s3".to_string(),
            "cp".to_string(),
            build_dir.display().to_string(),
            self.bucket.clone(),
            "--recursive".to_string(),
        ];
        runner.run("aws", &args)
    }
}
