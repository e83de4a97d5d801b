use anyhow::Result;

use skipper::process::CommandRunner;
use skipper::transfer::{S3Transfer, ScpTransfer, Transfer};
use skipper::{ui, Config, SkipperError};

/// Upload the build directory to its deployment target.
///
/// Without an environment this is a recursive copy into the configured S3
/// bucket. With one, the environment is resolved from config (built-in
/// staging included) and the build directory is pushed to its first host
/// over scp.
pub fn cmd_deploy(
    runner: &dyn CommandRunner,
    config: &Config,
    env_name: Option<&str>,
) -> Result<()> {
    match env_name {
        None => {
            ui::success("Deploying site...");
            let transfer = S3Transfer::new(config.deploy.bucket.clone());
            transfer.push(runner, &config.deploy.build_dir)?;
        }
        Some(name) => {
            let env = config.environment(name)?;
            let host = env.primary_host().ok_or_else(|| SkipperError::NoHosts {
                name: name.to_string(),
            })?;

            ui::info(&format!("Deploying to {}", host));
            let transfer = ScpTransfer::new(name, &env);
            transfer.push(runner, &config.deploy.build_dir)?;
        }
    }

    ui::success("Site deploy complete.");
    Ok(())
}
