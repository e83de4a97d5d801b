use clap::{Parser, Subcommand};

/// Skipper - build, preview, and deploy a static website
#[derive(Parser, Debug)]
#[command(name = "skipper")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Verbosity level (-v echoes external commands before running them)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Compile the site into the build directory
    Build,

    /// Serve the site locally
    Preview,

    /// Rebuild the site when sources change
    Watch,

    /// Show a deployment environment's configuration
    Env {
        /// Environment name (e.g. "staging")
        name: String,
    },

    /// Upload the build directory to its deployment target
    Deploy {
        /// Deploy to a named environment over scp instead of the S3 bucket
        #[arg(short, long)]
        env: Option<String>,

        /// Print the transfer command without running it
        #[arg(long)]
        dry_run: bool,
    },
}
