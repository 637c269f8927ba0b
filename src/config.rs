//! Command line configuration.

use clap::Parser;
use std::path::PathBuf;

/// Command line configuration for gitsoul.
#[derive(Debug, Clone, Parser)]
#[command(name = "gitsoul", version, about, long_about = None)]
pub struct Config {
    /// Hosting provider (github or gitlab)
    pub provider: String,

    /// Username whose self-titled repository README is rendered
    pub identity: String,

    /// Output file for the generated page
    #[arg(short, long, default_value = "profile.html")]
    pub output: PathBuf,

    /// Per-candidate fetch timeout in seconds
    #[arg(long, default_value_t = 10)]
    pub timeout: u64,
}

impl Config {
    /// Parses configuration from command line arguments.
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }
}
