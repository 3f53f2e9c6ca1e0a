use super::credentials::DEFAULT_ENV_FILE;
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "comic-panels")]
#[command(about = "Generate the comic panels and the markdown page that shows them")]
pub struct CliArgs {
    /// Optional TOML file overriding endpoint, model and output locations
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Env file holding KEY=<api key>
    #[arg(long, default_value = DEFAULT_ENV_FILE)]
    pub env_file: PathBuf,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Log process resource usage after each panel
    #[arg(long)]
    pub monitor: bool,

    /// Emit logs as JSON lines
    #[arg(long)]
    pub json_logs: bool,

    /// Show which panels would be generated or reused, without calling the API
    #[arg(long)]
    pub dry_run: bool,
}
