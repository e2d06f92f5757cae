use clap::Parser;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize, Parser)]
#[command(name = "travel-destinations")]
#[command(about = "In-memory CRUD API for travel destinations")]
pub struct CliArgs {
    #[arg(long, help = "Address to listen on [default: 127.0.0.1:8000]")]
    pub bind: Option<String>,

    #[arg(long, help = "Path to a TOML configuration file")]
    pub config: Option<String>,

    #[arg(long, help = "Log level: trace, debug, info, warn, error")]
    pub log_level: Option<String>,

    #[arg(
        long,
        num_args = 0..=1,
        default_missing_value = "true",
        help = "Emit logs as JSON (--json-logs=false overrides the config file)"
    )]
    pub json_logs: Option<bool>,

    #[arg(long, help = "Log at debug level unless a level is set explicitly")]
    pub verbose: bool,
}
