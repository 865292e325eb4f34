use std::path::PathBuf;

use clap::Parser;

use crate::state::{ConfigState, OutputMode};

#[derive(Debug, Parser)]
#[command(name = "shop")]
#[command(about = "Computer shop catalog, driven one command per line.")]
pub struct CommandLine {
    /// Read commands from a file instead of stdin
    #[arg(short, long, value_name = "PATH")]
    pub input: Option<PathBuf>,

    /// Print one JSON object per command
    #[arg(long)]
    pub json: bool,

    /// Log filter used when RUST_LOG is unset, e.g. "debug"
    #[arg(long, value_name = "FILTER")]
    pub log: Option<String>,

    /// Line that ends the session
    #[arg(long, value_name = "WORD")]
    pub close_command: Option<String>,
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Layers the flags over an environment-derived config.
    pub fn apply(&self, mut config: ConfigState) -> ConfigState {
        if self.json {
            config.output = OutputMode::Json;
        }
        if let Some(filter) = &self.log {
            config.log_filter = filter.clone();
        }
        if let Some(close) = &self.close_command {
            config.close_command = close.clone();
        }
        config
    }
}
