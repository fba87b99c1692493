use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct BlockerArgs {
    /// File to read the batch from instead of stdin
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Whether to disable logging
    #[arg(short, long, default_value_t = false)]
    pub quiet: bool,
}

impl BlockerArgs {
    pub fn from_env() -> Self {
        Self::parse()
    }
}
