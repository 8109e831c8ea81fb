use std::path::PathBuf;

use clap::Parser;

/// Unfold Tutor: a terminal tutor for surface-unfolding geometry problems.
#[derive(Parser, Debug)]
#[command(name = "unfold-tutor", version, about)]
pub struct Args {
    /// Config file path override.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Log filter override (e.g. debug, unfold=trace).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Generation model override.
    #[arg(short = 'm', long)]
    pub model: Option<String>,

    /// Skip the practice-menu greeting on start.
    #[arg(long)]
    pub no_greeting: bool,
}

pub fn parse() -> Args {
    Args::parse()
}
