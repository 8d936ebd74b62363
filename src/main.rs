//! CLI entry point for the maze image solver

use clap::Parser;
use mazegraph::io::cli::{Cli, FileProcessor};

fn main() -> mazegraph::Result<()> {
    let cli = Cli::parse();
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(cli.default_log_filter()),
    )
    .init();

    let mut processor = FileProcessor::new(cli);
    processor.process().map(|_| ())
}
