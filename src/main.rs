//! CLI entry point for the Truchet tile converter

use clap::Parser;
use truchetize::io::cli::{Cli, FileProcessor};

fn main() -> truchetize::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();
    let mut processor = FileProcessor::new(cli);
    processor.process()
}
