//! `faq_match chat`
//!
//! Interactive FAQ shell over stdin/stdout.
//!
//! Usage:
//!   cargo run --bin chat
//!   cargo run --bin chat -- --corpus faq.json --threshold 0.3

use std::io;

use anyhow::{Context, Result};
use clap::Parser;

use faq_match::config::Options;
use faq_match::shell::run_shell;

#[derive(Debug, Parser)]
#[command(name = "chat", about = "Answer FAQ questions interactively")]
struct Cli {
    #[command(flatten)]
    options: Options,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    cli.options.init_logging();

    let matcher = cli.options.build_matcher().context("failed to set up matcher")?;
    tracing::info!(
        entries = matcher.entries().len(),
        threshold = matcher.threshold(),
        "chat ready"
    );

    run_shell(&matcher, io::stdin().lock(), io::stdout().lock()).context("chat session failed")
}
