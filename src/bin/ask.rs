//! `faq_match ask`
//!
//! Answers a single question given on the command line.
//!
//! Usage:
//!   cargo run --bin ask -- "how do I reset my password"
//!   cargo run --bin ask -- --json "what time do you open"
//!   cargo run --bin ask -- --top 3 "track order"
//!
//! Corpus helpers:
//!   cargo run --bin ask -- --list
//!   cargo run --bin ask -- --dump-corpus faq.json

use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Parser;
use serde::Serialize;

use faq_match::builtin_corpus;
use faq_match::config::Options;
use faq_match::corpus::save_corpus;
use faq_match::shell::{format_confidence, print_result};
use faq_match::{MatchResult, Ranked};

/// `--json` output: the match itself, plus the ranking when `--top` is given.
#[derive(Serialize)]
struct Report<'a> {
    #[serde(flatten)]
    result: &'a MatchResult,
    #[serde(skip_serializing_if = "Option::is_none")]
    ranked: Option<Vec<Ranked<'a>>>,
}

#[derive(Debug, Parser)]
#[command(name = "ask", about = "Answer one FAQ question")]
struct Cli {
    #[command(flatten)]
    options: Options,

    /// Print the result as JSON
    #[arg(long)]
    json: bool,

    /// Also print the N best-scoring entries
    #[arg(long, value_name = "N")]
    top: Option<usize>,

    /// List the questions the corpus knows about, then exit
    #[arg(long)]
    list: bool,

    /// Write the built-in corpus as JSON to PATH, then exit
    #[arg(long, value_name = "PATH")]
    dump_corpus: Option<PathBuf>,

    /// The question; multiple words are joined with spaces
    question: Vec<String>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    cli.options.init_logging();

    if let Some(path) = &cli.dump_corpus {
        save_corpus(path, &builtin_corpus())
            .with_context(|| format!("failed to write {}", path.display()))?;
        eprintln!("Wrote built-in corpus to '{}'", path.display());
        return Ok(());
    }

    let matcher = cli.options.build_matcher().context("failed to set up matcher")?;
    let stdout = io::stdout();
    let mut out = stdout.lock();

    if cli.list {
        for entry in matcher.entries() {
            writeln!(out, "{}", entry.question)?;
        }
        return Ok(());
    }

    if cli.question.is_empty() {
        bail!("no question given (try `ask \"how do I reset my password\"`)");
    }
    let question = cli.question.join(" ");
    let result = matcher.find_best_match(&question);

    let ranked = cli.top.map(|k| {
        let mut ranked = matcher.rank(&question);
        ranked.truncate(k);
        ranked
    });

    if cli.json {
        let report = Report {
            result: &result,
            ranked,
        };
        serde_json::to_writer(&mut out, &report).context("serialize result")?;
        writeln!(out)?;
        return Ok(());
    }

    print_result(&mut out, &result)?;
    for r in ranked.iter().flatten() {
        writeln!(out, "  [{}] {}", format_confidence(r.score), r.question)?;
    }

    Ok(())
}
