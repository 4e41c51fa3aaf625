use std::path::PathBuf;

use clap::builder::FalseyValueParser;
use clap::Args;
use tracing_subscriber::EnvFilter;

use crate::constants::DEFAULT_THRESHOLD;
use crate::corpus::load_corpus;
use crate::error::Result;
use crate::faq::builtin_corpus;
use crate::matcher::Matcher;
use crate::text::Analyzer;

/// Options shared by every binary.
#[derive(Debug, Clone, Args)]
pub struct Options {
    /// JSON file with an array of {question, answer, keywords}; defaults to the built-in FAQ
    #[arg(long, env = "FAQ_CORPUS")]
    pub corpus: Option<PathBuf>,

    /// Minimum similarity for an answer to count as found
    #[arg(long, env = "FAQ_THRESHOLD", default_value_t = DEFAULT_THRESHOLD)]
    pub threshold: f64,

    /// Stem tokens (English Snowball) before matching
    #[arg(long, env = "FAQ_STEM", value_parser = FalseyValueParser::new())]
    pub stem: bool,

    /// Log matching decisions to stderr
    #[arg(short, long)]
    pub verbose: bool,
}

impl Options {
    pub fn init_logging(&self) {
        let default = if self.verbose { "faq_match=debug" } else { "warn" };
        tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default)),
            )
            .with_target(false)
            .with_writer(std::io::stderr)
            .init();
    }

    pub fn build_matcher(&self) -> Result<Matcher> {
        let entries = match &self.corpus {
            Some(path) => load_corpus(path)?,
            None => builtin_corpus(),
        };
        let analyzer = if self.stem {
            Analyzer::stemming()
        } else {
            Analyzer::default()
        };
        Matcher::with_analyzer(entries, analyzer, self.threshold)
    }
}
