use serde::Serialize;
use tracing::{debug, trace};

use crate::constants::{DEFAULT_THRESHOLD, FALLBACK_ANSWER};
use crate::error::{FaqError, Result};
use crate::faq::FaqEntry;
use crate::text::Analyzer;
use crate::vector::{cosine_similarity, vectorize, TermFreq};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatchResult {
    pub answer: String,
    pub confidence: f64,
    pub found: bool,
}

/// One corpus entry and its similarity to a query.
#[derive(Debug, Clone, Serialize)]
pub struct Ranked<'a> {
    pub position: usize,
    pub question: &'a str,
    pub score: f64,
}

/// Matches free-text questions against a fixed FAQ corpus.
///
/// Entry vectors are computed once at construction; the corpus is never
/// mutated afterwards, so a `Matcher` can be shared freely between threads.
pub struct Matcher {
    entries: Vec<FaqEntry>,
    vectors: Vec<TermFreq>,
    analyzer: Analyzer,
    threshold: f64,
}

impl Matcher {
    pub fn new(entries: Vec<FaqEntry>) -> Self {
        Self::build(entries, Analyzer::default(), DEFAULT_THRESHOLD)
    }

    pub fn with_threshold(entries: Vec<FaqEntry>, threshold: f64) -> Result<Self> {
        Self::with_analyzer(entries, Analyzer::default(), threshold)
    }

    pub fn with_analyzer(
        entries: Vec<FaqEntry>,
        analyzer: Analyzer,
        threshold: f64,
    ) -> Result<Self> {
        if !(0.0..=1.0).contains(&threshold) {
            return Err(FaqError::InvalidThreshold(threshold));
        }
        Ok(Self::build(entries, analyzer, threshold))
    }

    fn build(entries: Vec<FaqEntry>, analyzer: Analyzer, threshold: f64) -> Self {
        let vectors = entries
            .iter()
            .map(|e| vectorize(&analyzer.analyze(&e.comparison_text())))
            .collect();
        Matcher {
            entries,
            vectors,
            analyzer,
            threshold,
        }
    }

    pub fn entries(&self) -> &[FaqEntry] {
        &self.entries
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    fn query_vector(&self, question: &str) -> TermFreq {
        let tokens = self.analyzer.analyze(question);
        debug!(?tokens, "analysed query");
        vectorize(&tokens)
    }

    /// Best-scoring entry for `question`, or the fallback answer when the
    /// best score is below the threshold. Ties go to the earlier entry.
    pub fn find_best_match(&self, question: &str) -> MatchResult {
        let user_vector = self.query_vector(question);

        let mut best: Option<usize> = None;
        let mut highest = 0.0f64;
        for (i, faq_vector) in self.vectors.iter().enumerate() {
            let similarity = cosine_similarity(&user_vector, faq_vector);
            trace!(entry = i, similarity, "scored entry");
            if similarity > highest {
                highest = similarity;
                best = Some(i);
            }
        }

        match best {
            Some(i) if highest >= self.threshold => {
                debug!(entry = i, confidence = highest, "match found");
                MatchResult {
                    answer: self.entries[i].answer.clone(),
                    confidence: highest,
                    found: true,
                }
            }
            _ => {
                debug!(confidence = highest, threshold = self.threshold, "no match");
                MatchResult {
                    answer: FALLBACK_ANSWER.to_string(),
                    confidence: highest,
                    found: false,
                }
            }
        }
    }

    /// Every entry scored against `question`, best first. Equal scores keep
    /// corpus order.
    pub fn rank(&self, question: &str) -> Vec<Ranked<'_>> {
        let user_vector = self.query_vector(question);
        let mut ranked: Vec<Ranked<'_>> = self
            .entries
            .iter()
            .zip(&self.vectors)
            .enumerate()
            .map(|(position, (entry, faq_vector))| Ranked {
                position,
                question: &entry.question,
                score: cosine_similarity(&user_vector, faq_vector),
            })
            .collect();

        ranked.sort_by(|a, b| b.score.total_cmp(&a.score));
        ranked
    }
}
