use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use tracing::info;

use crate::error::{FaqError, Result};
use crate::faq::FaqEntry;

/// Load an FAQ corpus from a JSON array of `{question, answer, keywords}`
/// records. Declaration order is kept; it decides ties.
pub fn load_corpus(path: &Path) -> Result<Vec<FaqEntry>> {
    let file = File::open(path).map_err(|source| FaqError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let entries: Vec<FaqEntry> =
        serde_json::from_reader(BufReader::new(file)).map_err(|source| FaqError::Json {
            path: path.to_path_buf(),
            source,
        })?;

    validate(&entries)?;
    info!(entries = entries.len(), path = %path.display(), "loaded FAQ corpus");
    Ok(entries)
}

pub fn save_corpus(path: &Path, entries: &[FaqEntry]) -> Result<()> {
    let io_err = |source| FaqError::Io {
        path: path.to_path_buf(),
        source,
    };
    let mut w = BufWriter::new(File::create(path).map_err(io_err)?);
    serde_json::to_writer_pretty(&mut w, entries).map_err(|source| FaqError::Json {
        path: path.to_path_buf(),
        source,
    })?;
    w.write_all(b"\n").map_err(io_err)?;
    w.flush().map_err(io_err)
}

fn validate(entries: &[FaqEntry]) -> Result<()> {
    for (index, entry) in entries.iter().enumerate() {
        if entry.answer.trim().is_empty() {
            return Err(FaqError::InvalidEntry {
                index,
                reason: "answer is empty".to_string(),
            });
        }
    }
    Ok(())
}
