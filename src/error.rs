use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum FaqError {
    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid corpus JSON in {}: {source}", .path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid FAQ entry #{index}: {reason}")]
    InvalidEntry { index: usize, reason: String },

    #[error("threshold must be within [0, 1], got {0}")]
    InvalidThreshold(f64),
}

pub type Result<T> = std::result::Result<T, FaqError>;
