pub mod config;
pub mod constants;
pub mod corpus;
pub mod error;
pub mod faq;
pub mod matcher;
pub mod shell;
pub mod text;
pub mod vector;

pub use error::{FaqError, Result};
pub use faq::{builtin_corpus, FaqEntry};
pub use matcher::{MatchResult, Matcher, Ranked};
