// Matching
pub const DEFAULT_THRESHOLD: f64 = 0.2;
/// Tokens shorter than this (in characters) are dropped by the tokenizer.
pub const MIN_TOKEN_CHARS: usize = 3;

// Fixed responses
pub const FALLBACK_ANSWER: &str = "I'm sorry, I couldn't find an answer to your question. \
Please try rephrasing or contact our support team.";
pub const FAREWELL: &str = "Thank you for using the FAQ Chatbot. Goodbye!";

// Shell
pub const EXIT_COMMANDS: &[&str] = &["quit", "exit", "bye"];
pub const BANNER_TITLE: &str = "FAQ CHATBOT";
pub const BANNER_WIDTH: usize = 60;

// Stop words (input is already lower-cased by the tokenizer)
pub const STOP_WORDS: &[&str] = &[
    "the", "is", "at", "which", "on", "a", "an", "and", "or", "but", "in",
    "with", "to", "for", "of", "as", "by", "that", "this", "it", "from",
];
