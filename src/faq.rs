use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FaqEntry {
    pub question: String,
    pub answer: String,
    #[serde(default)]
    pub keywords: Vec<String>,
}

impl FaqEntry {
    pub fn new(question: &str, answer: &str, keywords: &[&str]) -> Self {
        FaqEntry {
            question: question.to_string(),
            answer: answer.to_string(),
            keywords: keywords.iter().map(|k| k.to_string()).collect(),
        }
    }

    /// Text the entry is matched on: the question followed by its keywords.
    pub fn comparison_text(&self) -> String {
        let mut text = self.question.clone();
        text.push(' ');
        text.push_str(&self.keywords.join(" "));
        text
    }
}

/// The corpus shipped with the binaries when no `--corpus` file is given.
pub fn builtin_corpus() -> Vec<FaqEntry> {
    vec![
        FaqEntry::new(
            "How do I reset my password?",
            "To reset your password, click on 'Forgot Password' on the login page. \
             Enter your email address, and we'll send you a password reset link.",
            &["reset", "password", "forgot", "change", "login"],
        ),
        FaqEntry::new(
            "What are your business hours?",
            "Our business hours are Monday to Friday, 9:00 AM to 6:00 PM EST. \
             We're closed on weekends and major holidays.",
            &["hours", "time", "open", "closed", "schedule", "working"],
        ),
        FaqEntry::new(
            "How can I contact customer support?",
            "You can reach our customer support team via email at support@company.com, \
             call us at 1-800-123-4567, or use the live chat feature.",
            &["contact", "support", "help", "reach", "call", "email"],
        ),
        FaqEntry::new(
            "What payment methods do you accept?",
            "We accept all major credit cards (Visa, MasterCard, American Express), \
             PayPal, bank transfers, and cryptocurrency payments.",
            &["payment", "pay", "credit", "card", "paypal", "method"],
        ),
        FaqEntry::new(
            "How do I track my order?",
            "Once your order ships, you'll receive a tracking number via email. \
             You can also log into your account and view order status.",
            &["track", "order", "shipping", "delivery", "status"],
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn comparison_text_joins_question_and_keywords() {
        let e = FaqEntry::new("Where is it?", "Here.", &["where", "location"]);
        assert_eq!(e.comparison_text(), "Where is it? where location");
    }

    #[test]
    fn keywords_default_to_empty() {
        let e: FaqEntry =
            serde_json::from_str(r#"{"question":"Q?","answer":"A."}"#).expect("parse");
        assert!(e.keywords.is_empty());
        assert_eq!(e.comparison_text(), "Q? ");
    }

    #[test]
    fn builtin_corpus_order_is_stable() {
        let corpus = builtin_corpus();
        assert_eq!(corpus.len(), 5);
        assert!(corpus[0].question.contains("password"));
        assert!(corpus[1].question.contains("business hours"));
        assert!(corpus[4].question.contains("track"));
    }
}
