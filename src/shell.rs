use std::io::{self, BufRead, Write};

use crate::constants::{BANNER_TITLE, BANNER_WIDTH, EXIT_COMMANDS, FAREWELL};
use crate::matcher::{MatchResult, Matcher};

/// Confidence as a percentage with two decimals, e.g. `83.33%`.
pub fn format_confidence(confidence: f64) -> String {
    format!("{:.2}%", confidence * 100.0)
}

pub fn is_exit_command(input: &str) -> bool {
    let lowered = input.to_lowercase();
    EXIT_COMMANDS.contains(&lowered.as_str())
}

pub fn print_result<W: Write>(out: &mut W, result: &MatchResult) -> io::Result<()> {
    writeln!(out, "Bot: {}", result.answer)?;
    writeln!(out, "(Confidence: {})", format_confidence(result.confidence))?;
    writeln!(out)
}

/// Read questions line by line from `input` and answer them on `out` until
/// an exit command or end of input.
pub fn run_shell<R: BufRead, W: Write>(
    matcher: &Matcher,
    mut input: R,
    mut out: W,
) -> io::Result<()> {
    let rule = "=".repeat(BANNER_WIDTH);
    writeln!(out, "{rule}")?;
    writeln!(out, "{BANNER_TITLE}")?;
    writeln!(out, "{rule}")?;
    writeln!(out, "Ask me anything! Type 'quit' to exit.")?;
    writeln!(out)?;

    let mut line = String::new();
    loop {
        write!(out, "You: ")?;
        out.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            writeln!(out)?;
            break;
        }
        let question = line.trim();

        if is_exit_command(question) {
            writeln!(out, "Bot: {FAREWELL}")?;
            break;
        }
        if question.is_empty() {
            continue;
        }

        let result = matcher.find_best_match(question);
        print_result(&mut out, &result)?;
    }

    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::FALLBACK_ANSWER;
    use crate::faq::builtin_corpus;

    fn session(input: &str) -> String {
        let matcher = Matcher::new(builtin_corpus());
        let mut out = Vec::new();
        run_shell(&matcher, input.as_bytes(), &mut out).expect("shell");
        String::from_utf8(out).expect("utf8")
    }

    #[test]
    fn confidence_is_a_two_decimal_percentage() {
        assert_eq!(format_confidence(0.0), "0.00%");
        assert_eq!(format_confidence(5.0 / 6.0), "83.33%");
        assert_eq!(format_confidence(1.0), "100.00%");
    }

    #[test]
    fn exit_commands_are_case_insensitive() {
        for cmd in ["quit", "EXIT", "Bye"] {
            assert!(is_exit_command(cmd));
        }
        assert!(!is_exit_command("quitting"));
        assert!(!is_exit_command(""));
    }

    #[test]
    fn answers_until_exit_command() {
        let out = session("How do I reset my password?\n\n   \nQUIT\nwhat time do you open\n");
        assert!(out.contains("Forgot Password"));
        assert!(out.contains("(Confidence: 83.33%)"));
        assert!(out.contains(&format!("Bot: {FAREWELL}")));
        // nothing after the exit command is answered
        assert!(!out.contains("business hours are"));
    }

    #[test]
    fn blank_lines_are_not_answered() {
        let out = session("\n  \n\t\nbye\n");
        assert!(!out.contains("Confidence"));
        assert_eq!(out.matches("You: ").count(), 4);
    }

    #[test]
    fn unknown_question_prints_fallback() {
        let out = session("asdf qwerty zzz\n");
        assert!(out.contains(&format!("Bot: {FALLBACK_ANSWER}")));
        assert!(out.contains("(Confidence: 0.00%)"));
    }

    #[test]
    fn end_of_input_ends_quietly() {
        let out = session("");
        assert!(!out.contains(FAREWELL));
        assert!(out.ends_with("You: \n"));
    }
}
