use owo_colors::OwoColorize;
use serde::Serialize;

use crate::text::Strategy;

#[derive(Debug, Serialize)]
pub struct PalindromeReport {
    pub text: String,
    pub strategy: Strategy,
    pub palindrome: bool,
}

impl PalindromeReport {
    pub fn new(text: &str, strategy: Strategy) -> Self {
        Self {
            text: text.to_string(),
            strategy,
            palindrome: strategy.check(text),
        }
    }
}

pub fn format_palindrome(report: &PalindromeReport) -> String {
    let verdict = if report.palindrome {
        "is a palindrome".green().to_string()
    } else {
        "is not a palindrome".red().to_string()
    };

    format!(
        "\"{}\" {} {}\n",
        report.text,
        verdict,
        format!("({})", report.strategy).dimmed()
    )
}

pub fn format_palindrome_json(report: &PalindromeReport) -> String {
    super::to_json(report)
}
