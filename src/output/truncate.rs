//! Output formatting for message truncation

use owo_colors::OwoColorize;
use serde::Serialize;

use crate::text;

#[derive(Debug, Serialize)]
pub struct TruncateReport {
    pub message: String,
    pub max_length: usize,
    pub result: String,
    pub truncated: bool,
}

impl TruncateReport {
    pub fn new(message: &str, max_length: usize) -> Self {
        let result = text::truncate(message, max_length);
        Self {
            message: message.to_string(),
            max_length,
            truncated: result != message,
            result,
        }
    }
}

/// Format a truncation as human-readable text
pub fn format_truncate(report: &TruncateReport) -> String {
    let mut output = String::new();

    output.push_str(&format!("{}\n", report.result.bold()));

    let length = report.result.chars().count();
    if report.truncated {
        output.push_str(&format!(
            "{}\n",
            format!("truncated to {}/{} characters", length, report.max_length).dimmed()
        ));
    } else {
        output.push_str(&format!(
            "{}\n",
            format!("unchanged ({}/{} characters)", length, report.max_length).dimmed()
        ));
    }

    output
}

pub fn format_truncate_json(report: &TruncateReport) -> String {
    super::to_json(report)
}
