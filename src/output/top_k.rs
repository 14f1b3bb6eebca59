//! Output formatting for top-K frequent values

use owo_colors::OwoColorize;
use serde::Serialize;
use tabled::{Table, Tabled};

use crate::error::Result;
use crate::frequency::{Frequency, top_k_with_counts};

#[derive(Debug, Serialize)]
pub struct TopKReport {
    pub k: usize,
    pub total: usize,
    pub values: Vec<Frequency>,
}

impl TopKReport {
    pub fn new(values: &[i64], k: usize) -> Result<Self> {
        Ok(Self {
            k,
            total: values.len(),
            values: top_k_with_counts(values, k)?,
        })
    }
}

#[derive(Tabled)]
struct FrequencyRow {
    #[tabled(rename = "Rank")]
    rank: usize,
    #[tabled(rename = "Value")]
    value: i64,
    #[tabled(rename = "Count")]
    count: usize,
}

/// Format the selected values as a table
pub fn format_top_k(report: &TopKReport) -> String {
    let rows: Vec<FrequencyRow> = report
        .values
        .iter()
        .enumerate()
        .map(|(i, f)| FrequencyRow {
            rank: i + 1,
            value: f.value,
            count: f.count,
        })
        .collect();

    let table = Table::new(rows).to_string();

    format!(
        "{} {} most frequent of {} values:\n\n{}\n",
        "Top".bold(),
        report.k.to_string().cyan(),
        report.total,
        table
    )
}

pub fn format_top_k_json(report: &TopKReport) -> String {
    super::to_json(report)
}
