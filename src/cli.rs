use clap::{Parser, Subcommand, ValueEnum};

use crate::text::Strategy;

#[derive(Parser, Debug)]
#[command(name = "drills")]
#[command(
    author,
    version,
    about = "Truncate messages, rank frequent values, check palindromes and Sudoku boards"
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,

    /// Log decisions to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format
    #[arg(long, global = true, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Shorten a message on word boundaries, appending " ..." when cut
    Truncate {
        /// The message to shorten
        #[arg(value_name = "MESSAGE")]
        message: String,

        /// Maximum output length in characters, including the suffix
        #[arg(short = 'k', long)]
        max_length: usize,
    },

    /// List the K most frequent values
    #[command(name = "top-k")]
    TopK {
        /// Integers, space- or comma-separated
        #[arg(
            value_name = "VALUES",
            value_delimiter = ',',
            allow_negative_numbers = true,
            required = true
        )]
        values: Vec<i64>,

        /// How many values to return
        #[arg(short)]
        k: usize,
    },

    /// Check whether text reads the same forwards and backwards
    Palindrome {
        /// The text to check
        #[arg(value_name = "TEXT")]
        text: String,

        /// Checking algorithm
        #[arg(long, default_value = "two-pointer")]
        strategy: StrategyArg,
    },

    /// Validate a 9x9 Sudoku board ('.' marks an empty cell)
    Sudoku {
        /// Board file; reads stdin when absent or "-"
        #[arg(value_name = "FILE")]
        file: Option<String>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum StrategyArg {
    /// Scan inward from both ends
    TwoPointer,
    /// Compare the filtered text with its reverse
    Reverse,
}

impl From<StrategyArg> for Strategy {
    fn from(arg: StrategyArg) -> Self {
        match arg {
            StrategyArg::TwoPointer => Strategy::TwoPointer,
            StrategyArg::Reverse => Strategy::Reverse,
        }
    }
}

/// Runtime settings derived from the command line
#[derive(Debug, Clone, Copy)]
pub struct Settings {
    pub verbose: bool,
    pub format: OutputFormat,
}

impl Args {
    pub fn settings(&self) -> Settings {
        Settings {
            verbose: self.verbose,
            format: self.format,
        }
    }

    pub fn validate(&self) -> Result<(), String> {
        match &self.command {
            Command::TopK { k, .. } if *k == 0 => Err("-k must be at least 1".to_string()),
            Command::Sudoku { file: Some(path) } if path.is_empty() => {
                Err("board file path is empty".to_string())
            }
            _ => Ok(()),
        }
    }
}
