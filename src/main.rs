use std::io::Read;

use clap::Parser;
use tracing::debug;

use drills::cli::{Args, Command, OutputFormat, Settings};
use drills::output::{
    PalindromeReport, SudokuReport, TopKReport, TruncateReport, format_palindrome,
    format_palindrome_json, format_sudoku, format_sudoku_json, format_top_k, format_top_k_json,
    format_truncate, format_truncate_json,
};
use drills::sudoku::Board;

fn main() {
    let args = Args::parse();

    if let Err(e) = args.validate() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    let settings = args.settings();
    drills::logging::init(settings.verbose);

    match run(args.command, settings) {
        Ok(output) => print!("{}", output),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

/// Execute one subcommand and return what should be printed
fn run(command: Command, settings: Settings) -> drills::Result<String> {
    let json = settings.format == OutputFormat::Json;

    let output = match command {
        Command::Truncate {
            message,
            max_length,
        } => {
            let report = TruncateReport::new(&message, max_length);
            if json {
                format_truncate_json(&report) + "\n"
            } else {
                format_truncate(&report)
            }
        }
        Command::TopK { values, k } => {
            let report = TopKReport::new(&values, k)?;
            if json {
                format_top_k_json(&report) + "\n"
            } else {
                format_top_k(&report)
            }
        }
        Command::Palindrome { text, strategy } => {
            let report = PalindromeReport::new(&text, strategy.into());
            if json {
                format_palindrome_json(&report) + "\n"
            } else {
                format_palindrome(&report)
            }
        }
        Command::Sudoku { file } => {
            let board: Board = read_board_text(file.as_deref())?.parse()?;
            let report = SudokuReport::new(board);
            if json {
                format_sudoku_json(&report) + "\n"
            } else {
                format_sudoku(&report)
            }
        }
    };

    Ok(output)
}

/// Read board text from a file, or from stdin for `None` and `-`
fn read_board_text(file: Option<&str>) -> drills::Result<String> {
    match file {
        Some(path) if path != "-" => {
            debug!(path, "reading board file");
            Ok(std::fs::read_to_string(path)?)
        }
        _ => {
            debug!("reading board from stdin");
            let mut text = String::new();
            std::io::stdin().read_to_string(&mut text)?;
            Ok(text)
        }
    }
}
