mod args;
mod config;
mod error;
mod io;
mod scanner;

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use crate::args::parse_args;
use crate::config::Args;
use crate::error::{IndexError, IndexResult};
use crate::io::{display_path, print_error, print_info, print_warning, render_index, write_index};
use crate::scanner::{scan_games, Diagnostic};

fn main() -> ExitCode {
    let args = parse_args();

    let result = run(&args);
    if let Err(e) = &result {
        print_error(&e.to_string());
    }
    exit_code(&result)
}

/// A missing games directory returns early without writing anything, but is not a crash.
fn exit_code<T>(result: &IndexResult<T>) -> ExitCode {
    match result {
        Ok(_) | Err(IndexError::MissingRootDirectory(_)) => ExitCode::SUCCESS,
        Err(_) => ExitCode::FAILURE,
    }
}

fn warning_message(diagnostic: &Diagnostic) -> String {
    diagnostic.error.to_string()
}

fn summary_line(output_path: &Path, count: usize) -> String {
    format!(
        "Generated {} with {} game(s)",
        display_path(output_path).display(),
        count
    )
}

/// Scans and writes the index. Returns the written path, or `None` on a dry run.
fn run(args: &Args) -> IndexResult<Option<PathBuf>> {
    if args.verbose {
        print_info("Verbose mode enabled.");
        print_info(&format!("Games directory: {}", args.games_dir.display()));
    }

    let report = scan_games(args, |game| {
        // Keep stdout clean for the JSON when it is printed instead of written.
        if args.dry_run {
            eprintln!("Found game: {}", game.name);
        } else {
            println!("Found game: {}", game.name);
        }
    })?;

    for diagnostic in &report.diagnostics {
        print_warning(&warning_message(diagnostic));
    }
    if args.verbose && !report.diagnostics.is_empty() {
        let folders: Vec<&str> = report
            .diagnostics
            .iter()
            .filter_map(|d| d.folder.as_deref())
            .collect();
        print_info(&format!("Directories with warnings: {}", folders.join(", ")));
    }

    if args.dry_run {
        println!("{}", render_index(&report.index)?);
        return Ok(None);
    }

    let output_path = write_index(&args.games_dir, &report.index)?;

    println!();
    println!("{}", summary_line(&output_path, report.index.len()));
    Ok(Some(output_path))
}
