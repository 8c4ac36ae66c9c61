//! Syncheck entry point
//!
//! Launches the native GUI front-end for the external syntax checker.

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use clap::Parser;
use console::style;
use std::path::PathBuf;
use syncheck::{gui, logging, Checker};

/// Syncheck - GUI front-end for an external C/C++ syntax checker
#[derive(Parser)]
#[command(name = "syncheck")]
#[command(author = "Syncheck Contributors")]
#[command(version)]
#[command(about = "GUI front-end for an external C/C++ syntax checker", long_about = None)]
struct Cli {
    /// Checker executable to run (default: CSyntaxChecker in the working
    /// directory)
    #[arg(long, value_name = "PATH")]
    checker: Option<PathBuf>,
}

fn main() {
    // Initialize logging
    logging::init();
    logging::info("MAIN", "Syncheck starting up");

    let cli = Cli::parse();

    let checker = match cli.checker {
        Some(program) => Checker::new(program),
        None => Checker::default(),
    };
    logging::info(
        "MAIN",
        &format!("using checker {}", checker.program().display()),
    );

    if let Err(e) = gui::run(checker) {
        eprintln!("{} {}", style("Error:").red().bold(), e);
        std::process::exit(1);
    }
}
