//! # Bistro Console Entry Point
//!
//! Parses the command line and hands off to [`bistro_console::run`].

use std::process::ExitCode;

use bistro_console::Cli;
use clap::Parser;

fn main() -> ExitCode {
    bistro_console::run(Cli::parse())
}
