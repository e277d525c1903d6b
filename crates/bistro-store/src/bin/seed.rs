//! # Menu Seed Writer
//!
//! Writes the house menu to a menu file the Admin "Load Menu" action can read.
//!
//! ## Usage
//! ```bash
//! # Write ./menu.txt
//! cargo run -p bistro-store --bin seed-menu
//!
//! # Choose the output file
//! cargo run -p bistro-store --bin seed-menu -- --out ./data/menu.txt
//! ```

use std::path::PathBuf;
use std::process::ExitCode;

use bistro_core::{house_menu, MenuCatalog};
use bistro_store::save_menu;
use clap::Parser;

/// Command line flags.
#[derive(Debug, Parser)]
#[command(name = "seed-menu", version, about = "Bistro Menu Seed Writer")]
struct Args {
    /// Menu file to write
    #[arg(short, long, value_name = "PATH", default_value = "menu.txt")]
    out: PathBuf,
}

fn main() -> ExitCode {
    let args = Args::parse();

    let mut catalog = MenuCatalog::new();
    for item in house_menu() {
        if let Err(e) = catalog.add(item) {
            eprintln!("{}", e);
            return ExitCode::FAILURE;
        }
    }

    match save_menu(&catalog, &args.out) {
        Ok(()) => {
            println!(
                "✓ Wrote {} menu items to {}",
                catalog.len(),
                args.out.display()
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("{}", e);
            ExitCode::FAILURE
        }
    }
}
