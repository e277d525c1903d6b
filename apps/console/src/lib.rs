//! # Bistro Console Library
//!
//! The interactive restaurant floor console: configuration, logging, the
//! command layer, the three role sessions and the driver that ties them
//! together over stdin/stdout/stderr.
//!
//! ## Module Organization
//! ```text
//! bistro_console/
//! ├── lib.rs          ◄─── You are here (startup & run)
//! ├── config.rs       ◄─── bistro.toml + BISTRO_* overrides
//! ├── state.rs        ◄─── Menu, tables and tax rate
//! ├── console.rs      ◄─── Line-oriented terminal I/O
//! ├── driver.rs       ◄─── Role prompt, login, continue loop
//! ├── commands/
//! │   ├── menu.rs     ◄─── Add / save / load menu
//! │   ├── order.rs    ◄─── Order lines, bills, earnings
//! │   └── table.rs    ◄─── Reserve, dine in, vacate
//! ├── session/
//! │   ├── admin.rs
//! │   ├── waiter.rs
//! │   └── customer.rs
//! └── error.rs        ◄─── CommandError, ConsoleError, AppError
//! ```

pub mod commands;
pub mod config;
pub mod console;
pub mod driver;
pub mod error;
pub mod session;
pub mod state;

use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use config::AppConfig;
use console::TextConsole;
use driver::Driver;
use error::AppResult;
use state::RestaurantState;

/// Command line flags.
#[derive(Debug, Parser)]
#[command(name = "bistro", version, about = "Restaurant floor console")]
pub struct Cli {
    /// Configuration file (default: platform config dir/bistro.toml)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Menu file to load instead of the configured seed menu
    #[arg(long, value_name = "PATH")]
    pub menu: Option<PathBuf>,
}

/// Runs the console application.
///
/// ## Startup Sequence
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │  1. Initialize Logging (stderr, RUST_LOG, default "warn")               │
/// │  2. Load AppConfig (defaults → file → env → validate)                   │
/// │  3. Build RestaurantState (tables, seed menu)                           │
/// │  4. Optional --menu file replaces the seed menu                         │
/// │  5. Driver loop over stdin / stdout / stderr                            │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
pub fn run(cli: Cli) -> ExitCode {
    init_tracing();

    let (driver, mut state) = match prepare(&cli) {
        Ok(ready) => ready,
        Err(e) => {
            error!(error = %e, "Startup failed");
            eprintln!("{}", e);
            return ExitCode::FAILURE;
        }
    };

    let stdin = io::stdin();
    let mut console = TextConsole::new(stdin.lock(), io::stdout(), io::stderr());

    match driver.run(&mut console, &mut state) {
        Ok(outcome) => {
            info!(?outcome, "Console finished");
            outcome.exit_code()
        }
        Err(e) => {
            error!(error = %e, "Console failed");
            ExitCode::FAILURE
        }
    }
}

fn prepare(cli: &Cli) -> AppResult<(Driver, RestaurantState)> {
    let config = AppConfig::load(cli.config.clone())?;
    let mut state = RestaurantState::from_config(&config);

    if let Some(path) = &cli.menu {
        match commands::menu::load_menu(&mut state, path) {
            Ok(summary) => info!(items = summary.items, "Startup menu loaded"),
            Err(e) => eprintln!("{}", e),
        }
    }

    let driver = Driver::new(config.credential_store(), config.restaurant.name.clone());
    Ok((driver, state))
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=info` - Show state transitions
/// - `RUST_LOG=bistro_console=debug` - Show every command call
/// - Default: WARN, written to stderr
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_flags() {
        let cli = Cli::parse_from(["bistro", "--config", "bistro.toml", "--menu", "menu.txt"]);
        assert_eq!(cli.config, Some(PathBuf::from("bistro.toml")));
        assert_eq!(cli.menu, Some(PathBuf::from("menu.txt")));

        let cli = Cli::parse_from(["bistro"]);
        assert!(cli.config.is_none());
        assert!(cli.menu.is_none());
    }

    #[test]
    fn test_prepare_with_menu_file() {
        let dir = tempfile::tempdir().unwrap();
        let config_path = dir.path().join("bistro.toml");
        let menu_path = dir.path().join("menu.txt");
        std::fs::write(&config_path, "[restaurant]\nname = \"Test Kitchen\"\n").unwrap();
        std::fs::write(&menu_path, "Tea\nGreen\n2.00\n").unwrap();

        let cli = Cli {
            config: Some(config_path),
            menu: Some(menu_path),
        };
        let (_, state) = prepare(&cli).unwrap();

        assert_eq!(state.menu.len(), 1);
        assert_eq!(state.menu.get(1).unwrap().name, "Tea");
    }
}
