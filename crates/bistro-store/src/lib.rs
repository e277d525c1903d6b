//! # bistro-store: Menu File Layer
//!
//! Reads and writes the menu catalog as a flat text file.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Admin "Save Menu" / "Load Menu"                                        │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                  bistro-store (THIS CRATE)                      │   │
//! │  │                                                                 │   │
//! │  │   render_menu ──► save_menu ──► whole-file overwrite            │   │
//! │  │   parse_menu  ◄── load_menu ◄── whole-file read                 │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  menu.txt   (name / description / price, repeated)                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,no_run
//! use bistro_core::{house_menu, MenuCatalog};
//! use bistro_store::{load_menu, save_menu};
//!
//! let mut menu = MenuCatalog::new();
//! for item in house_menu() {
//!     menu.add(item).unwrap();
//! }
//!
//! save_menu(&menu, "menu.txt").unwrap();
//! let loaded = load_menu("menu.txt", 100).unwrap();
//! assert_eq!(loaded.catalog, menu);
//! ```

pub mod error;
pub mod menu_file;

pub use error::{StoreError, StoreResult};
pub use menu_file::{load_menu, parse_menu, render_menu, save_menu, LoadedMenu};
