//! # bistro-core: Pure Business Logic for the Restaurant Floor
//!
//! Everything the console needs to reason about the menu, the tables and
//! the bills, as plain data and pure functions.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Bistro Architecture                              │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                 Console (apps/console)                          │   │
//! │  │    Driver ──► Admin / Waiter / Customer sessions                │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ commands                               │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ bistro-core (THIS CRATE) ★                      │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   menu    │  │  ticket   │  │   table   │  │   auth    │  │   │
//! │  │   │ MenuItem  │  │ OrderLine │  │  Record   │  │ Role      │  │   │
//! │  │   │ Catalog   │  │ Ticket    │  │  Registry │  │ Creds     │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO FILES • NO CONSOLE • PURE FUNCTIONS               │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                 bistro-store (menu file format)                 │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`money`] - Money in integer cents, exact sub-cent `Amount` for bills
//! - [`types`] - Tax rate
//! - [`menu`] - Menu items and the capacity-bounded catalog
//! - [`ticket`] - Order lines and per-table tickets
//! - [`table`] - Table records and the fixed table registry
//! - [`auth`] - Roles and the credential store
//! - [`error`] - Domain error types
//! - [`validation`] - Input rules for prices, quantities and table numbers
//!
//! ## Example Usage
//!
//! ```rust
//! use bistro_core::{MenuCatalog, MenuItem, Money, TableRegistry, TaxRate};
//!
//! let mut menu = MenuCatalog::new();
//! menu.add(MenuItem::new("Burger", "Classic beef burger", Money::from_cents(999)))
//!     .unwrap();
//!
//! let mut tables = TableRegistry::default();
//! let table = tables.get_mut(5).unwrap();
//! table.occupy();
//! table.ticket_mut().add_line(menu.get(1).unwrap(), 2).unwrap();
//!
//! // 2 × $9.99 = $19.98, plus 10% tax = $21.978
//! let bill = table.bill(TaxRate::from_bps(1000), Money::zero());
//! assert_eq!(bill.to_string(), "$21.978");
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod auth;
pub mod error;
pub mod menu;
pub mod money;
pub mod table;
pub mod ticket;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use auth::{Credential, CredentialStore, Role};
pub use error::{CoreError, CoreResult, ValidationError};
pub use menu::{house_menu, MenuCatalog, MenuItem};
pub use money::{Amount, Money};
pub use table::{TableRecord, TableRegistry, TableStatus};
pub use ticket::{OrderLine, OrderTicket};
pub use types::TaxRate;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Maximum entries the menu catalog holds by default.
pub const MAX_MENU_ITEMS: usize = 100;

/// Maximum lines a single table's ticket holds by default.
pub const MAX_TICKET_LINES: usize = 100;

/// Number of tables on the floor by default.
pub const TABLE_COUNT: usize = 20;

/// Tax applied to bills and earnings when nothing else is configured (10%).
pub const DEFAULT_TAX_RATE_BPS: u32 = 1000;
