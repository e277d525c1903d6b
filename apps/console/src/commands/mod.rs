//! # Commands Module
//!
//! One request/response function per restaurant action. Role sessions do
//! the prompting and printing; commands do the work against
//! [`RestaurantState`](crate::state::RestaurantState) and report failures as
//! [`CommandError`](crate::error::CommandError).
//!
//! ## Command Organization
//! ```text
//! commands/
//! ├── mod.rs      ◄─── You are here (exports)
//! ├── menu.rs     ◄─── Add, save and load menu entries
//! ├── order.rs    ◄─── Order lines, bills, earnings
//! └── table.rs    ◄─── Table lookup, reserve, dine in, vacate
//! ```
//!
//! ## Command Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  WaiterSession                                                          │
//! │    let n = console.prompt_number("Enter table number ...")?;            │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  commands::table::resolve_table(&state, n)                              │
//! │    -> Result<usize, CommandError>                                       │
//! │         │                                                               │
//! │         ├── Ok(number)  ──► commands::order::add_order_line(...)        │
//! │         └── Err(e)      ──► session prints e.message                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod menu;
pub mod order;
pub mod table;
