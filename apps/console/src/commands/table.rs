//! # Table Commands
//!
//! ## Availability Rules
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  reserve_table   refused if the table is reserved OR occupied          │
//! │  dine_in         refused only if the table is occupied; otherwise the  │
//! │                  slot is replaced by a fresh record and occupied, so   │
//! │                  a reservation on it is dropped                        │
//! │  vacate_table    always allowed; clears flags and the ticket           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use bistro_core::validation::validate_table_number;
use tracing::{debug, warn};

use crate::error::{CommandError, CommandResult};
use crate::state::RestaurantState;

/// Status lines for every table, in number order.
pub fn table_listing(state: &RestaurantState) -> Vec<String> {
    state.tables.iter().map(|t| t.describe()).collect()
}

/// Turns user input into a table number that exists.
pub fn resolve_table(state: &RestaurantState, number: i64) -> CommandResult<usize> {
    validate_table_number(number, state.tables.len()).map_err(|_| {
        warn!(number, "Table number out of range");
        CommandError::not_found(format!("Invalid table number: {}", number))
    })
}

/// Reserves a table that is neither reserved nor occupied.
pub fn reserve_table(state: &mut RestaurantState, number: i64) -> CommandResult<usize> {
    debug!(number, "reserve_table command");
    let number = resolve_table(state, number)?;

    let table = state
        .tables
        .get_mut(number)
        .ok_or_else(|| CommandError::not_found(format!("Invalid table number: {}", number)))?;

    if table.is_reserved() || table.is_occupied() {
        return Err(CommandError::unavailable(
            "Sorry, the table is not available for reservation. Please choose another table or dine in.",
        ));
    }

    table.reserve();
    Ok(number)
}

/// Seats a party at a table that is not occupied.
pub fn dine_in(state: &mut RestaurantState, number: i64) -> CommandResult<usize> {
    debug!(number, "dine_in command");
    let number = resolve_table(state, number)?;

    if state.tables.get(number).is_some_and(|t| t.is_occupied()) {
        return Err(CommandError::unavailable(
            "Sorry, the table is already occupied. Please choose another table.",
        ));
    }

    let table = state
        .tables
        .reset(number)
        .ok_or_else(|| CommandError::not_found(format!("Invalid table number: {}", number)))?;
    table.occupy();
    Ok(number)
}

/// Clears a table and discards its ticket.
pub fn vacate_table(state: &mut RestaurantState, number: i64) -> CommandResult<usize> {
    debug!(number, "vacate_table command");
    let number = resolve_table(state, number)?;

    let table = state
        .tables
        .get_mut(number)
        .ok_or_else(|| CommandError::not_found(format!("Invalid table number: {}", number)))?;
    table.vacate();
    Ok(number)
}
