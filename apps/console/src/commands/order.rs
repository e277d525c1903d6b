//! # Order Commands
//!
//! Waiter-side ticket work and the Admin earnings report.
//!
//! ## Bill Calculation
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  subtotal = Σ price × quantity                                          │
//! │  tax      = subtotal × rate               (exact, sub-cent Amount)      │
//! │  total    = subtotal + tax                (no discount at the console)  │
//! │                                                                         │
//! │  earnings = Σ total over tables that are occupied or reserved           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use bistro_core::{Amount, CoreError, Money, OrderLine, OrderTicket, TaxRate};
use chrono::{DateTime, Utc};
use tracing::debug;

use crate::error::{CommandError, CommandResult};
use crate::state::RestaurantState;

/// A printed bill for one table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bill {
    pub table: usize,
    pub opened_at: DateTime<Utc>,
    pub ticket: OrderTicket,
    pub subtotal: Money,
    pub tax_rate: TaxRate,
    pub tax: Amount,
    pub total: Amount,
}

/// Fails unless table `number` exists and is occupied.
pub fn require_occupied(state: &RestaurantState, number: usize) -> CommandResult<()> {
    match state.tables.get(number) {
        Some(table) if table.is_occupied() => Ok(()),
        Some(_) => Err(CommandError::unavailable(format!(
            "Table {} is not occupied.",
            number
        ))),
        None => Err(CoreError::TableNotFound { number }.into()),
    }
}

/// Adds `quantity` of menu entry `item_index` to an occupied table's ticket.
///
/// ## Errors
/// - `NotFound` for a missing or unnamed menu entry
/// - `Validation` for a quantity below 1
/// - `Validation` when the line would make the bill too large to hold
/// - `Capacity` when the ticket is full
pub fn add_order_line(
    state: &mut RestaurantState,
    table: usize,
    item_index: i64,
    quantity: i64,
) -> CommandResult<OrderLine> {
    debug!(table, item_index, quantity, "add_order_line command");
    require_occupied(state, table)?;

    let index = usize::try_from(item_index).unwrap_or(0);
    let item = state.menu.orderable(index)?;

    let record = state
        .tables
        .get_mut(table)
        .ok_or(CoreError::TableNotFound { number: table })?;
    record.ticket_mut().add_line(item, quantity)?;

    Ok(OrderLine {
        item: item.clone(),
        quantity,
    })
}

/// Totals an occupied table's ticket at the configured tax rate.
pub fn get_bill(state: &RestaurantState, table: usize) -> CommandResult<Bill> {
    debug!(table, "get_bill command");
    require_occupied(state, table)?;

    let record = state
        .tables
        .get(table)
        .ok_or(CoreError::TableNotFound { number: table })?;
    let ticket = record.ticket();
    let subtotal = ticket.subtotal();

    Ok(Bill {
        table,
        opened_at: ticket.opened_at(),
        ticket: ticket.clone(),
        subtotal,
        tax_rate: state.tax_rate,
        tax: Amount::tax_on(subtotal, state.tax_rate),
        total: record.bill(state.tax_rate, Money::zero()),
    })
}

/// Taxed ticket totals summed over every occupied or reserved table.
pub fn total_earnings(state: &RestaurantState) -> Amount {
    state.tables.total_earnings(state.tax_rate)
}
