//! # Tables
//!
//! Table records and the fixed registry of tables on the floor.
//!
//! ## Table State
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  reserved and occupied are independent flags                            │
//! │                                                                         │
//! │              reserve()                 occupy()                         │
//! │   Vacant ──────────────► Reserved ─────────────────► Reserved+Occupied  │
//! │     │                                                     │             │
//! │     │ occupy()                                            │             │
//! │     ▼                                                     │             │
//! │   Occupied ◄──────────────────────────────────────────────┘             │
//! │     │                 (dine-in replaces the record)                     │
//! │     │                                                                   │
//! │     └──── vacate() ──► Vacant, empty ticket  (from any state)           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The record enforces no preconditions; availability rules live with the
//! caller that decides who may reserve or seat a table.

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::money::{Amount, Money};
use crate::ticket::OrderTicket;
use crate::types::TaxRate;
use crate::{MAX_TICKET_LINES, TABLE_COUNT};

// =============================================================================
// Table Status
// =============================================================================

/// Combined view of the two table flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TableStatus {
    Vacant,
    Reserved,
    Occupied,
    ReservedAndOccupied,
}

impl TableStatus {
    fn from_flags(occupied: bool, reserved: bool) -> Self {
        match (occupied, reserved) {
            (false, false) => TableStatus::Vacant,
            (false, true) => TableStatus::Reserved,
            (true, false) => TableStatus::Occupied,
            (true, true) => TableStatus::ReservedAndOccupied,
        }
    }
}

// =============================================================================
// Table Record
// =============================================================================

/// One table and the ticket it owns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableRecord {
    number: usize,
    occupied: bool,
    reserved: bool,
    ticket: OrderTicket,
}

impl TableRecord {
    /// A vacant, unreserved table with an empty ticket.
    pub fn new(number: usize) -> Self {
        Self::with_ticket_capacity(number, MAX_TICKET_LINES)
    }

    pub fn with_ticket_capacity(number: usize, ticket_capacity: usize) -> Self {
        TableRecord {
            number,
            occupied: false,
            reserved: false,
            ticket: OrderTicket::with_capacity(ticket_capacity),
        }
    }

    pub fn number(&self) -> usize {
        self.number
    }

    pub fn is_occupied(&self) -> bool {
        self.occupied
    }

    pub fn is_reserved(&self) -> bool {
        self.reserved
    }

    pub fn status(&self) -> TableStatus {
        TableStatus::from_flags(self.occupied, self.reserved)
    }

    pub fn ticket(&self) -> &OrderTicket {
        &self.ticket
    }

    pub fn ticket_mut(&mut self) -> &mut OrderTicket {
        &mut self.ticket
    }

    /// Sets the reserved flag. Occupancy and ticket are untouched.
    pub fn reserve(&mut self) {
        self.reserved = true;
        info!(table = self.number, "Table reserved");
    }

    /// Sets the occupied flag. Reservation and ticket are untouched.
    pub fn occupy(&mut self) {
        self.occupied = true;
        info!(table = self.number, "Table occupied");
    }

    /// Clears both flags and starts a fresh, empty ticket.
    pub fn vacate(&mut self) {
        self.occupied = false;
        self.reserved = false;
        self.ticket = OrderTicket::with_capacity(self.ticket.capacity());
        info!(table = self.number, "Table vacated");
    }

    /// The ticket total at the given tax rate and discount.
    pub fn bill(&self, tax_rate: TaxRate, discount: Money) -> Amount {
        self.ticket.total(tax_rate, discount)
    }

    /// Single-line status, e.g. `Table 3: Vacant (Reserved)`.
    pub fn describe(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for TableRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Table {}: {}{}",
            self.number,
            if self.occupied { "Occupied" } else { "Vacant" },
            if self.reserved { " (Reserved)" } else { "" }
        )
    }
}

// =============================================================================
// Table Registry
// =============================================================================

/// The fixed set of tables, numbered 1..=count. Never resized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableRegistry {
    tables: Vec<TableRecord>,
    ticket_capacity: usize,
}

impl TableRegistry {
    /// Creates `count` vacant tables whose tickets hold `ticket_capacity` lines.
    pub fn new(count: usize, ticket_capacity: usize) -> Self {
        TableRegistry {
            tables: (1..=count)
                .map(|n| TableRecord::with_ticket_capacity(n, ticket_capacity))
                .collect(),
            ticket_capacity,
        }
    }

    pub fn len(&self) -> usize {
        self.tables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }

    /// Looks up a table by its 1-based number.
    pub fn get(&self, number: usize) -> Option<&TableRecord> {
        number.checked_sub(1).and_then(|i| self.tables.get(i))
    }

    pub fn get_mut(&mut self, number: usize) -> Option<&mut TableRecord> {
        number.checked_sub(1).and_then(|i| self.tables.get_mut(i))
    }

    /// Replaces a slot with a brand new record of the same number.
    ///
    /// Any reservation and ticket on the old record are dropped.
    pub fn reset(&mut self, number: usize) -> Option<&mut TableRecord> {
        let ticket_capacity = self.ticket_capacity;
        let slot = self.get_mut(number)?;
        *slot = TableRecord::with_ticket_capacity(number, ticket_capacity);
        Some(slot)
    }

    pub fn iter(&self) -> impl Iterator<Item = &TableRecord> {
        self.tables.iter()
    }

    /// Sum of `bill(tax_rate, 0)` over every occupied or reserved table.
    pub fn total_earnings(&self, tax_rate: TaxRate) -> Amount {
        self.tables
            .iter()
            .filter(|t| t.is_occupied() || t.is_reserved())
            .map(|t| t.bill(tax_rate, Money::zero()))
            .sum()
    }
}

impl Default for TableRegistry {
    fn default() -> Self {
        Self::new(TABLE_COUNT, MAX_TICKET_LINES)
    }
}
