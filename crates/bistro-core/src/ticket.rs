//! # Order Ticket
//!
//! The lines a table has ordered during its current visit.
//!
//! ## Bill Math
//! ```text
//! subtotal = Σ price × quantity          (Money, always fits in i64)
//! tax      = subtotal × rate             (Amount, exact)
//! total    = subtotal + tax − discount   (Amount, may go negative)
//! ```

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};
use crate::menu::MenuItem;
use crate::money::{Amount, Money};
use crate::types::TaxRate;
use crate::validation::validate_quantity;
use crate::MAX_TICKET_LINES;

/// One ordered dish.
///
/// The menu entry is copied in, so later menu edits or reloads never change
/// what an open ticket charges.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderLine {
    pub item: MenuItem,
    pub quantity: i64,
}

impl OrderLine {
    /// Unit price × quantity.
    pub fn line_total(&self) -> Money {
        self.item.price * self.quantity
    }
}

/// Capacity-bounded list of order lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderTicket {
    lines: Vec<OrderLine>,
    capacity: usize,
    opened_at: DateTime<Utc>,
}

impl OrderTicket {
    /// Creates an empty ticket with the default capacity.
    pub fn new() -> Self {
        Self::with_capacity(MAX_TICKET_LINES)
    }

    /// Creates an empty ticket holding at most `capacity` lines.
    pub fn with_capacity(capacity: usize) -> Self {
        OrderTicket {
            lines: Vec::new(),
            capacity,
            opened_at: Utc::now(),
        }
    }

    /// Appends a line for `quantity` of `item`.
    ///
    /// Repeated dishes get separate lines; nothing is merged.
    ///
    /// ## Errors
    /// - `CoreError::Validation` when quantity is not positive
    /// - `CoreError::TicketFull` when the ticket is at capacity
    /// - `CoreError::TicketOverflow` when the line total or the new subtotal
    ///   would not fit in `Money`
    pub fn add_line(&mut self, item: &MenuItem, quantity: i64) -> CoreResult<()> {
        validate_quantity(quantity)?;

        if self.lines.len() >= self.capacity {
            return Err(CoreError::TicketFull {
                max: self.capacity,
            });
        }

        item.price
            .checked_mul(quantity)
            .and_then(|line_total| self.subtotal().checked_add(line_total))
            .ok_or(CoreError::TicketOverflow)?;

        self.lines.push(OrderLine {
            item: item.clone(),
            quantity,
        });
        Ok(())
    }

    pub fn lines(&self) -> &[OrderLine] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// When this ticket was started.
    pub fn opened_at(&self) -> DateTime<Utc> {
        self.opened_at
    }

    /// Sum of all line totals, before tax and discount.
    pub fn subtotal(&self) -> Money {
        self.lines.iter().map(OrderLine::line_total).sum()
    }

    /// `subtotal × (1 + tax_rate) − discount`, with no rounding.
    ///
    /// ## Example
    /// ```rust
    /// use bistro_core::{Amount, MenuItem, Money, OrderTicket, TaxRate};
    ///
    /// let burger = MenuItem::new("Burger", "Classic beef burger", Money::from_cents(999));
    /// let mut ticket = OrderTicket::new();
    /// ticket.add_line(&burger, 2).unwrap();
    ///
    /// assert_eq!(ticket.total(TaxRate::zero(), Money::zero()), Amount::from(Money::from_cents(1998)));
    /// assert_eq!(ticket.total(TaxRate::from_bps(1000), Money::zero()).to_string(), "$21.978");
    /// ```
    pub fn total(&self, tax_rate: TaxRate, discount: Money) -> Amount {
        Amount::taxed(self.subtotal(), tax_rate) - Amount::from(discount)
    }
}

impl Default for OrderTicket {
    fn default() -> Self {
        Self::new()
    }
}

/// Renders name, unit price, quantity and line total per line.
impl fmt::Display for OrderTicket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{:<20}{:<10}{:<10}{:<10}",
            "Name", "Price", "Quantity", "Total"
        )?;
        writeln!(f, "{}", "-".repeat(50))?;
        for line in &self.lines {
            writeln!(
                f,
                "{:<20}{:<10}{:<10}{:<10}",
                line.item.name,
                line.item.price.to_decimal_string(),
                line.quantity,
                line.line_total().to_decimal_string()
            )?;
        }
        Ok(())
    }
}
