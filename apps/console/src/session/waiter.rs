//! Waiter session: table overview, order taking, bills and clearing tables.
//!
//! A bad table number, or a table that is not occupied, ends the whole
//! session and hands control back to the driver.

use bistro_core::Role;
use tracing::{debug, warn};

use super::{report, show_tables, RoleSession};
use crate::commands::{order, table};
use crate::console::Console;
use crate::error::{ConsoleResult, ErrorCode};
use crate::state::RestaurantState;

const WAITER_MENU: &str = "\nWaiter Menu:
1. View Tables
2. Take Order
3. Print Bill
4. Clear Table
5. Exit Waiter Menu";

pub struct WaiterSession;

/// Whether the menu loop keeps going after an action.
enum Flow {
    Continue,
    Abort,
}

impl RoleSession for WaiterSession {
    fn role(&self) -> Role {
        Role::Waiter
    }

    fn run(&self, console: &mut dyn Console, state: &mut RestaurantState) -> ConsoleResult<()> {
        loop {
            console.say(WAITER_MENU)?;
            let choice = console.prompt_number("Enter your choice: ")?;
            debug!(?choice, "Waiter menu choice");

            let flow = match choice {
                Some(1) => {
                    show_tables(console, state)?;
                    Flow::Continue
                }
                Some(2) => take_order(console, state)?,
                Some(3) => print_bill(console, state)?,
                Some(4) => clear_table(console, state)?,
                Some(5) => {
                    console.say("Exiting Waiter Menu")?;
                    return Ok(());
                }
                _ => {
                    console.say("Invalid choice. Try again.")?;
                    Flow::Continue
                }
            };

            if let Flow::Abort = flow {
                return Ok(());
            }
        }
    }
}

/// Prompts for a table number. `None` once the abort message is printed.
fn prompt_table(
    console: &mut dyn Console,
    state: &RestaurantState,
    purpose: &str,
) -> ConsoleResult<Option<usize>> {
    let label = format!(
        "Enter table number to {} (1-{}): ",
        purpose,
        state.tables.len()
    );
    let input = console.prompt_number(&label)?;

    match input.map(|n| table::resolve_table(state, n)) {
        Some(Ok(number)) => Ok(Some(number)),
        _ => {
            warn!(?input, "Waiter session aborted on table number");
            console.say("Invalid table number. Exiting.")?;
            Ok(None)
        }
    }
}

/// Like [`prompt_table`], but the table must also be occupied.
fn prompt_occupied_table(
    console: &mut dyn Console,
    state: &RestaurantState,
    purpose: &str,
) -> ConsoleResult<Option<usize>> {
    let Some(number) = prompt_table(console, state, purpose)? else {
        return Ok(None);
    };

    match order::require_occupied(state, number) {
        Ok(()) => Ok(Some(number)),
        Err(e) => {
            report(console, &e)?;
            Ok(None)
        }
    }
}

fn take_order(console: &mut dyn Console, state: &mut RestaurantState) -> ConsoleResult<Flow> {
    let Some(number) = prompt_occupied_table(console, state, "take order")? else {
        return Ok(Flow::Abort);
    };

    console.say("Here is the menu:")?;
    console.show(&state.menu.to_string())?;

    loop {
        let item = console.prompt_number("Enter the item number you'd like to order (0 to finish): ")?;
        // Anything but a number ends the order, like 0 does
        let index = match item {
            Some(0) | None => break,
            Some(index) => index,
        };

        let Some(quantity) = console.prompt_number("Enter quantity: ")? else {
            console.say("Invalid quantity. Please try again.")?;
            continue;
        };

        match order::add_order_line(state, number, index, quantity) {
            Ok(line) => console.say(&format!(
                "Added {}x {} to the order.",
                line.quantity, line.item.name
            ))?,
            Err(e) if e.code == ErrorCode::NotFound => {
                report(console, &e)?;
                console.say("Invalid item number. Please try again.")?;
            }
            Err(e) => report(console, &e)?,
        }
    }

    console.say(&format!("Order taken successfully for Table {}.", number))?;
    Ok(Flow::Continue)
}

fn print_bill(console: &mut dyn Console, state: &RestaurantState) -> ConsoleResult<Flow> {
    let Some(number) = prompt_occupied_table(console, state, "print bill")? else {
        return Ok(Flow::Abort);
    };

    match order::get_bill(state, number) {
        Ok(bill) => {
            console.say(&format!("Table {} Order Summary:", bill.table))?;
            console.say(&format!(
                "Opened: {}",
                bill.opened_at.format("%Y-%m-%d %H:%M:%S UTC")
            ))?;
            console.show(&bill.ticket.to_string())?;
            console.say(&format!("Subtotal: {}", bill.subtotal))?;
            console.say(&format!(
                "Tax ({}%): {}",
                bill.tax_rate.percentage(),
                bill.tax
            ))?;
            console.say(&format!("Total Bill (including tax): {}", bill.total))?;
        }
        Err(e) => report(console, &e)?,
    }
    Ok(Flow::Continue)
}

fn clear_table(console: &mut dyn Console, state: &mut RestaurantState) -> ConsoleResult<Flow> {
    let Some(number) = prompt_table(console, state, "clear")? else {
        return Ok(Flow::Abort);
    };

    match table::vacate_table(state, number as i64) {
        Ok(number) => console.say(&format!("Table {} is now vacant.", number))?,
        Err(e) => report(console, &e)?,
    }
    Ok(Flow::Continue)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::table::{dine_in, reserve_table};
    use crate::console::scripted::{console, stderr, stdout};
    use bistro_core::TableStatus;

    fn seated(table: i64) -> RestaurantState {
        let mut state = RestaurantState::default();
        dine_in(&mut state, table).unwrap();
        state
    }

    #[test]
    fn test_take_order_and_print_bill() {
        let mut state = seated(5);
        let mut c = console("2\n5\n1\n2\n0\n3\n5\n5\n");

        WaiterSession.run(&mut c, &mut state).unwrap();

        let ticket = state.tables.get(5).unwrap().ticket();
        assert_eq!(ticket.len(), 1);
        assert_eq!(ticket.lines()[0].quantity, 2);

        let out = stdout(&c);
        assert!(out.contains("Enter table number to take order (1-20): "));
        assert!(out.contains("Here is the menu:\nName"));
        assert!(out.contains("Added 2x Burger to the order.\n"));
        assert!(out.contains("Order taken successfully for Table 5.\n"));
        assert!(out.contains("Table 5 Order Summary:\n"));
        assert!(out.contains("Burger              9.99      2         19.98"));
        assert!(out.contains("Subtotal: $19.98\nTax (10%): $1.998\n"));
        assert!(out.contains("Total Bill (including tax): $21.978\n"));
        assert!(out.ends_with("Exiting Waiter Menu\n"));
    }

    #[test]
    fn test_invalid_item_keeps_prompting() {
        let mut state = seated(1);
        let mut c = console("2\n1\n9\n1\n3\n0\n0\n5\n");

        WaiterSession.run(&mut c, &mut state).unwrap();

        let out = stdout(&c);
        assert!(out.contains("Invalid menu item index: 9\nInvalid item number. Please try again.\n"));
        assert!(out.contains("quantity must be positive"));
        assert!(state.tables.get(1).unwrap().ticket().is_empty());
    }

    #[test]
    fn test_non_numeric_item_ends_order() {
        let mut state = seated(2);
        let mut c = console("2\n2\n4\n1\ndone\n5\n");

        WaiterSession.run(&mut c, &mut state).unwrap();

        let out = stdout(&c);
        assert!(out.contains("Added 1x Salad to the order.\n"));
        assert!(out.contains("Order taken successfully for Table 2.\n"));
        assert!(!out.contains("Invalid item number"));
        assert!(out.ends_with("Exiting Waiter Menu\n"));
        assert_eq!(state.tables.get(2).unwrap().ticket().len(), 1);
    }

    #[test]
    fn test_huge_quantity_is_refused_and_bill_stays_sane() {
        let mut state = seated(5);
        let mut c = console("2\n5\n1\n9223372036854775807\n0\n3\n5\n5\n");

        WaiterSession.run(&mut c, &mut state).unwrap();

        let out = stdout(&c);
        assert!(out.contains("Order total is too large. Line not added.\n"));
        assert!(!out.contains("Added"));
        assert!(out.contains("Total Bill (including tax): $0.00\n"));
        assert!(out.ends_with("Exiting Waiter Menu\n"));
        assert!(state.tables.get(5).unwrap().ticket().is_empty());
    }

    #[test]
    fn test_invalid_table_number_aborts_session() {
        let mut state = RestaurantState::default();
        let mut c = console("2\n21\n1\n");

        WaiterSession.run(&mut c, &mut state).unwrap();

        let out = stdout(&c);
        assert!(out.ends_with("Invalid table number. Exiting.\n"));
        assert!(!out.contains("Exiting Waiter Menu"));
    }

    #[test]
    fn test_bill_for_unoccupied_table_aborts_session() {
        let mut state = RestaurantState::default();
        reserve_table(&mut state, 4).unwrap();
        let mut c = console("3\n4\n");

        WaiterSession.run(&mut c, &mut state).unwrap();

        let out = stdout(&c);
        assert!(out.ends_with("Table 4 is not occupied.\n"));
        assert!(!out.contains("Order Summary"));
        assert!(stderr(&c).is_empty());
    }

    #[test]
    fn test_clear_table() {
        let mut state = seated(9);
        crate::commands::order::add_order_line(&mut state, 9, 2, 1).unwrap();
        let mut c = console("4\n9\n1\n5\n");

        WaiterSession.run(&mut c, &mut state).unwrap();

        let table = state.tables.get(9).unwrap();
        assert_eq!(table.status(), TableStatus::Vacant);
        assert!(table.ticket().is_empty());
        let out = stdout(&c);
        assert!(out.contains("Enter table number to clear (1-20): "));
        assert!(out.contains("Table 9 is now vacant.\n"));
        assert!(out.contains("Table 9: Vacant\n"));
    }

    #[test]
    fn test_non_numeric_choice() {
        let mut state = RestaurantState::default();
        let mut c = console("menu\n5\n");

        WaiterSession.run(&mut c, &mut state).unwrap();
        assert!(stdout(&c).contains("Invalid choice. Try again.\n"));
    }
}
