//! Customer session: a single reserve-or-dine-in request, no login.

use bistro_core::Role;
use tracing::debug;

use super::{report, RoleSession};
use crate::commands::table;
use crate::console::Console;
use crate::error::{CommandError, ConsoleResult, ErrorCode};
use crate::state::RestaurantState;

const CUSTOMER_MENU: &str = "Welcome! Please choose an option:
1. Reserve a table
2. Dine in";

pub struct CustomerSession;

impl RoleSession for CustomerSession {
    fn role(&self) -> Role {
        Role::Customer
    }

    fn run(&self, console: &mut dyn Console, state: &mut RestaurantState) -> ConsoleResult<()> {
        console.say(CUSTOMER_MENU)?;
        let choice = console.prompt_number("Enter your choice: ")?;
        debug!(?choice, "Customer menu choice");

        let tables = state.tables.len();
        match choice {
            Some(1) => {
                let label = format!("Enter table number to reserve (1-{}): ", tables);
                let number = console.prompt_number(&label)?.unwrap_or(0);
                match table::reserve_table(state, number) {
                    Ok(number) => {
                        console.say(&format!("Table {} reserved successfully!", number))
                    }
                    Err(e) => refuse(console, &e),
                }
            }
            Some(2) => {
                let label = format!("Enter table number to dine in (1-{}): ", tables);
                let number = console.prompt_number(&label)?.unwrap_or(0);
                match table::dine_in(state, number) {
                    Ok(number) => {
                        console.say(&format!("You are now seated at Table {}.", number))?;
                        console.say("Please call a waiter to take your order.")
                    }
                    Err(e) => refuse(console, &e),
                }
            }
            _ => console.say("Invalid choice. Exiting."),
        }
    }
}

fn refuse(console: &mut dyn Console, err: &CommandError) -> ConsoleResult<()> {
    if err.code == ErrorCode::NotFound {
        console.say("Invalid table number. Exiting.")
    } else {
        report(console, err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::console::scripted::{console, stdout};
    use bistro_core::TableStatus;

    fn run(state: &mut RestaurantState, script: &str) -> String {
        let mut c = console(script);
        CustomerSession.run(&mut c, state).unwrap();
        stdout(&c)
    }

    #[test]
    fn test_reserve_then_dine_in_same_table() {
        let mut state = RestaurantState::default();

        let out = run(&mut state, "1\n3\n");
        assert!(out.starts_with("Welcome! Please choose an option:\n1. Reserve a table\n2. Dine in\n"));
        assert!(out.contains("Enter table number to reserve (1-20): "));
        assert!(out.ends_with("Table 3 reserved successfully!\n"));
        assert_eq!(state.tables.get(3).unwrap().status(), TableStatus::Reserved);

        let out = run(&mut state, "2\n3\n");
        assert!(out.contains("You are now seated at Table 3.\nPlease call a waiter to take your order.\n"));
        assert_eq!(state.tables.get(3).unwrap().status(), TableStatus::Occupied);
    }

    #[test]
    fn test_reserve_taken_table_is_refused() {
        let mut state = RestaurantState::default();
        run(&mut state, "2\n6\n");

        let out = run(&mut state, "1\n6\n");
        assert!(out.ends_with(
            "Sorry, the table is not available for reservation. Please choose another table or dine in.\n"
        ));
        assert_eq!(state.tables.get(6).unwrap().status(), TableStatus::Occupied);
    }

    #[test]
    fn test_dine_in_occupied_table_is_refused() {
        let mut state = RestaurantState::default();
        run(&mut state, "2\n6\n");

        let out = run(&mut state, "2\n6\n");
        assert!(out.ends_with("Sorry, the table is already occupied. Please choose another table.\n"));
    }

    #[test]
    fn test_bad_table_and_bad_choice() {
        let mut state = RestaurantState::default();
        assert!(run(&mut state, "1\n0\n").ends_with("Invalid table number. Exiting.\n"));
        assert!(run(&mut state, "2\nfour\n").ends_with("Invalid table number. Exiting.\n"));
        assert!(run(&mut state, "3\n").ends_with("Invalid choice. Exiting.\n"));
        assert!(state.tables.iter().all(|t| t.status() == TableStatus::Vacant));
    }
}
