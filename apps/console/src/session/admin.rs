//! Admin session: catalog maintenance, table overview and earnings.

use bistro_core::{CoreError, Role};
use tracing::debug;

use super::{report, show_tables, RoleSession};
use crate::commands::{menu, order};
use crate::console::Console;
use crate::error::ConsoleResult;
use crate::state::RestaurantState;

const ADMIN_MENU: &str = "\nAdmin Menu:
1. Add Menu Item
2. Display Menu
3. Save Menu to File
4. Load Menu from File
5. View Tables
6. View Total Earnings
7. Exit Admin Menu";

pub struct AdminSession;

impl RoleSession for AdminSession {
    fn role(&self) -> Role {
        Role::Admin
    }

    fn run(&self, console: &mut dyn Console, state: &mut RestaurantState) -> ConsoleResult<()> {
        loop {
            console.say(ADMIN_MENU)?;
            let choice = console.prompt_number("Enter your choice: ")?;
            debug!(?choice, "Admin menu choice");

            match choice {
                Some(1) => add_item(console, state)?,
                Some(2) => console.show(&state.menu.to_string())?,
                Some(3) => {
                    let path = console.prompt("Enter filename to save menu: ")?;
                    match menu::save_menu(state, &path) {
                        Ok(count) => console.say(&format!("Saved {} menu items to {}.", count, path))?,
                        Err(e) => report(console, &e)?,
                    }
                }
                Some(4) => {
                    let path = console.prompt("Enter filename to load menu: ")?;
                    match menu::load_menu(state, &path) {
                        Ok(summary) => {
                            if summary.overflow > 0 {
                                let full = CoreError::MenuFull {
                                    max: summary.capacity,
                                };
                                console.warn(&format!("{} ({} skipped)", full, summary.overflow))?;
                            }
                            console.say(&format!(
                                "Loaded {} menu items from {}.",
                                summary.items, path
                            ))?;
                        }
                        Err(e) => report(console, &e)?,
                    }
                }
                Some(5) => show_tables(console, state)?,
                Some(6) => {
                    let earnings = order::total_earnings(state);
                    console.say(&format!("Total Earnings so far: {}", earnings))?;
                }
                Some(7) => {
                    console.say("Exiting Admin Menu")?;
                    return Ok(());
                }
                _ => console.say("Invalid choice. Try again.")?,
            }
        }
    }
}

fn add_item(console: &mut dyn Console, state: &mut RestaurantState) -> ConsoleResult<()> {
    let name = console.prompt("Enter Food name: ")?;
    let description = console.prompt("Enter Food description: ")?;
    let price = console.prompt("Enter Food price: ")?;

    match menu::add_menu_item(state, &name, &description, &price) {
        Ok(item) => console.say(&format!("Added {} to the menu.", item.name)),
        Err(e) => report(console, &e),
    }
}
