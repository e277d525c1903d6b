//! # Role Sessions
//!
//! One interactive action loop per role, all behind [`RoleSession`].
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Driver ── Role::from_choice ── authenticate ── session_for(role)       │
//! │                                                      │                  │
//! │              ┌───────────────────────────────────────┼──────────┐       │
//! │              ▼                                       ▼          ▼       │
//! │     AdminSession                            WaiterSession  CustomerSession
//! │     menu 1..7, loops until Exit             menu 1..5,     one choice,  │
//! │                                             loops until    then returns │
//! │                                             Exit or a bad               │
//! │                                             table number                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Sessions are only built after authentication has succeeded.

mod admin;
mod customer;
mod waiter;

pub use admin::AdminSession;
pub use customer::CustomerSession;
pub use waiter::WaiterSession;

use bistro_core::Role;

use crate::commands::table::table_listing;
use crate::console::Console;
use crate::error::{CommandError, ConsoleResult};
use crate::state::RestaurantState;

/// An authenticated, role-scoped action loop.
pub trait RoleSession {
    fn role(&self) -> Role;

    /// Runs until the role exits. Returns early only on console failure.
    fn run(&self, console: &mut dyn Console, state: &mut RestaurantState) -> ConsoleResult<()>;
}

/// Picks the session implementation for `role`.
pub fn session_for(role: Role) -> Box<dyn RoleSession> {
    match role {
        Role::Admin => Box::new(AdminSession),
        Role::Waiter => Box::new(WaiterSession),
        Role::Customer => Box::new(CustomerSession),
    }
}

/// Prints every table's status under a "Tables:" heading.
pub(crate) fn show_tables(console: &mut dyn Console, state: &RestaurantState) -> ConsoleResult<()> {
    console.say("Tables:")?;
    for line in table_listing(state) {
        console.say(&line)?;
    }
    Ok(())
}

/// Prints a command failure on the stream its kind belongs to.
pub(crate) fn report(console: &mut dyn Console, err: &CommandError) -> ConsoleResult<()> {
    if err.is_error_stream() {
        console.warn(&err.message)
    } else {
        console.say(&err.message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_for_each_role() {
        for role in [Role::Admin, Role::Waiter, Role::Customer] {
            assert_eq!(session_for(role).role(), role);
        }
    }
}
