//! # Session Driver
//!
//! The top-level loop around the role sessions.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  banner                                                                 │
//! │    │                                                                    │
//! │    ▼                                                                    │
//! │  ┌──► "Enter 1 for Admin, 2 for Waiter, or 3 for Customer: "           │
//! │  │      │ other ─────────────────────────────► Rejected (exit 1)        │
//! │  │      ▼                                                               │
//! │  │    username / password (Admin, Waiter)                               │
//! │  │      │ mismatch ──────────────────────────► Rejected (exit 1)        │
//! │  │      ▼                                                               │
//! │  │    session_for(role).run(...)                                        │
//! │  │      │                                                               │
//! │  │      ▼                                                               │
//! │  │    "Do you want to continue? (Y/N): "                                │
//! │  │      │ starts with n/N ───────────────────► Completed (exit 0)       │
//! │  └──────┘ anything else                                                 │
//! │                                                                         │
//! │  End of input at any prompt ─────────────────► Completed (exit 0)       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::process::ExitCode;

use bistro_core::{CredentialStore, Role};
use tracing::{info, warn};

use crate::console::Console;
use crate::error::{ConsoleError, ConsoleResult};
use crate::session::session_for;
use crate::state::RestaurantState;

/// How the driver loop ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The user declined to continue, or input ran out.
    Completed,
    /// Unknown role choice or failed login.
    Rejected,
}

impl Outcome {
    pub fn exit_code(self) -> ExitCode {
        match self {
            Outcome::Completed => ExitCode::SUCCESS,
            Outcome::Rejected => ExitCode::FAILURE,
        }
    }
}

pub struct Driver {
    credentials: CredentialStore,
    banner: String,
}

impl Driver {
    pub fn new(credentials: CredentialStore, banner: impl Into<String>) -> Self {
        Driver {
            credentials,
            banner: banner.into(),
        }
    }

    /// Runs the role loop until it completes or is rejected.
    ///
    /// Only a broken output or input stream comes back as an error.
    pub fn run(
        &self,
        console: &mut dyn Console,
        state: &mut RestaurantState,
    ) -> ConsoleResult<Outcome> {
        match self.run_loop(console, state) {
            Err(ConsoleError::Closed) => {
                info!("Input closed, ending");
                Ok(Outcome::Completed)
            }
            other => other,
        }
    }

    fn run_loop(
        &self,
        console: &mut dyn Console,
        state: &mut RestaurantState,
    ) -> ConsoleResult<Outcome> {
        console.say(&format!("\t\t\t\t{}", self.banner))?;

        loop {
            let choice =
                console.prompt_number("Enter 1 for Admin, 2 for Waiter, or 3 for Customer: ")?;
            let Some(role) = choice.and_then(Role::from_choice) else {
                console.say("Invalid user type. Exiting.")?;
                return Ok(Outcome::Rejected);
            };

            if role.requires_credential() && !self.login(console, role)? {
                warn!(%role, "Authentication failed");
                console.say("Authentication failed. Exiting.")?;
                return Ok(Outcome::Rejected);
            }

            info!(%role, "Session started");
            session_for(role).run(console, state)?;
            info!(%role, "Session ended");

            let reply = console.prompt("Do you want to continue? (Y/N): ")?;
            if matches!(reply.chars().next(), Some('n' | 'N')) {
                return Ok(Outcome::Completed);
            }
        }
    }

    fn login(&self, console: &mut dyn Console, role: Role) -> ConsoleResult<bool> {
        let username = console.prompt(&format!("Enter {} username: ", role))?;
        let password = console.prompt(&format!("Enter {} password: ", role))?;
        Ok(self.credentials.authenticate(role, &username, &password))
    }
}
