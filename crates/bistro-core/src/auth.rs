//! # Roles and Credentials
//!
//! Who is at the console, and how they prove it.
//!
//! ```text
//! ┌───────────┬─────────────────────┬──────────────────────────────────┐
//! │  Role     │  Credential         │  Capabilities                    │
//! ├───────────┼─────────────────────┼──────────────────────────────────┤
//! │  Admin    │  username/password  │  menu edits, file I/O, earnings  │
//! │  Waiter   │  username/password  │  orders, bills, clearing tables  │
//! │  Customer │  none               │  reserve or dine in              │
//! └───────────┴─────────────────────┴──────────────────────────────────┘
//! ```
//!
//! Authentication is exact string equality on both fields.

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

// =============================================================================
// Role
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Admin,
    Waiter,
    Customer,
}

impl Role {
    /// Maps the top-level menu choice (1, 2, 3) to a role.
    pub fn from_choice(choice: i64) -> Option<Role> {
        match choice {
            1 => Some(Role::Admin),
            2 => Some(Role::Waiter),
            3 => Some(Role::Customer),
            _ => None,
        }
    }

    /// Customers walk in without logging in.
    pub fn requires_credential(&self) -> bool {
        !matches!(self, Role::Customer)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Role::Admin => write!(f, "admin"),
            Role::Waiter => write!(f, "waiter"),
            Role::Customer => write!(f, "customer"),
        }
    }
}

// =============================================================================
// Credential
// =============================================================================

/// A plaintext username/password pair.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credential {
    pub username: String,
    pub password: String,
}

impl Credential {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Credential {
            username: username.into(),
            password: password.into(),
        }
    }

    pub fn matches(&self, username: &str, password: &str) -> bool {
        self.username == username && self.password == password
    }
}

// Keeps passwords out of logs.
impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credential")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

// =============================================================================
// Credential Store
// =============================================================================

/// Role → credential mapping handed to the session driver at startup.
#[derive(Debug, Clone, Default)]
pub struct CredentialStore {
    credentials: HashMap<Role, Credential>,
}

impl CredentialStore {
    /// An empty store: nobody but customers can get in.
    pub fn new() -> Self {
        Self::default()
    }

    /// The stock logins: `admin`/`password` and `waiter`/`password`.
    pub fn with_defaults() -> Self {
        Self::new()
            .with(Role::Admin, Credential::new("admin", "password"))
            .with(Role::Waiter, Credential::new("waiter", "password"))
    }

    pub fn with(mut self, role: Role, credential: Credential) -> Self {
        self.insert(role, credential);
        self
    }

    pub fn insert(&mut self, role: Role, credential: Credential) {
        self.credentials.insert(role, credential);
    }

    /// Checks a login attempt for `role`.
    ///
    /// Customers always pass. A role with no stored credential never does.
    pub fn authenticate(&self, role: Role, username: &str, password: &str) -> bool {
        if !role.requires_credential() {
            return true;
        }

        self.credentials
            .get(&role)
            .is_some_and(|c| c.matches(username, password))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_from_choice() {
        assert_eq!(Role::from_choice(1), Some(Role::Admin));
        assert_eq!(Role::from_choice(2), Some(Role::Waiter));
        assert_eq!(Role::from_choice(3), Some(Role::Customer));
        assert_eq!(Role::from_choice(0), None);
        assert_eq!(Role::from_choice(4), None);
    }

    #[test]
    fn test_default_logins() {
        let store = CredentialStore::with_defaults();
        assert!(store.authenticate(Role::Admin, "admin", "password"));
        assert!(store.authenticate(Role::Waiter, "waiter", "password"));
        assert!(!store.authenticate(Role::Admin, "waiter", "password"));
        assert!(!store.authenticate(Role::Admin, "admin", "Password"));
        assert!(!store.authenticate(Role::Waiter, "waiter", ""));
    }

    #[test]
    fn test_customer_needs_no_login() {
        let store = CredentialStore::new();
        assert!(store.authenticate(Role::Customer, "", ""));
        assert!(!store.authenticate(Role::Admin, "admin", "password"));
    }

    #[test]
    fn test_injected_credential_replaces_default() {
        let store = CredentialStore::with_defaults()
            .with(Role::Admin, Credential::new("manager", "s3cret"));
        assert!(store.authenticate(Role::Admin, "manager", "s3cret"));
        assert!(!store.authenticate(Role::Admin, "admin", "password"));
    }

    #[test]
    fn test_debug_hides_password() {
        let rendered = format!("{:?}", Credential::new("admin", "hunter2"));
        assert!(rendered.contains("admin"));
        assert!(!rendered.contains("hunter2"));
    }
}
