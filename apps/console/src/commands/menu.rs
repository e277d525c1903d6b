//! # Menu Commands
//!
//! Admin-side catalog maintenance: add an entry, save the catalog to a file,
//! replace the catalog from a file.

use std::path::Path;

use bistro_core::validation::validate_price;
use bistro_core::{MenuItem, Money};
use bistro_store::LoadedMenu;
use tracing::debug;

use crate::error::{CommandError, CommandResult};
use crate::state::RestaurantState;

/// Outcome of replacing the catalog from a file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuLoadSummary {
    /// Entries now in the catalog.
    pub items: usize,
    /// Well-formed entries dropped because the catalog filled up.
    pub overflow: usize,
    /// Capacity the catalog was loaded with.
    pub capacity: usize,
}

/// Appends a new entry, parsing `price` as a decimal amount.
///
/// ## Errors
/// - `Validation` when the price is not a decimal or is negative
/// - `Capacity` when the catalog is full; nothing is added
pub fn add_menu_item(
    state: &mut RestaurantState,
    name: &str,
    description: &str,
    price: &str,
) -> CommandResult<MenuItem> {
    debug!(name = %name, price = %price, "add_menu_item command");

    let price: Money = price
        .parse()
        .map_err(|_| CommandError::validation(format!("Invalid price: {}", price.trim())))?;
    validate_price(price)
        .map_err(|_| CommandError::validation("Price cannot be negative."))?;

    let item = MenuItem::new(name, description, price);
    state.menu.add(item.clone())?;
    Ok(item)
}

/// Writes the whole catalog to `path`. Returns the number of entries written.
pub fn save_menu(state: &RestaurantState, path: impl AsRef<Path>) -> CommandResult<usize> {
    debug!(path = %path.as_ref().display(), "save_menu command");
    bistro_store::save_menu(&state.menu, path)?;
    Ok(state.menu.len())
}

/// Replaces the catalog with the contents of `path`.
///
/// On a read failure the current catalog is kept.
pub fn load_menu(state: &mut RestaurantState, path: impl AsRef<Path>) -> CommandResult<MenuLoadSummary> {
    debug!(path = %path.as_ref().display(), "load_menu command");

    let capacity = state.menu.capacity();
    let LoadedMenu {
        catalog, overflow, ..
    } = bistro_store::load_menu(path, capacity)?;

    state.menu = catalog;
    Ok(MenuLoadSummary {
        items: state.menu.len(),
        overflow,
        capacity,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use bistro_core::{MenuCatalog, TableRegistry, TaxRate};

    fn empty_state(capacity: usize) -> RestaurantState {
        RestaurantState::new(TableRegistry::default(), capacity, TaxRate::from_bps(1000))
    }

    #[test]
    fn test_add_menu_item() {
        let mut state = empty_state(100);
        let item = add_menu_item(&mut state, "Soup", "Tomato", "4.5").unwrap();

        assert_eq!(item.price.cents(), 450);
        assert_eq!(state.menu.get(1), Some(&item));
    }

    #[test]
    fn test_add_rejects_bad_prices() {
        let mut state = empty_state(100);

        let err = add_menu_item(&mut state, "Soup", "Tomato", "cheap").unwrap_err();
        assert_eq!(err.code, ErrorCode::Validation);

        let err = add_menu_item(&mut state, "Soup", "Tomato", "-1.00").unwrap_err();
        assert_eq!(err.code, ErrorCode::Validation);

        assert!(state.menu.is_empty());
    }

    #[test]
    fn test_add_to_full_menu() {
        let mut state = empty_state(100);
        for n in 0..100 {
            add_menu_item(&mut state, &format!("Dish {}", n), "", "1.00").unwrap();
        }

        let err = add_menu_item(&mut state, "Dish 101", "", "1.00").unwrap_err();
        assert_eq!(err.code, ErrorCode::Capacity);
        assert_eq!(err.message, "Menu is full. Cannot add more than 100 items.");
        assert_eq!(state.menu.len(), 100);
    }

    #[test]
    fn test_save_and_load_menu() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("menu.txt");
        let mut state = RestaurantState::default();

        assert_eq!(save_menu(&state, &path).unwrap(), 4);

        state.menu = MenuCatalog::with_capacity(100);
        let summary = load_menu(&mut state, &path).unwrap();
        assert_eq!(summary.items, 4);
        assert_eq!(summary.overflow, 0);
        assert_eq!(state.menu.get(4).unwrap().name, "Salad");
    }

    #[test]
    fn test_load_reports_overflow() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("menu.txt");
        save_menu(&RestaurantState::default(), &path).unwrap();

        let mut state = empty_state(3);
        let summary = load_menu(&mut state, &path).unwrap();
        assert_eq!(summary.items, 3);
        assert_eq!(summary.overflow, 1);
    }

    #[test]
    fn test_failed_load_keeps_catalog() {
        let dir = tempfile::tempdir().unwrap();
        let mut state = RestaurantState::default();

        let err = load_menu(&mut state, dir.path().join("missing.txt")).unwrap_err();
        assert_eq!(err.code, ErrorCode::Storage);
        assert!(err.is_error_stream());
        assert_eq!(state.menu.len(), 4);
    }
}
