//! # Menu Catalog
//!
//! The ordered list of dishes a table can order from.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  MenuCatalog (capacity 100)                                             │
//! │                                                                         │
//! │   #1  Burger   Classic beef burger                   9.99               │
//! │   #2  Pizza    Margherita pizza                     12.99               │
//! │   #3  ...                                                               │
//! │                                                                         │
//! │  add()  appends, or fails with MenuFull and changes nothing             │
//! │  get(i) 1-based; None outside 1..=len                                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::MAX_MENU_ITEMS;

// =============================================================================
// Menu Item
// =============================================================================

/// A dish on the menu. Order lines keep their own copy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuItem {
    pub name: String,
    pub description: String,
    pub price: Money,
}

impl MenuItem {
    pub fn new(name: impl Into<String>, description: impl Into<String>, price: Money) -> Self {
        MenuItem {
            name: name.into(),
            description: description.into(),
            price,
        }
    }

    /// An entry with an empty name cannot be ordered.
    pub fn is_orderable(&self) -> bool {
        !self.name.is_empty()
    }
}

/// The four dishes the restaurant opens with.
pub fn house_menu() -> Vec<MenuItem> {
    vec![
        MenuItem::new("Burger", "Classic beef burger", Money::from_cents(999)),
        MenuItem::new("Pizza", "Margherita pizza", Money::from_cents(1299)),
        MenuItem::new(
            "Pasta",
            "Spaghetti pasta with marinara sauce",
            Money::from_cents(899),
        ),
        MenuItem::new("Salad", "Fresh garden salad", Money::from_cents(599)),
    ]
}

// =============================================================================
// Menu Catalog
// =============================================================================

/// Capacity-bounded, insertion-ordered menu.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuCatalog {
    items: Vec<MenuItem>,
    capacity: usize,
}

impl MenuCatalog {
    /// Creates an empty catalog with the default capacity.
    pub fn new() -> Self {
        Self::with_capacity(MAX_MENU_ITEMS)
    }

    /// Creates an empty catalog holding at most `capacity` entries.
    pub fn with_capacity(capacity: usize) -> Self {
        MenuCatalog {
            items: Vec::new(),
            capacity,
        }
    }

    /// Appends an entry.
    ///
    /// ## Returns
    /// - `Ok(())` on success
    /// - `Err(CoreError::MenuFull)` when the catalog is at capacity; the
    ///   catalog is left untouched
    pub fn add(&mut self, item: MenuItem) -> CoreResult<()> {
        if self.items.len() >= self.capacity {
            return Err(CoreError::MenuFull {
                max: self.capacity,
            });
        }

        debug!(name = %item.name, price = %item.price, "Menu item added");
        self.items.push(item);
        Ok(())
    }

    /// Looks up an entry by its 1-based position.
    pub fn get(&self, index: usize) -> Option<&MenuItem> {
        index.checked_sub(1).and_then(|i| self.items.get(i))
    }

    /// Like [`get`](Self::get), but only for entries that can be ordered.
    pub fn orderable(&self, index: usize) -> CoreResult<&MenuItem> {
        self.get(index)
            .filter(|item| item.is_orderable())
            .ok_or(CoreError::ItemNotFound { index })
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn iter(&self) -> impl Iterator<Item = &MenuItem> {
        self.items.iter()
    }
}

impl Default for MenuCatalog {
    fn default() -> Self {
        Self::new()
    }
}

/// Renders the catalog as a fixed-width table with a header row.
impl fmt::Display for MenuCatalog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{:<20}{:<30}{:<10}", "Name", "Description", "Price")?;
        writeln!(f, "{}", "-".repeat(60))?;
        for item in &self.items {
            writeln!(
                f,
                "{:<20}{:<30}{:<10}",
                item.name,
                item.description,
                item.price.to_decimal_string()
            )?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn dish(n: usize) -> MenuItem {
        MenuItem::new(format!("Dish {}", n), "House special", Money::from_cents(100 + n as i64))
    }

    #[test]
    fn test_add_preserves_order() {
        let mut menu = MenuCatalog::new();
        for item in house_menu() {
            menu.add(item).unwrap();
        }

        assert_eq!(menu.len(), 4);
        assert_eq!(menu.get(1).unwrap().name, "Burger");
        assert_eq!(menu.get(4).unwrap().name, "Salad");
    }

    #[test]
    fn test_get_out_of_range() {
        let mut menu = MenuCatalog::new();
        menu.add(dish(1)).unwrap();

        assert!(menu.get(0).is_none());
        assert!(menu.get(2).is_none());
        assert!(MenuCatalog::new().get(1).is_none());
    }

    #[test]
    fn test_add_beyond_capacity_is_rejected() {
        let mut menu = MenuCatalog::new();
        for n in 0..MAX_MENU_ITEMS {
            menu.add(dish(n)).unwrap();
        }

        let err = menu.add(dish(101)).unwrap_err();
        assert!(matches!(err, CoreError::MenuFull { max: 100 }));
        assert_eq!(menu.len(), 100);
        assert_eq!(menu.get(100).unwrap().name, "Dish 99");
    }

    #[test]
    fn test_custom_capacity() {
        let mut menu = MenuCatalog::with_capacity(1);
        menu.add(dish(1)).unwrap();
        assert!(menu.add(dish(2)).is_err());
        assert_eq!(menu.capacity(), 1);
    }

    #[test]
    fn test_empty_name_is_not_orderable() {
        let mut menu = MenuCatalog::new();
        menu.add(MenuItem::new("", "ghost", Money::zero())).unwrap();
        menu.add(dish(2)).unwrap();

        assert!(menu.get(1).is_some());
        assert!(matches!(
            menu.orderable(1),
            Err(CoreError::ItemNotFound { index: 1 })
        ));
        assert!(menu.orderable(2).is_ok());
        assert!(menu.orderable(3).is_err());
    }

    #[test]
    fn test_display_layout() {
        let mut menu = MenuCatalog::new();
        menu.add(MenuItem::new("Burger", "Classic beef burger", Money::from_cents(999)))
            .unwrap();

        let rendered = menu.to_string();
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("Name                Description"));
        assert_eq!(lines[1], "-".repeat(60));
        assert_eq!(
            lines[2],
            format!("{:<20}{:<30}{:<10}", "Burger", "Classic beef burger", "9.99")
        );
    }

    proptest! {
        #[test]
        fn prop_get_finds_exactly_the_stored_range(n in 0usize..=100, i in 0usize..=120) {
            let mut menu = MenuCatalog::new();
            for k in 0..n {
                menu.add(dish(k)).unwrap();
            }

            let found = menu.get(i);
            prop_assert_eq!(found.is_some(), (1..=n).contains(&i));
            if let Some(item) = found {
                prop_assert_eq!(item, &dish(i - 1));
            }
        }
    }
}
