//! # Restaurant State
//!
//! Everything a role session can read or change, owned in one place and
//! passed by `&mut` to whichever session is active.
//!
//! ```text
//! ┌──────────────────────────────────────────────────┐
//! │  RestaurantState                                 │
//! │                                                  │
//! │   menu:     MenuCatalog      (seeded at startup) │
//! │   tables:   TableRegistry    (1..=table_count)   │
//! │   tax_rate: TaxRate          (bills, earnings)   │
//! └──────────────────────────────────────────────────┘
//! ```

use bistro_core::{house_menu, MenuCatalog, MenuItem, TableRegistry, TaxRate};
use tracing::{info, warn};

use crate::config::AppConfig;

#[derive(Debug, Clone)]
pub struct RestaurantState {
    pub menu: MenuCatalog,
    pub tables: TableRegistry,
    pub tax_rate: TaxRate,
}

impl RestaurantState {
    /// An empty catalog and vacant tables.
    pub fn new(tables: TableRegistry, menu_capacity: usize, tax_rate: TaxRate) -> Self {
        RestaurantState {
            menu: MenuCatalog::with_capacity(menu_capacity),
            tables,
            tax_rate,
        }
    }

    /// Builds the state described by `config`, seeding the catalog from its
    /// `[[menu]]` list or the house menu.
    pub fn from_config(config: &AppConfig) -> Self {
        let tables = TableRegistry::new(config.limits.table_count, config.limits.ticket_capacity);
        let mut state = Self::new(tables, config.limits.menu_capacity, config.tax_rate());

        let seed: Vec<MenuItem> = if config.menu.is_empty() {
            house_menu()
        } else {
            config.menu.iter().map(|s| s.to_item()).collect()
        };
        state.seed_menu(seed);

        info!(
            tables = state.tables.len(),
            menu_items = state.menu.len(),
            tax_bps = state.tax_rate.bps(),
            "Restaurant state initialized"
        );
        state
    }

    /// Appends `items` to the catalog, dropping whatever does not fit.
    pub fn seed_menu(&mut self, items: impl IntoIterator<Item = MenuItem>) {
        for item in items {
            if let Err(e) = self.menu.add(item) {
                warn!(error = %e, "Menu seed entry dropped");
            }
        }
    }
}

impl Default for RestaurantState {
    fn default() -> Self {
        Self::from_config(&AppConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MenuSeed;

    #[test]
    fn test_default_state_has_house_menu() {
        let state = RestaurantState::default();
        assert_eq!(state.menu.len(), 4);
        assert_eq!(state.menu.get(1).unwrap().name, "Burger");
        assert_eq!(state.tables.len(), 20);
        assert_eq!(state.tax_rate, TaxRate::from_bps(1000));
    }

    #[test]
    fn test_config_menu_replaces_house_menu() {
        let mut config = AppConfig::default();
        config.menu.push(MenuSeed {
            name: "Soup".to_string(),
            description: "Soup of the day".to_string(),
            price_cents: 650,
        });
        config.limits.table_count = 4;

        let state = RestaurantState::from_config(&config);
        assert_eq!(state.menu.len(), 1);
        assert_eq!(state.menu.get(1).unwrap().name, "Soup");
        assert_eq!(state.tables.len(), 4);
    }

    #[test]
    fn test_seed_beyond_capacity_is_dropped() {
        let mut config = AppConfig::default();
        config.limits.menu_capacity = 2;

        let state = RestaurantState::from_config(&config);
        assert_eq!(state.menu.len(), 2);
        assert_eq!(state.menu.get(2).unwrap().name, "Pizza");
    }
}
