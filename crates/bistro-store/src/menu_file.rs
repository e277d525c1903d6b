//! # Menu File Format
//!
//! ```text
//! ┌──────────────────────────┐
//! │ Burger                   │  name
//! │ Classic beef burger      │  description
//! │ 9.99                     │  price (decimal, '.' separator)
//! │ Pizza                    │  name
//! │ ...                      │
//! └──────────────────────────┘
//! ```
//!
//! No header and no escaping: a newline inside a name or description
//! corrupts the file. Loading stops silently at the first record that is
//! incomplete or whose price line is not a non-negative decimal; whatever
//! was read before that point is kept.

use std::fs;
use std::path::Path;

use bistro_core::validation::validate_price;
use bistro_core::{CoreError, MenuCatalog, MenuItem, Money};
use tracing::{debug, info, warn};

use crate::error::{StoreError, StoreResult};

/// Result of reading a menu file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadedMenu {
    /// The replacement catalog.
    pub catalog: MenuCatalog,
    /// Well-formed records dropped because the catalog was full.
    pub overflow: usize,
    /// 1-based record number where parsing stopped early, if it did.
    pub truncated_at: Option<usize>,
}

/// Serializes every entry as three lines, in catalog order.
pub fn render_menu(catalog: &MenuCatalog) -> String {
    let mut out = String::new();
    for item in catalog.iter() {
        out.push_str(&item.name);
        out.push('\n');
        out.push_str(&item.description);
        out.push('\n');
        out.push_str(&item.price.to_decimal_string());
        out.push('\n');
    }
    out
}

/// Builds a catalog of at most `capacity` entries from menu file text.
pub fn parse_menu(text: &str, capacity: usize) -> LoadedMenu {
    let mut catalog = MenuCatalog::with_capacity(capacity);
    let mut overflow = 0;
    let mut truncated_at = None;
    let mut lines = text.lines();
    let mut record = 0;

    while let Some(name) = lines.next() {
        record += 1;

        let Some(description) = lines.next() else {
            if !name.is_empty() {
                truncated_at = Some(record);
            }
            break;
        };

        let price = lines
            .next()
            .and_then(|line| line.parse::<Money>().ok())
            .filter(|price| validate_price(*price).is_ok());
        let Some(price) = price else {
            truncated_at = Some(record);
            break;
        };

        match catalog.add(MenuItem::new(name, description, price)) {
            Ok(()) => {}
            Err(CoreError::MenuFull { .. }) => overflow += 1,
            Err(e) => {
                warn!(record, error = %e, "Unexpected error while loading menu");
                truncated_at = Some(record);
                break;
            }
        }
    }

    if let Some(record) = truncated_at {
        debug!(record, "Menu file ended with a malformed record");
    }

    LoadedMenu {
        catalog,
        overflow,
        truncated_at,
    }
}

/// Writes the catalog to `path`, replacing any existing file.
pub fn save_menu(catalog: &MenuCatalog, path: impl AsRef<Path>) -> StoreResult<()> {
    let path = path.as_ref();
    fs::write(path, render_menu(catalog))
        .map_err(|e| StoreError::write_failed(path.display().to_string(), &e))?;

    info!(path = %path.display(), items = catalog.len(), "Menu saved");
    Ok(())
}

/// Reads `path` into a new catalog of at most `capacity` entries.
pub fn load_menu(path: impl AsRef<Path>, capacity: usize) -> StoreResult<LoadedMenu> {
    let path = path.as_ref();
    let text = fs::read_to_string(path)
        .map_err(|e| StoreError::read_failed(path.display().to_string(), &e))?;

    let loaded = parse_menu(&text, capacity);
    info!(
        path = %path.display(),
        items = loaded.catalog.len(),
        overflow = loaded.overflow,
        "Menu loaded"
    );
    Ok(loaded)
}
