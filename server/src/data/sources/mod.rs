//
// Copyright (c) 2025 Nathan Fiedler
//

//! Sources for the menu items and the browser viewport.

use crate::domain::entities::MenuItem;
pub use crate::domain::sources::{MenuDataSource, Viewport};
use anyhow::Error;

mod browser;

pub use browser::BrowserViewport;

/// Items offered by the café, in the order they appear on the menu.
static MENU_ITEMS: [(u32, &str, &str, &str); 6] = [
    (1, "Espresso", "$3.50", "☕"),
    (2, "Cappuccino", "$4.50", "☕"),
    (3, "Avocado Toast", "$8.99", "🥑"),
    (4, "Blueberry Muffin", "$3.99", "🧁"),
    (5, "Caesar Salad", "$9.50", "🥗"),
    (6, "Chocolate Cake", "$5.99", "🍰"),
];

///
/// Menu data source backed by the fixed, built-in list of items.
///
#[derive(Clone, Debug, Default)]
pub struct MenuDataSourceImpl {}

impl MenuDataSourceImpl {
    pub fn new() -> Self {
        Self {}
    }
}

impl MenuDataSource for MenuDataSourceImpl {
    fn get_items(&self) -> Result<Vec<MenuItem>, Error> {
        let items = MENU_ITEMS
            .iter()
            .map(|(id, name, price, glyph)| MenuItem::new(*id, name, price, glyph))
            .collect();
        Ok(items)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_items() {
        let source = MenuDataSourceImpl::new();
        let items = source.get_items().unwrap();
        assert_eq!(items.len(), 6);
        assert_eq!(items[0], MenuItem::new(1, "Espresso", "$3.50", "☕"));
        assert_eq!(items[2].glyph, "🥑");
        assert_eq!(items[5], MenuItem::new(6, "Chocolate Cake", "$5.99", "🍰"));
        // stable across calls
        assert_eq!(source.get_items().unwrap(), items);
    }
}
