//
// Copyright (c) 2025 Nathan Fiedler
//
use crate::domain::entities::MenuItem;
use anyhow::Error;
#[cfg(test)]
use mockall::automock;

/// Data source for the menu items offered by the café.
#[cfg_attr(test, automock)]
pub trait MenuDataSource: Send + Sync {
    /// Retrieve all menu items in display order.
    fn get_items(&self) -> Result<Vec<MenuItem>, Error>;
}

/// The scrollable area in which the page is displayed.
#[cfg_attr(test, automock)]
pub trait Viewport: Send + Sync {
    /// Request a smooth scroll that brings the top edge of the element with
    /// the given identifier into view. Returns `false` if no such element
    /// has been rendered, in which case nothing happens.
    fn scroll_into_view(&self, element_id: &str) -> bool;
}
