//
// Copyright (c) 2025 Nathan Fiedler
//
use crate::domain::entities::Catalog;
use anyhow::Error;
#[cfg(test)]
use mockall::automock;

///
/// Repository for the café menu.
///
#[cfg_attr(test, automock)]
pub trait MenuRepository: Send + Sync {
    /// Retrieve the validated catalog of menu items.
    fn get_catalog(&self) -> Result<Catalog, Error>;
}
