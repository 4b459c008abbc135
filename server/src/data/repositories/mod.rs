//
// Copyright (c) 2025 Nathan Fiedler
//
use crate::data::sources::MenuDataSource;
use crate::domain::entities::Catalog;
use crate::domain::repositories::MenuRepository;
use anyhow::{Context, Error};
use std::sync::Arc;

// Use an `Arc` to hold the data source to make cloning easy for the caller.
pub struct MenuRepositoryImpl {
    datasource: Arc<dyn MenuDataSource>,
}

impl MenuRepositoryImpl {
    pub fn new(datasource: Arc<dyn MenuDataSource>) -> Self {
        Self { datasource }
    }
}

impl MenuRepository for MenuRepositoryImpl {
    fn get_catalog(&self) -> Result<Catalog, Error> {
        let items = self.datasource.get_items()?;
        let catalog = Catalog::new(items).context("MenuRepositoryImpl::get_catalog")?;
        Ok(catalog)
    }
}
