//! Generic collection browsing for administrators.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::paging::CollectionRegistry,
    error::AppError,
    model::paging::{Page, PageRequest},
};

pub struct AdminService<'a> {
    db: &'a DatabaseConnection,
    registry: &'a CollectionRegistry,
}

impl<'a> AdminService<'a> {
    pub fn new(db: &'a DatabaseConnection, registry: &'a CollectionRegistry) -> Self {
        Self { db, registry }
    }

    /// Pages through a registered collection by name.
    ///
    /// # Returns
    /// - `Ok(Page<serde_json::Value>)` - One JSON object per row, keyed by column name
    /// - `Err(AppError::PagingErr(UnknownCollection))` - Name not registered (404)
    /// - `Err(AppError::PagingErr)` - Descriptor rejected by the collection schema (400)
    pub async fn browse(
        &self,
        name: &str,
        request: &PageRequest,
    ) -> Result<Page<serde_json::Value>, AppError> {
        Ok(self.registry.browse(self.db, name, request).await?)
    }

    /// Names of the collections available for browsing.
    pub fn collections(&self) -> Vec<&'static str> {
        self.registry.names()
    }
}
