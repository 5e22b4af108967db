//! Name-addressed collections.
//!
//! Typed repositories use their `Collection` directly. Routes that address a collection by
//! name go through the `CollectionRegistry`, built once at startup, which maps each name to a
//! type-erased collection producing JSON rows.

use std::{collections::BTreeMap, future::Future, pin::Pin};

use sea_orm::{DatabaseConnection, EntityTrait};

use crate::server::{
    data::paging::{
        collection::Collection,
        executor::get_paged_results,
        source::{EntitySource, Json},
    },
    error::paging::PagingError,
    model::paging::{Page, PageRequest},
};

type BrowseFuture<'a> =
    Pin<Box<dyn Future<Output = Result<Page<serde_json::Value>, PagingError>> + Send + 'a>>;

/// Collection that can be paged without knowing its entity type.
pub trait BrowsableCollection: Send + Sync {
    fn name(&self) -> &'static str;

    fn browse<'a>(&'a self, db: &'a DatabaseConnection, request: &'a PageRequest)
        -> BrowseFuture<'a>;
}

impl<E> BrowsableCollection for Collection<E>
where
    E: EntityTrait,
    E::Model: Send + Sync,
{
    fn name(&self) -> &'static str {
        Collection::name(self)
    }

    fn browse<'a>(
        &'a self,
        db: &'a DatabaseConnection,
        request: &'a PageRequest,
    ) -> BrowseFuture<'a> {
        Box::pin(async move {
            let source = EntitySource::new(db, self, Json);
            get_paged_results(&source, request, None).await
        })
    }
}

/// Startup-built map from collection name to collection.
#[derive(Clone, Default)]
pub struct CollectionRegistry {
    collections: BTreeMap<&'static str, &'static dyn BrowsableCollection>,
}

impl CollectionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a collection under its own name, replacing any previous entry.
    pub fn register(mut self, collection: &'static dyn BrowsableCollection) -> Self {
        self.collections.insert(collection.name(), collection);
        self
    }

    /// Names of all registered collections in sorted order.
    pub fn names(&self) -> Vec<&'static str> {
        self.collections.keys().copied().collect()
    }

    /// Pages through the collection registered under `name`.
    ///
    /// # Returns
    /// - `Ok(Page<serde_json::Value>)` - One JSON object per row
    /// - `Err(PagingError::UnknownCollection)` - Nothing registered under `name`
    /// - `Err(PagingError)` - Any other failure from the collection's query
    pub async fn browse(
        &self,
        db: &DatabaseConnection,
        name: &str,
        request: &PageRequest,
    ) -> Result<Page<serde_json::Value>, PagingError> {
        let collection = self
            .collections
            .get(name)
            .ok_or_else(|| PagingError::UnknownCollection(name.to_string()))?;

        collection.browse(db, request).await
    }
}
