//! Storage seam of the paging engine.
//!
//! The executor only needs one operation from storage: fetch a window of matching rows and
//! count all matching rows, observed from the same snapshot. `PageSource` is that seam;
//! `EntitySource` implements it for any SeaORM entity by resolving the query against a
//! `Collection` schema and running both statements inside a single transaction.

use std::future::Future;

use sea_orm::{
    DatabaseConnection, DatabaseTransaction, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, QuerySelect, Select, TransactionTrait,
};

use crate::server::{
    data::paging::collection::Collection,
    error::paging::PagingError,
    model::paging::{NormalizedFilter, SortClause},
};

/// Largest row position a window may reach. Windows ending beyond it are returned empty.
pub const MAX_WINDOW_END: u64 = i64::MAX as u64;

/// Fully resolved window of a paged query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageQuery {
    pub filter: NormalizedFilter,
    pub sort: SortClause,
    pub skip: u64,
    pub take: u64,
}

/// Storage collaborator of the paging engine.
pub trait PageSource {
    type Item;

    /// Field the parser sorts by, descending, when the request names none.
    fn fallback_sort(&self) -> &str;

    /// Fetches up to `take` matching rows after `skip` in sort order, together with the
    /// total number of matching rows.
    ///
    /// Both results must come from one atomic round-trip so the count agrees with the rows.
    fn fetch_page(
        &self,
        query: PageQuery,
    ) -> impl Future<Output = Result<(Vec<Self::Item>, u64), PagingError>> + Send;
}

/// Turns the selected rows of a page into output items.
///
/// Runs inside the page transaction, so eager loads of related records see the same
/// snapshot as the page and the count.
pub trait Projection<E: EntityTrait>: Sync {
    type Output: Send;

    fn project(
        &self,
        select: Select<E>,
        txn: &DatabaseTransaction,
    ) -> impl Future<Output = Result<Vec<Self::Output>, sea_orm::DbErr>> + Send;
}

/// Projects rows into the entity's own models.
#[derive(Debug, Clone, Copy, Default)]
pub struct Models;

impl<E> Projection<E> for Models
where
    E: EntityTrait,
    E::Model: Send + Sync,
{
    type Output = E::Model;

    async fn project(
        &self,
        select: Select<E>,
        txn: &DatabaseTransaction,
    ) -> Result<Vec<E::Model>, sea_orm::DbErr> {
        select.all(txn).await
    }
}

/// Projects rows into JSON objects keyed by column name.
#[derive(Debug, Clone, Copy, Default)]
pub struct Json;

impl<E> Projection<E> for Json
where
    E: EntityTrait,
    E::Model: Send + Sync,
{
    type Output = serde_json::Value;

    async fn project(
        &self,
        select: Select<E>,
        txn: &DatabaseTransaction,
    ) -> Result<Vec<serde_json::Value>, sea_orm::DbErr> {
        select.into_json().all(txn).await
    }
}

/// `PageSource` over a SeaORM entity described by a `Collection`.
pub struct EntitySource<'a, E: EntityTrait, P> {
    db: &'a DatabaseConnection,
    collection: &'a Collection<E>,
    projection: P,
}

impl<'a, E: EntityTrait, P> EntitySource<'a, E, P> {
    pub fn new(db: &'a DatabaseConnection, collection: &'a Collection<E>, projection: P) -> Self {
        Self {
            db,
            collection,
            projection,
        }
    }
}

impl<'a, E, P> PageSource for EntitySource<'a, E, P>
where
    E: EntityTrait,
    E::Model: Send + Sync,
    P: Projection<E>,
{
    type Item = P::Output;

    fn fallback_sort(&self) -> &str {
        self.collection.fallback_sort()
    }

    async fn fetch_page(&self, query: PageQuery) -> Result<(Vec<P::Output>, u64), PagingError> {
        let condition = self.collection.condition(&query.filter)?;
        let (column, order) = self.collection.order(&query.sort)?;

        let txn = self.db.begin().await?;

        // Offset and limit are bound as signed 64-bit values.
        let rows = if query.skip.saturating_add(query.take) > MAX_WINDOW_END {
            Vec::new()
        } else {
            self.projection
                .project(
                    E::find()
                        .filter(condition.clone())
                        .order_by(column, order)
                        .offset(query.skip)
                        .limit(query.take),
                    &txn,
                )
                .await?
        };
        let total = E::find().filter(condition).count(&txn).await?;

        txn.commit().await?;

        Ok((rows, total))
    }
}
