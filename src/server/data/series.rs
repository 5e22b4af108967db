//! Series data repository for database operations.

use std::sync::LazyLock;

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr, EntityTrait};

use crate::server::{
    data::paging::{get_paged_results, Collection, EntitySource, FieldKind, Models},
    error::paging::PagingError,
    model::{
        paging::{Page, PageRequest},
        series::{CreateSeriesParams, Series, UpdateSeriesParams},
    },
};

/// Filter and sort schema of the series listing.
pub static SERIES: LazyLock<Collection<entity::series::Entity>> = LazyLock::new(|| {
    Collection::new("series", "id", entity::series::Column::Id).field(
        "name",
        entity::series::Column::Name,
        FieldKind::Text,
    )
});

/// Repository providing database operations for series.
pub struct SeriesRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SeriesRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a new series.
    ///
    /// # Returns
    /// - `Ok(Series)` - The created series
    /// - `Err(DbErr)` - Database error during insert
    pub async fn create(&self, params: CreateSeriesParams) -> Result<Series, DbErr> {
        let entity = entity::series::ActiveModel {
            name: ActiveValue::Set(params.name),
            description: ActiveValue::Set(params.description),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Series::from_entity(entity))
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Series>, DbErr> {
        let entity = entity::prelude::Series::find_by_id(id).one(self.db).await?;

        Ok(entity.map(Series::from_entity))
    }

    /// Updates name and description of a series.
    ///
    /// # Returns
    /// - `Ok(Some(Series))` - The updated series
    /// - `Ok(None)` - No series with that id
    /// - `Err(DbErr)` - Database error during update
    pub async fn update(&self, params: UpdateSeriesParams) -> Result<Option<Series>, DbErr> {
        let Some(series) = entity::prelude::Series::find_by_id(params.id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active_model: entity::series::ActiveModel = series.into();
        active_model.name = ActiveValue::Set(params.name);
        active_model.description = ActiveValue::Set(params.description);

        let entity = active_model.update(self.db).await?;

        Ok(Some(Series::from_entity(entity)))
    }

    /// Deletes a series, detaching its posts.
    ///
    /// # Returns
    /// - `Ok(true)` - Series deleted
    /// - `Ok(false)` - No series with that id
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Series::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    pub async fn get_paged(&self, request: &PageRequest) -> Result<Page<Series>, PagingError> {
        let source = EntitySource::new(self.db, &*SERIES, Models);
        let page = get_paged_results(&source, request, None).await?;

        Ok(page.map(Series::from_entity))
    }
}
