//! Series business logic.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::series::SeriesRepository,
    error::AppError,
    model::{
        log::LogLevel,
        paging::{Page, PageRequest},
        series::{CreateSeriesParams, Series, UpdateSeriesParams},
    },
    service::log::LogService,
};

pub struct SeriesService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SeriesService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a series.
    ///
    /// # Returns
    /// - `Ok(Series)` - The created series
    /// - `Err(AppError::BadRequest)` - Empty name
    pub async fn create(&self, mut params: CreateSeriesParams) -> Result<Series, AppError> {
        params.name = validate_name(&params.name)?;

        Ok(SeriesRepository::new(self.db).create(params).await?)
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<Series>, AppError> {
        Ok(SeriesRepository::new(self.db).find_by_id(id).await?)
    }

    pub async fn update(&self, mut params: UpdateSeriesParams) -> Result<Option<Series>, AppError> {
        params.name = validate_name(&params.name)?;

        Ok(SeriesRepository::new(self.db).update(params).await?)
    }

    /// Deletes a series and records the deletion in the application log.
    pub async fn delete(&self, id: i32) -> Result<bool, AppError> {
        let deleted = SeriesRepository::new(self.db).delete(id).await?;

        if deleted {
            LogService::new(self.db)
                .write(LogLevel::Info, "series", &format!("Deleted series {}", id))
                .await?;
        }

        Ok(deleted)
    }

    pub async fn get_paged(&self, request: &PageRequest) -> Result<Page<Series>, AppError> {
        Ok(SeriesRepository::new(self.db).get_paged(request).await?)
    }
}

fn validate_name(name: &str) -> Result<String, AppError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(AppError::BadRequest(
            "Series name must not be empty".to_string(),
        ));
    }

    Ok(name.to_string())
}
