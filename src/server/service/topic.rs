//! Topic business logic.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::topic::TopicRepository,
    error::AppError,
    model::{
        log::LogLevel,
        paging::{Page, PageRequest},
        topic::{CreateTopicParams, Topic, UpdateTopicParams},
    },
    service::log::LogService,
};

pub struct TopicService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TopicService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a topic with a unique, non-empty name.
    ///
    /// # Returns
    /// - `Ok(Topic)` - The created topic
    /// - `Err(AppError::BadRequest)` - Empty or duplicate name
    pub async fn create(&self, mut params: CreateTopicParams) -> Result<Topic, AppError> {
        params.name = self.validate_name(&params.name, None).await?;

        Ok(TopicRepository::new(self.db).create(params).await?)
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<Topic>, AppError> {
        Ok(TopicRepository::new(self.db).find_by_id(id).await?)
    }

    /// Updates a topic, keeping names unique.
    ///
    /// # Returns
    /// - `Ok(Some(Topic))` - The updated topic
    /// - `Ok(None)` - No topic with that id
    /// - `Err(AppError::BadRequest)` - Empty name or name used by another topic
    pub async fn update(&self, mut params: UpdateTopicParams) -> Result<Option<Topic>, AppError> {
        params.name = self.validate_name(&params.name, Some(params.id)).await?;

        Ok(TopicRepository::new(self.db).update(params).await?)
    }

    /// Deletes a topic and records the deletion in the application log.
    ///
    /// # Returns
    /// - `Ok(true)` - Topic deleted
    /// - `Ok(false)` - No topic with that id
    pub async fn delete(&self, id: i32) -> Result<bool, AppError> {
        let deleted = TopicRepository::new(self.db).delete(id).await?;

        if deleted {
            LogService::new(self.db)
                .write(LogLevel::Info, "topic", &format!("Deleted topic {}", id))
                .await?;
        }

        Ok(deleted)
    }

    pub async fn get_paged(&self, request: &PageRequest) -> Result<Page<Topic>, AppError> {
        Ok(TopicRepository::new(self.db).get_paged(request).await?)
    }

    /// Trims a name and checks it is non-empty and not used by another topic.
    async fn validate_name(&self, name: &str, own_id: Option<i32>) -> Result<String, AppError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(AppError::BadRequest(
                "Topic name must not be empty".to_string(),
            ));
        }

        if let Some(existing) = TopicRepository::new(self.db).find_by_name(name).await? {
            if Some(existing.id) != own_id {
                return Err(AppError::BadRequest(format!(
                    "Topic '{}' already exists",
                    name
                )));
            }
        }

        Ok(name.to_string())
    }
}
