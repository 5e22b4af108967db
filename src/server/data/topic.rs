//! Topic data repository for database operations.

use std::sync::LazyLock;

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter,
};

use crate::server::{
    data::paging::{get_paged_results, Collection, EntitySource, FieldKind, Models},
    error::paging::PagingError,
    model::{
        paging::{Page, PageRequest},
        topic::{CreateTopicParams, Topic, UpdateTopicParams},
    },
};

/// Filter and sort schema of the topic listing.
pub static TOPICS: LazyLock<Collection<entity::topic::Entity>> = LazyLock::new(|| {
    Collection::new("topics", "id", entity::topic::Column::Id).field(
        "name",
        entity::topic::Column::Name,
        FieldKind::Text,
    )
});

/// Repository providing database operations for topics.
pub struct TopicRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TopicRepository<'a> {
    /// Creates a new TopicRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `TopicRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a new topic.
    ///
    /// # Returns
    /// - `Ok(Topic)` - The created topic
    /// - `Err(DbErr)` - Database error, including a duplicate name
    pub async fn create(&self, params: CreateTopicParams) -> Result<Topic, DbErr> {
        let entity = entity::topic::ActiveModel {
            name: ActiveValue::Set(params.name),
            description: ActiveValue::Set(params.description),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Topic::from_entity(entity))
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Topic>, DbErr> {
        let entity = entity::prelude::Topic::find_by_id(id).one(self.db).await?;

        Ok(entity.map(Topic::from_entity))
    }

    /// Finds a topic by its exact name.
    ///
    /// Used to reject duplicate names before insert or rename.
    pub async fn find_by_name(&self, name: &str) -> Result<Option<Topic>, DbErr> {
        let entity = entity::prelude::Topic::find()
            .filter(entity::topic::Column::Name.eq(name))
            .one(self.db)
            .await?;

        Ok(entity.map(Topic::from_entity))
    }

    /// Updates name and description of a topic.
    ///
    /// # Returns
    /// - `Ok(Some(Topic))` - The updated topic
    /// - `Ok(None)` - No topic with that id
    /// - `Err(DbErr)` - Database error during update
    pub async fn update(&self, params: UpdateTopicParams) -> Result<Option<Topic>, DbErr> {
        let Some(topic) = entity::prelude::Topic::find_by_id(params.id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active_model: entity::topic::ActiveModel = topic.into();
        active_model.name = ActiveValue::Set(params.name);
        active_model.description = ActiveValue::Set(params.description);

        let entity = active_model.update(self.db).await?;

        Ok(Some(Topic::from_entity(entity)))
    }

    /// Deletes a topic. Posts filed under it keep existing without a topic.
    ///
    /// # Returns
    /// - `Ok(true)` - Topic deleted
    /// - `Ok(false)` - No topic with that id
    /// - `Err(DbErr)` - Database error during delete
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Topic::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Gets one page of topics.
    ///
    /// # Arguments
    /// - `request` - Page, size and descriptor with `name` filters and sort keys
    ///
    /// # Returns
    /// - `Ok(Page<Topic>)` - Topics of the requested page
    /// - `Err(PagingError)` - Rejected filter or sort field, or database error
    pub async fn get_paged(&self, request: &PageRequest) -> Result<Page<Topic>, PagingError> {
        let source = EntitySource::new(self.db, &*TOPICS, Models);
        let page = get_paged_results(&source, request, None).await?;

        Ok(page.map(Topic::from_entity))
    }
}
