//! Post factory for creating test post entities.
//!
//! Posts always need an author; topic and series are optional and left unset
//! unless the test assigns them.

use crate::factory::helpers::next_id;
use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test posts with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::post::PostFactory;
///
/// let post = PostFactory::new(&db, author.id)
///     .title("Release notes")
///     .topic_id(topic.id)
///     .published(true)
///     .build()
///     .await?;
/// ```
pub struct PostFactory<'a> {
    db: &'a DatabaseConnection,
    author_id: i32,
    title: String,
    slug: String,
    body: String,
    published: bool,
    topic_id: Option<i32>,
    series_id: Option<i32>,
    created_at: DateTime<Utc>,
}

impl<'a> PostFactory<'a> {
    /// Creates a new PostFactory with default values.
    ///
    /// Defaults:
    /// - title: `"Post {id}"` where id is auto-incremented
    /// - slug: `"post-{id}"`
    /// - body: `"Body of post {id}"`
    /// - published: `false`
    /// - topic_id / series_id: `None`
    /// - created_at: now
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `author_id` - ID of an existing user
    ///
    /// # Returns
    /// - `PostFactory` - New factory instance with defaults
    pub fn new(db: &'a DatabaseConnection, author_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            author_id,
            title: format!("Post {}", id),
            slug: format!("post-{}", id),
            body: format!("Body of post {}", id),
            published: false,
            topic_id: None,
            series_id: None,
            created_at: Utc::now(),
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn slug(mut self, slug: impl Into<String>) -> Self {
        self.slug = slug.into();
        self
    }

    pub fn body(mut self, body: impl Into<String>) -> Self {
        self.body = body.into();
        self
    }

    pub fn published(mut self, published: bool) -> Self {
        self.published = published;
        self
    }

    pub fn topic_id(mut self, topic_id: i32) -> Self {
        self.topic_id = Some(topic_id);
        self
    }

    pub fn series_id(mut self, series_id: i32) -> Self {
        self.series_id = Some(series_id);
        self
    }

    /// Sets the creation timestamp, useful for ordering tests.
    ///
    /// # Arguments
    /// - `created_at` - Creation time, also used as the update time
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }

    /// Builds and inserts the post entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::post::Model)` - Created post entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::post::Model, DbErr> {
        entity::post::ActiveModel {
            title: ActiveValue::Set(self.title),
            slug: ActiveValue::Set(self.slug),
            body: ActiveValue::Set(self.body),
            published: ActiveValue::Set(self.published),
            topic_id: ActiveValue::Set(self.topic_id),
            series_id: ActiveValue::Set(self.series_id),
            author_id: ActiveValue::Set(self.author_id),
            created_at: ActiveValue::Set(self.created_at),
            updated_at: ActiveValue::Set(self.created_at),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a post with default values for the given author.
///
/// # Arguments
/// - `db` - Database connection
/// - `author_id` - ID of an existing user
///
/// # Returns
/// - `Ok(entity::post::Model)` - Created post entity
/// - `Err(DbErr)` - Database error during insert
pub async fn create_post(
    db: &DatabaseConnection,
    author_id: i32,
) -> Result<entity::post::Model, DbErr> {
    PostFactory::new(db, author_id).build().await
}
