//! Post business logic.
//!
//! Validates post content against existing topics and series, and provides the topic and
//! series listings. Those listings hand the paging engine an explicit filter so the route
//! always shows exactly one topic's (or series') posts, whatever filter keys the caller sends.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::{post::PostRepository, series::SeriesRepository, topic::TopicRepository},
    error::AppError,
    model::{
        log::LogLevel,
        paging::{NormalizedFilter, Page, PageRequest},
        post::{CreatePostParams, Post, PostContent, UpdatePostParams},
    },
    service::log::LogService,
};

pub struct PostService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PostService<'a> {
    /// Creates a new PostService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `PostService` - New service instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a post.
    ///
    /// # Arguments
    /// - `params` - Author and content of the new post
    ///
    /// # Returns
    /// - `Ok(Post)` - The created post with topic and series resolved
    /// - `Err(AppError::BadRequest)` - Empty title or slug, slug taken, or unknown
    ///   topic/series
    /// - `Err(AppError)` - Database error
    pub async fn create(&self, mut params: CreatePostParams) -> Result<Post, AppError> {
        params.content = self.validate(params.content, None).await?;

        Ok(PostRepository::new(self.db).create(params).await?)
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<Post>, AppError> {
        Ok(PostRepository::new(self.db).find_by_id(id).await?)
    }

    /// Replaces the content of a post.
    ///
    /// # Returns
    /// - `Ok(Some(Post))` - The updated post
    /// - `Ok(None)` - No post with that id
    /// - `Err(AppError::BadRequest)` - Invalid content, see `create`
    pub async fn update(&self, mut params: UpdatePostParams) -> Result<Option<Post>, AppError> {
        params.content = self.validate(params.content, Some(params.id)).await?;

        Ok(PostRepository::new(self.db).update(params).await?)
    }

    /// Deletes a post and records the deletion in the application log.
    ///
    /// # Returns
    /// - `Ok(true)` - Post deleted
    /// - `Ok(false)` - No post with that id
    pub async fn delete(&self, id: i32) -> Result<bool, AppError> {
        let deleted = PostRepository::new(self.db).delete(id).await?;

        if deleted {
            LogService::new(self.db)
                .write(LogLevel::Info, "post", &format!("Deleted post {}", id))
                .await?;
        }

        Ok(deleted)
    }

    /// Gets one page of posts filtered by the caller's descriptor.
    pub async fn get_paged(&self, request: &PageRequest) -> Result<Page<Post>, AppError> {
        Ok(PostRepository::new(self.db)
            .get_paged(request, None)
            .await?)
    }

    /// Gets one page of the posts filed under a topic.
    ///
    /// # Returns
    /// - `Ok(Page<Post>)` - Posts of the topic; sort keys of the descriptor still apply
    /// - `Err(AppError::NotFound)` - No topic with that id
    pub async fn get_paged_by_topic(
        &self,
        topic_id: i32,
        request: &PageRequest,
    ) -> Result<Page<Post>, AppError> {
        if TopicRepository::new(self.db)
            .find_by_id(topic_id)
            .await?
            .is_none()
        {
            return Err(AppError::NotFound("Topic not found".to_string()));
        }

        let filter = NormalizedFilter::new().exact("topicId", topic_id);

        Ok(PostRepository::new(self.db)
            .get_paged(request, Some(&filter))
            .await?)
    }

    /// Gets one page of the posts belonging to a series.
    ///
    /// # Returns
    /// - `Ok(Page<Post>)` - Posts of the series
    /// - `Err(AppError::NotFound)` - No series with that id
    pub async fn get_paged_by_series(
        &self,
        series_id: i32,
        request: &PageRequest,
    ) -> Result<Page<Post>, AppError> {
        if SeriesRepository::new(self.db)
            .find_by_id(series_id)
            .await?
            .is_none()
        {
            return Err(AppError::NotFound("Series not found".to_string()));
        }

        let filter = NormalizedFilter::new().exact("seriesId", series_id);

        Ok(PostRepository::new(self.db)
            .get_paged(request, Some(&filter))
            .await?)
    }

    /// Trims and checks post content.
    ///
    /// `own_id` is the id of the post being updated, which may keep its own slug.
    async fn validate(
        &self,
        mut content: PostContent,
        own_id: Option<i32>,
    ) -> Result<PostContent, AppError> {
        content.title = content.title.trim().to_string();
        content.slug = content.slug.trim().to_string();

        if content.title.is_empty() {
            return Err(AppError::BadRequest(
                "Post title must not be empty".to_string(),
            ));
        }
        if content.slug.is_empty() {
            return Err(AppError::BadRequest(
                "Post slug must not be empty".to_string(),
            ));
        }

        if let Some(existing) = PostRepository::new(self.db)
            .find_id_by_slug(&content.slug)
            .await?
        {
            if Some(existing) != own_id {
                return Err(AppError::BadRequest(format!(
                    "Slug '{}' is already used by another post",
                    content.slug
                )));
            }
        }

        if let Some(topic_id) = content.topic_id {
            if TopicRepository::new(self.db)
                .find_by_id(topic_id)
                .await?
                .is_none()
            {
                return Err(AppError::BadRequest(format!(
                    "Topic {} does not exist",
                    topic_id
                )));
            }
        }

        if let Some(series_id) = content.series_id {
            if SeriesRepository::new(self.db)
                .find_by_id(series_id)
                .await?
                .is_none()
            {
                return Err(AppError::BadRequest(format!(
                    "Series {} does not exist",
                    series_id
                )));
            }
        }

        Ok(content)
    }
}
