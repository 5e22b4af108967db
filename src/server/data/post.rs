//! Post data repository for database operations.
//!
//! Every read path returns posts with their topic and series resolved. The related rows are
//! batch-loaded with one query per relation, never per post, and paged reads load them inside
//! the page transaction.

use std::sync::LazyLock;

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DatabaseConnection,
    DatabaseTransaction, DbErr, EntityTrait, LoaderTrait, QueryFilter, Select,
};

use crate::server::{
    data::paging::{get_paged_results, Collection, EntitySource, FieldKind, Projection},
    error::paging::PagingError,
    model::{
        paging::{NormalizedFilter, Page, PageRequest},
        post::{CreatePostParams, Post, UpdatePostParams},
    },
};

/// Filter and sort schema of the post listing.
pub static POSTS: LazyLock<Collection<entity::post::Entity>> = LazyLock::new(|| {
    use entity::post::Column;

    Collection::new("posts", "id", Column::Id)
        .field("title", Column::Title, FieldKind::Text)
        .field("slug", Column::Slug, FieldKind::Text)
        .field("published", Column::Published, FieldKind::Boolean)
        .field("topicId", Column::TopicId, FieldKind::Integer)
        .field("seriesId", Column::SeriesId, FieldKind::Integer)
        .field("authorId", Column::AuthorId, FieldKind::Integer)
        .field("createdAt", Column::CreatedAt, FieldKind::Timestamp)
});

/// Loads topic and series for a batch of posts.
///
/// Issues exactly two queries regardless of the number of posts.
async fn with_refs<C: ConnectionTrait>(
    db: &C,
    posts: Vec<entity::post::Model>,
) -> Result<Vec<Post>, DbErr> {
    let topics = posts.load_one(entity::prelude::Topic, db).await?;
    let series = posts.load_one(entity::prelude::Series, db).await?;

    Ok(posts
        .into_iter()
        .zip(topics)
        .zip(series)
        .map(|((post, topic), series)| Post::from_entity(post, topic, series))
        .collect())
}

/// Projects page rows into posts with their topic and series.
///
/// Adds exactly two queries to the page round-trip, one per relation, whatever the page size.
#[derive(Debug, Clone, Copy, Default)]
pub struct PostWithRefs;

impl Projection<entity::post::Entity> for PostWithRefs {
    type Output = Post;

    async fn project(
        &self,
        select: Select<entity::post::Entity>,
        txn: &DatabaseTransaction,
    ) -> Result<Vec<Post>, DbErr> {
        let posts = select.all(txn).await?;

        with_refs(txn, posts).await
    }
}

/// Repository providing database operations for posts.
pub struct PostRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PostRepository<'a> {
    /// Creates a new PostRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `PostRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a new post and returns it with its references resolved.
    ///
    /// Referenced topic, series and author must exist; the foreign keys reject anything else.
    ///
    /// # Arguments
    /// - `params` - Author and content of the post
    ///
    /// # Returns
    /// - `Ok(Post)` - The created post
    /// - `Err(DbErr)` - Database error during insert
    pub async fn create(&self, params: CreatePostParams) -> Result<Post, DbErr> {
        let now = Utc::now();
        let content = params.content;

        let entity = entity::post::ActiveModel {
            title: ActiveValue::Set(content.title),
            slug: ActiveValue::Set(content.slug),
            body: ActiveValue::Set(content.body),
            published: ActiveValue::Set(content.published),
            topic_id: ActiveValue::Set(content.topic_id),
            series_id: ActiveValue::Set(content.series_id),
            author_id: ActiveValue::Set(params.author_id),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        self.resolve(entity).await
    }

    /// Finds a post by id.
    ///
    /// # Returns
    /// - `Ok(Some(Post))` - Post with topic and series
    /// - `Ok(None)` - No post with that id
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_id(&self, id: i32) -> Result<Option<Post>, DbErr> {
        let Some(entity) = entity::prelude::Post::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        Ok(Some(self.resolve(entity).await?))
    }

    /// Finds the id of the post using `slug`, if any.
    pub async fn find_id_by_slug(&self, slug: &str) -> Result<Option<i32>, DbErr> {
        let entity = entity::prelude::Post::find()
            .filter(entity::post::Column::Slug.eq(slug))
            .one(self.db)
            .await?;

        Ok(entity.map(|post| post.id))
    }

    /// Replaces the content of a post and bumps its update timestamp.
    ///
    /// # Returns
    /// - `Ok(Some(Post))` - The updated post
    /// - `Ok(None)` - No post with that id
    /// - `Err(DbErr)` - Database error during update
    pub async fn update(&self, params: UpdatePostParams) -> Result<Option<Post>, DbErr> {
        let Some(post) = entity::prelude::Post::find_by_id(params.id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let content = params.content;
        let mut active_model: entity::post::ActiveModel = post.into();
        active_model.title = ActiveValue::Set(content.title);
        active_model.slug = ActiveValue::Set(content.slug);
        active_model.body = ActiveValue::Set(content.body);
        active_model.published = ActiveValue::Set(content.published);
        active_model.topic_id = ActiveValue::Set(content.topic_id);
        active_model.series_id = ActiveValue::Set(content.series_id);
        active_model.updated_at = ActiveValue::Set(Utc::now());

        let entity = active_model.update(self.db).await?;

        Ok(Some(self.resolve(entity).await?))
    }

    /// Deletes a post.
    ///
    /// # Returns
    /// - `Ok(true)` - Post deleted
    /// - `Ok(false)` - No post with that id
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Post::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Gets one page of posts with topic and series names.
    ///
    /// # Arguments
    /// - `request` - Page, size and descriptor
    /// - `explicit_filters` - Filters replacing the descriptor's filter keys, used by the
    ///   by-topic and by-series listings
    ///
    /// # Returns
    /// - `Ok(Page<Post>)` - Posts of the requested page
    /// - `Err(PagingError)` - Rejected filter or sort field, or database error
    pub async fn get_paged(
        &self,
        request: &PageRequest,
        explicit_filters: Option<&NormalizedFilter>,
    ) -> Result<Page<Post>, PagingError> {
        let source = EntitySource::new(self.db, &*POSTS, PostWithRefs);

        get_paged_results(&source, request, explicit_filters).await
    }

    async fn resolve(&self, entity: entity::post::Model) -> Result<Post, DbErr> {
        let id = entity.id;

        with_refs(self.db, vec![entity])
            .await?
            .pop()
            .ok_or_else(|| DbErr::RecordNotFound(format!("Post with id {} not found", id)))
    }
}
