//! Post domain models and parameters.
//!
//! Posts are returned with the names of their topic and series already resolved, so a
//! listing can be rendered without further lookups.

use chrono::{DateTime, Utc};

use crate::model::post::{CreatePostDto, PostDto, PostRefDto, UpdatePostDto};

/// Id and display name of a record a post belongs to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostRef {
    pub id: i32,
    pub name: String,
}

impl PostRef {
    pub fn into_dto(self) -> PostRefDto {
        PostRefDto {
            id: self.id,
            name: self.name,
        }
    }
}

/// Blog post with its topic and series references.
#[derive(Debug, Clone, PartialEq)]
pub struct Post {
    pub id: i32,
    pub title: String,
    pub slug: String,
    pub body: String,
    pub published: bool,
    pub topic: Option<PostRef>,
    pub series: Option<PostRef>,
    pub author_id: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Post {
    pub fn into_dto(self) -> PostDto {
        PostDto {
            id: self.id,
            title: self.title,
            slug: self.slug,
            body: self.body,
            published: self.published,
            topic: self.topic.map(PostRef::into_dto),
            series: self.series.map(PostRef::into_dto),
            author_id: self.author_id,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }

    /// Converts a post entity and its loaded relations into a domain model.
    ///
    /// # Arguments
    /// - `entity` - Post row
    /// - `topic` - Topic row referenced by `topic_id`, if any
    /// - `series` - Series row referenced by `series_id`, if any
    ///
    /// # Returns
    /// - `Post` - Domain model with resolved topic and series names
    pub fn from_entity(
        entity: entity::post::Model,
        topic: Option<entity::topic::Model>,
        series: Option<entity::series::Model>,
    ) -> Self {
        Self {
            id: entity.id,
            title: entity.title,
            slug: entity.slug,
            body: entity.body,
            published: entity.published,
            topic: topic.map(|t| PostRef {
                id: t.id,
                name: t.name,
            }),
            series: series.map(|s| PostRef {
                id: s.id,
                name: s.name,
            }),
            author_id: entity.author_id,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }
}

/// Fields shared by post creation and update.
#[derive(Debug, Clone)]
pub struct PostContent {
    pub title: String,
    pub slug: String,
    pub body: String,
    pub published: bool,
    pub topic_id: Option<i32>,
    pub series_id: Option<i32>,
}

#[derive(Debug, Clone)]
pub struct CreatePostParams {
    pub author_id: i32,
    pub content: PostContent,
}

impl CreatePostParams {
    pub fn from_dto(author_id: i32, dto: CreatePostDto) -> Self {
        Self {
            author_id,
            content: PostContent {
                title: dto.title,
                slug: dto.slug,
                body: dto.body,
                published: dto.published,
                topic_id: dto.topic_id,
                series_id: dto.series_id,
            },
        }
    }
}

#[derive(Debug, Clone)]
pub struct UpdatePostParams {
    pub id: i32,
    pub content: PostContent,
}

impl UpdatePostParams {
    pub fn from_dto(id: i32, dto: UpdatePostDto) -> Self {
        Self {
            id,
            content: PostContent {
                title: dto.title,
                slug: dto.slug,
                body: dto.body,
                published: dto.published,
                topic_id: dto.topic_id,
                series_id: dto.series_id,
            },
        }
    }
}
