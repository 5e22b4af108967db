//! Topic domain models and parameters.

use chrono::{DateTime, Utc};

use crate::model::topic::{CreateTopicDto, TopicDto, UpdateTopicDto};

/// Top-level category a post can be filed under.
#[derive(Debug, Clone, PartialEq)]
pub struct Topic {
    pub id: i32,
    pub name: String,
    pub description: String,
    pub created_at: DateTime<Utc>,
}

impl Topic {
    pub fn into_dto(self) -> TopicDto {
        TopicDto {
            id: self.id,
            name: self.name,
            description: self.description,
            created_at: self.created_at,
        }
    }

    pub fn from_entity(entity: entity::topic::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            description: entity.description,
            created_at: entity.created_at,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateTopicParams {
    pub name: String,
    pub description: String,
}

impl CreateTopicParams {
    pub fn from_dto(dto: CreateTopicDto) -> Self {
        Self {
            name: dto.name,
            description: dto.description,
        }
    }
}

#[derive(Debug, Clone)]
pub struct UpdateTopicParams {
    pub id: i32,
    pub name: String,
    pub description: String,
}

impl UpdateTopicParams {
    pub fn from_dto(id: i32, dto: UpdateTopicDto) -> Self {
        Self {
            id,
            name: dto.name,
            description: dto.description,
        }
    }
}
