//! Series domain models and parameters.
//!
//! A series groups posts meant to be read in order, independent of their topic.

use chrono::{DateTime, Utc};

use crate::model::series::{CreateSeriesDto, SeriesDto, UpdateSeriesDto};

#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    pub id: i32,
    pub name: String,
    pub description: String,
    pub created_at: DateTime<Utc>,
}

impl Series {
    pub fn into_dto(self) -> SeriesDto {
        SeriesDto {
            id: self.id,
            name: self.name,
            description: self.description,
            created_at: self.created_at,
        }
    }

    pub fn from_entity(entity: entity::series::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            description: entity.description,
            created_at: entity.created_at,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateSeriesParams {
    pub name: String,
    pub description: String,
}

impl CreateSeriesParams {
    pub fn from_dto(dto: CreateSeriesDto) -> Self {
        Self {
            name: dto.name,
            description: dto.description,
        }
    }
}

#[derive(Debug, Clone)]
pub struct UpdateSeriesParams {
    pub id: i32,
    pub name: String,
    pub description: String,
}

impl UpdateSeriesParams {
    pub fn from_dto(id: i32, dto: UpdateSeriesDto) -> Self {
        Self {
            id,
            name: dto.name,
            description: dto.description,
        }
    }
}
