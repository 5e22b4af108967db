//! User domain models and parameters.
//!
//! Provides domain models for application users with their permission sets, the stored
//! credential used by password login, and parameter types for user creation.

use chrono::{DateTime, Utc};

use crate::{
    model::user::{CreateUserDto, UserDto},
    server::{
        error::AppError,
        model::permission::{Permission, PermissionSet},
    },
};

/// Application user without credentials.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: i32,
    /// Unique login name.
    pub username: String,
    /// Name shown next to the user's posts.
    pub display_name: String,
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Converts the user domain model to a DTO for API responses.
    ///
    /// # Arguments
    /// - `permissions` - Permissions held by the user
    ///
    /// # Returns
    /// - `UserDto` - The converted user DTO
    pub fn into_dto(self, permissions: &PermissionSet) -> UserDto {
        UserDto {
            id: self.id,
            username: self.username,
            display_name: self.display_name,
            permissions: permissions.to_strings(),
            created_at: self.created_at,
        }
    }

    /// Converts an entity model to a user domain model at the repository boundary.
    ///
    /// The password hash is dropped.
    pub fn from_entity(entity: entity::user::Model) -> Self {
        Self {
            id: entity.id,
            username: entity.username,
            display_name: entity.display_name,
            created_at: entity.created_at,
        }
    }
}

/// Stored password hash of a user as a PHC string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredCredential {
    pub user_id: i32,
    pub hash: String,
}

impl StoredCredential {
    pub fn from_entity(entity: &entity::user::Model) -> Self {
        Self {
            user_id: entity.id,
            hash: entity.password_hash.clone(),
        }
    }
}

/// Parameters for creating a user with a plain-text password.
#[derive(Debug, Clone)]
pub struct CreateUserParams {
    pub username: String,
    pub display_name: String,
    /// Plain-text password, hashed by the service before it is stored.
    pub password: String,
    pub permissions: Vec<Permission>,
}

impl CreateUserParams {
    /// Converts a creation DTO, validating the requested permission strings.
    ///
    /// # Returns
    /// - `Ok(CreateUserParams)` - Converted parameters
    /// - `Err(AppError::BadRequest)` - A permission string is unknown
    pub fn from_dto(dto: CreateUserDto) -> Result<Self, AppError> {
        Ok(Self {
            username: dto.username,
            display_name: dto.display_name,
            password: dto.password,
            permissions: Permission::parse_all(&dto.permissions)?,
        })
    }
}

/// User together with the permissions they hold.
#[derive(Debug, Clone, PartialEq)]
pub struct UserProfile {
    pub user: User,
    pub permissions: PermissionSet,
}

impl UserProfile {
    pub fn into_dto(self) -> UserDto {
        self.user.into_dto(&self.permissions)
    }
}
