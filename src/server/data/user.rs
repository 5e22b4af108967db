//! User data repository for database operations.
//!
//! This module provides the `UserRepository` for managing user records. Password hashes
//! never leave this module except through `find_credential_by_username`, which only the
//! authentication service uses.

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
        user::{StoredCredential, User},
    },
};

/// Filter and sort schema of the user listing.
pub static USERS: LazyLock<Collection<entity::user::Entity>> = LazyLock::new(|| {
    use entity::user::Column;

    Collection::new("users", "id", Column::Id)
        .field("username", Column::Username, FieldKind::Text)
        .field("displayName", Column::DisplayName, FieldKind::Text)
});

/// Repository providing database operations for user management.
///
/// This struct holds a reference to the database connection and provides methods
/// for creating, reading, deleting, and paging user records.
pub struct UserRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserRepository<'a> {
    /// Creates a new UserRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `UserRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a new user with an already hashed password.
    ///
    /// # Arguments
    /// - `username` - Unique login name
    /// - `display_name` - Name shown next to posts
    /// - `credential_hash` - Password hash as a PHC string
    ///
    /// # Returns
    /// - `Ok(User)` - The created user
    /// - `Err(DbErr)` - Database error, including a duplicate username
    pub async fn create(
        &self,
        username: String,
        display_name: String,
        credential_hash: String,
    ) -> Result<User, DbErr> {
        let entity = entity::user::ActiveModel {
            username: ActiveValue::Set(username),
            display_name: ActiveValue::Set(display_name),
            password_hash: ActiveValue::Set(credential_hash),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(User::from_entity(entity))
    }

    /// Finds a user by id.
    ///
    /// # Returns
    /// - `Ok(Some(User))` - User found
    /// - `Ok(None)` - No user with that id
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_id(&self, id: i32) -> Result<Option<User>, DbErr> {
        let entity = entity::prelude::User::find_by_id(id).one(self.db).await?;

        Ok(entity.map(User::from_entity))
    }

    pub async fn find_by_username(&self, username: &str) -> Result<Option<User>, DbErr> {
        Ok(self
            .find_entity_by_username(username)
            .await?
            .map(User::from_entity))
    }

    /// Finds a user together with their stored password hash.
    ///
    /// # Returns
    /// - `Ok(Some((User, StoredCredential)))` - User found
    /// - `Ok(None)` - No user with that username
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_credential_by_username(
        &self,
        username: &str,
    ) -> Result<Option<(User, StoredCredential)>, DbErr> {
        Ok(self
            .find_entity_by_username(username)
            .await?
            .map(|entity| {
                let credential = StoredCredential::from_entity(&entity);
                (User::from_entity(entity), credential)
            }))
    }

    /// Deletes a user along with their permissions and posts.
    ///
    /// # Returns
    /// - `Ok(true)` - User deleted
    /// - `Ok(false)` - No user with that id
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::User::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Gets one page of users.
    ///
    /// # Returns
    /// - `Ok(Page<User>)` - Users of the requested page
    /// - `Err(PagingError)` - Rejected filter or sort field, or database error
    pub async fn get_paged(&self, request: &PageRequest) -> Result<Page<User>, PagingError> {
        let source = EntitySource::new(self.db, &*USERS, Models);
        let page = get_paged_results(&source, request, None).await?;

        Ok(page.map(User::from_entity))
    }

    async fn find_entity_by_username(
        &self,
        username: &str,
    ) -> Result<Option<entity::user::Model>, DbErr> {
        entity::prelude::User::find()
            .filter(entity::user::Column::Username.eq(username))
            .one(self.db)
            .await
    }
}
