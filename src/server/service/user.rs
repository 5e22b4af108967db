//! User management and permission assignment.

use dioxus_logger::tracing;
use sea_orm::DatabaseConnection;

use crate::server::{
    data::{user::UserRepository, user_permission::UserPermissionRepository},
    error::{internal::InternalError, AppError},
    model::{
        log::LogLevel,
        paging::{Page, PageRequest},
        permission::{Permission, PermissionSet},
        user::{CreateUserParams, User, UserProfile},
    },
    service::log::LogService,
    util::password,
};

pub struct UserService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    /// Creates a new UserService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `UserService` - New service instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a user with an Argon2 password hash and the requested permissions.
    ///
    /// # Returns
    /// - `Ok(UserProfile)` - The created user and their permissions
    /// - `Err(AppError::BadRequest)` - Empty username or password, or username taken
    /// - `Err(AppError)` - Database error
    pub async fn create(&self, params: CreateUserParams) -> Result<UserProfile, AppError> {
        let username = params.username.trim().to_string();
        if username.is_empty() {
            return Err(AppError::BadRequest("Username must not be empty".to_string()));
        }
        if params.password.is_empty() {
            return Err(AppError::BadRequest("Password must not be empty".to_string()));
        }

        let user_repo = UserRepository::new(self.db);
        if user_repo.find_by_username(&username).await?.is_some() {
            return Err(AppError::BadRequest(format!(
                "Username '{}' is already taken",
                username
            )));
        }

        let display_name = match params.display_name.trim() {
            "" => username.clone(),
            name => name.to_string(),
        };

        let hash =
            password::hash_password(&params.password).map_err(InternalError::PasswordHash)?;
        let user = user_repo.create(username, display_name, hash).await?;

        UserPermissionRepository::new(self.db)
            .replace(user.id, &params.permissions)
            .await?;

        tracing::info!("Created user {} ({})", user.username, user.id);

        Ok(UserProfile {
            user,
            permissions: PermissionSet::new(params.permissions),
        })
    }

    /// Gets a user and their permissions.
    ///
    /// # Returns
    /// - `Ok(Some(UserProfile))` - User found
    /// - `Ok(None)` - No user with that id
    /// - `Err(AppError)` - Database error or unknown stored permission
    pub async fn get_by_id(&self, id: i32) -> Result<Option<UserProfile>, AppError> {
        let Some(user) = UserRepository::new(self.db).find_by_id(id).await? else {
            return Ok(None);
        };

        let permissions = self.permissions_of(id).await?;

        Ok(Some(UserProfile { user, permissions }))
    }

    /// Gets one page of users with their permissions.
    ///
    /// Permissions for the whole page are loaded with a single query.
    pub async fn get_paged(&self, request: &PageRequest) -> Result<Page<UserProfile>, AppError> {
        let page = UserRepository::new(self.db).get_paged(request).await?;

        let ids: Vec<i32> = page.data.iter().map(|user| user.id).collect();
        let mut grants = UserPermissionRepository::new(self.db)
            .get_for_users(&ids)
            .await?;

        let data = page
            .data
            .into_iter()
            .map(|user| {
                let stored = grants.remove(&user.id).unwrap_or_default();
                let permissions = stored
                    .into_iter()
                    .map(Permission::from_stored)
                    .collect::<Result<Vec<_>, _>>()?;

                Ok(UserProfile {
                    user,
                    permissions: PermissionSet::new(permissions),
                })
            })
            .collect::<Result<Vec<_>, AppError>>()?;

        Ok(Page {
            data,
            info: page.info,
        })
    }

    /// Deletes a user, their permissions and their posts.
    ///
    /// # Returns
    /// - `Ok(true)` - User deleted
    /// - `Ok(false)` - No user with that id
    pub async fn delete(&self, id: i32) -> Result<bool, AppError> {
        let deleted = UserRepository::new(self.db).delete(id).await?;

        if deleted {
            LogService::new(self.db)
                .write(LogLevel::Info, "user", &format!("Deleted user {}", id))
                .await?;
        }

        Ok(deleted)
    }

    /// Gets the permissions a user holds.
    ///
    /// # Returns
    /// - `Ok(PermissionSet)` - Held permissions (empty for unknown users)
    /// - `Err(AppError::InternalErr)` - A stored permission string is unknown
    pub async fn permissions_of(&self, user_id: i32) -> Result<PermissionSet, AppError> {
        let stored = UserPermissionRepository::new(self.db)
            .get_for_user(user_id)
            .await?;

        let permissions = stored
            .into_iter()
            .map(Permission::from_stored)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(PermissionSet::new(permissions))
    }

    /// Replaces the permissions of a user.
    ///
    /// # Returns
    /// - `Ok(Some(PermissionSet))` - The new permission set
    /// - `Ok(None)` - No user with that id
    /// - `Err(AppError)` - Database error
    pub async fn set_permissions(
        &self,
        user_id: i32,
        permissions: Vec<Permission>,
    ) -> Result<Option<PermissionSet>, AppError> {
        if UserRepository::new(self.db)
            .find_by_id(user_id)
            .await?
            .is_none()
        {
            return Ok(None);
        }

        UserPermissionRepository::new(self.db)
            .replace(user_id, &permissions)
            .await?;

        let set = PermissionSet::new(permissions);
        LogService::new(self.db)
            .write(
                LogLevel::Info,
                "user",
                &format!(
                    "Set permissions of user {} to [{}]",
                    user_id,
                    set.to_strings().join(", ")
                ),
            )
            .await?;

        Ok(Some(set))
    }

    /// Ensures an administrator exists.
    ///
    /// When nobody holds `admin`, the configured user is created (or reused if the username
    /// already exists) and granted `admin`. Does nothing when an administrator exists.
    ///
    /// # Arguments
    /// - `username` - Login name of the bootstrap administrator
    /// - `password` - Password used when the user has to be created
    ///
    /// # Returns
    /// - `Ok(Some(User))` - The user that was granted `admin`
    /// - `Ok(None)` - An administrator already existed
    /// - `Err(AppError)` - Database error or invalid credentials
    pub async fn bootstrap_admin(
        &self,
        username: &str,
        password: &str,
    ) -> Result<Option<User>, AppError> {
        let permission_repo = UserPermissionRepository::new(self.db);
        if permission_repo.any_with(Permission::Admin).await? {
            return Ok(None);
        }

        let user = match UserRepository::new(self.db)
            .find_by_username(username)
            .await?
        {
            Some(user) => user,
            None => {
                self.create(CreateUserParams {
                    username: username.to_string(),
                    display_name: username.to_string(),
                    password: password.to_string(),
                    permissions: Vec::new(),
                })
                .await?
                .user
            }
        };

        permission_repo.grant(user.id, Permission::Admin).await?;
        tracing::info!("Granted admin to bootstrap user {}", user.username);

        Ok(Some(user))
    }
}
