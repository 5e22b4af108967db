//! Password login.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::user::UserRepository,
    error::{auth::AuthError, internal::InternalError, AppError},
    model::user::UserProfile,
    service::user::UserService,
    util::password,
};

pub struct AuthService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AuthService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Verifies a username and password.
    ///
    /// An unknown username and a wrong password fail identically.
    ///
    /// # Returns
    /// - `Ok(UserProfile)` - Credentials match; the user and their permissions
    /// - `Err(AppError::AuthErr(InvalidCredentials))` - Unknown user or wrong password
    /// - `Err(AppError)` - Database error or malformed stored hash
    pub async fn login(&self, username: &str, password: &str) -> Result<UserProfile, AppError> {
        let Some((user, credential)) = UserRepository::new(self.db)
            .find_credential_by_username(username.trim())
            .await?
        else {
            return Err(AuthError::InvalidCredentials.into());
        };

        let matches = password::verify_password(password, &credential.hash)
            .map_err(InternalError::PasswordHash)?;
        if !matches {
            return Err(AuthError::InvalidCredentials.into());
        }

        let permissions = UserService::new(self.db).permissions_of(user.id).await?;

        Ok(UserProfile { user, permissions })
    }
}
