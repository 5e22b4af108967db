//! Permission guard for protected routes.

use sea_orm::DatabaseConnection;
use tower_sessions::Session;

use crate::server::{
    error::{auth::AuthError, AppError},
    middleware::session::AuthSession,
    model::user::UserProfile,
    service::user::UserService,
};

pub use crate::server::model::permission::Permission;

/// Checks that the session belongs to a user holding the required permissions.
pub struct AuthGuard<'a> {
    db: &'a DatabaseConnection,
    session: &'a Session,
}

impl<'a> AuthGuard<'a> {
    pub fn new(db: &'a DatabaseConnection, session: &'a Session) -> Self {
        Self { db, session }
    }

    /// Resolves the session user and checks every required permission.
    ///
    /// Holding `admin` satisfies any permission. An empty slice only requires a logged-in
    /// user.
    ///
    /// # Arguments
    /// - `permissions` - Permissions the user must all hold
    ///
    /// # Returns
    /// - `Ok(UserProfile)` - The session user and their permissions
    /// - `Err(AuthError::UserNotInSession)` - Nobody is logged in (401)
    /// - `Err(AuthError::UserNotInDatabase)` - Session user no longer exists (401)
    /// - `Err(AuthError::AccessDenied)` - A required permission is missing (403)
    pub async fn require(&self, permissions: &[Permission]) -> Result<UserProfile, AppError> {
        let Some(user_id) = AuthSession::new(self.session).get_user_id().await? else {
            return Err(AuthError::UserNotInSession.into());
        };

        let Some(profile) = UserService::new(self.db).get_by_id(user_id).await? else {
            return Err(AuthError::UserNotInDatabase(user_id).into());
        };

        if let Some(missing) = permissions
            .iter()
            .find(|permission| !profile.permissions.grants(**permission))
        {
            return Err(AuthError::AccessDenied(
                user_id,
                format!("User lacks the '{}' permission", missing.as_str()),
            )
            .into());
        }

        Ok(profile)
    }
}
