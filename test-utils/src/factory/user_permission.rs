//! Permission grant factory.

use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Grants a permission string to a user.
///
/// The permission is stored verbatim, so tests can also insert values the
/// application does not recognise.
///
/// # Arguments
/// - `db` - Database connection
/// - `user_id` - ID of the user receiving the permission
/// - `permission` - Stored permission string, e.g. `"post:write"`
///
/// # Returns
/// - `Ok(entity::user_permission::Model)` - Created grant
/// - `Err(DbErr)` - Database error during insert
pub async fn grant_permission(
    db: &DatabaseConnection,
    user_id: i32,
    permission: impl Into<String>,
) -> Result<entity::user_permission::Model, DbErr> {
    entity::user_permission::ActiveModel {
        user_id: ActiveValue::Set(user_id),
        permission: ActiveValue::Set(permission.into()),
        ..Default::default()
    }
    .insert(db)
    .await
}
