//! Permission grants of users.

use std::collections::HashMap;

use sea_orm::{
    ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait,
    QueryFilter, QueryOrder, QuerySelect, TransactionTrait,
};

use crate::server::model::permission::Permission;

/// Repository for the `user_permission` join table.
///
/// Stores permission strings verbatim; interpreting them is left to callers so an unknown
/// stored string surfaces as an internal error instead of being silently dropped.
pub struct UserPermissionRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserPermissionRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets the stored permission strings of a user in alphabetical order.
    ///
    /// # Returns
    /// - `Ok(Vec<String>)` - Stored permission strings (empty if none or unknown user)
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_for_user(&self, user_id: i32) -> Result<Vec<String>, DbErr> {
        entity::prelude::UserPermission::find()
            .select_only()
            .column(entity::user_permission::Column::Permission)
            .filter(entity::user_permission::Column::UserId.eq(user_id))
            .order_by_asc(entity::user_permission::Column::Permission)
            .into_tuple::<String>()
            .all(self.db)
            .await
    }

    /// Gets the stored permission strings of several users with one query.
    ///
    /// # Returns
    /// - `Ok(HashMap<i32, Vec<String>>)` - Permission strings keyed by user id; users without
    ///   grants are absent
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_for_users(
        &self,
        user_ids: &[i32],
    ) -> Result<HashMap<i32, Vec<String>>, DbErr> {
        if user_ids.is_empty() {
            return Ok(HashMap::new());
        }

        let rows = entity::prelude::UserPermission::find()
            .filter(entity::user_permission::Column::UserId.is_in(user_ids.iter().copied()))
            .order_by_asc(entity::user_permission::Column::Permission)
            .all(self.db)
            .await?;

        let mut grouped: HashMap<i32, Vec<String>> = HashMap::new();
        for row in rows {
            grouped.entry(row.user_id).or_default().push(row.permission);
        }

        Ok(grouped)
    }

    /// Grants a permission, doing nothing if the user already holds it.
    pub async fn grant(&self, user_id: i32, permission: Permission) -> Result<(), DbErr> {
        let held = entity::prelude::UserPermission::find()
            .filter(entity::user_permission::Column::UserId.eq(user_id))
            .filter(entity::user_permission::Column::Permission.eq(permission.as_str()))
            .count(self.db)
            .await?;

        if held > 0 {
            return Ok(());
        }

        entity::prelude::UserPermission::insert(entity::user_permission::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            permission: ActiveValue::Set(permission.as_str().to_string()),
            ..Default::default()
        })
        .exec(self.db)
        .await?;

        Ok(())
    }

    /// Replaces all permissions of a user in one transaction.
    ///
    /// # Arguments
    /// - `user_id` - User whose grants are replaced
    /// - `permissions` - New permission set; duplicates are collapsed
    ///
    /// # Returns
    /// - `Ok(())` - Grants replaced
    /// - `Err(DbErr)` - Database error; no grants were changed
    pub async fn replace(&self, user_id: i32, permissions: &[Permission]) -> Result<(), DbErr> {
        let txn = self.db.begin().await?;

        entity::prelude::UserPermission::delete_many()
            .filter(entity::user_permission::Column::UserId.eq(user_id))
            .exec(&txn)
            .await?;

        let mut unique = permissions.to_vec();
        unique.sort();
        unique.dedup();

        if !unique.is_empty() {
            entity::prelude::UserPermission::insert_many(unique.into_iter().map(|permission| {
                entity::user_permission::ActiveModel {
                    user_id: ActiveValue::Set(user_id),
                    permission: ActiveValue::Set(permission.as_str().to_string()),
                    ..Default::default()
                }
            }))
            .exec(&txn)
            .await?;
        }

        txn.commit().await
    }

    /// Checks whether any user holds `permission`.
    pub async fn any_with(&self, permission: Permission) -> Result<bool, DbErr> {
        let count = entity::prelude::UserPermission::find()
            .filter(entity::user_permission::Column::Permission.eq(permission.as_str()))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }
}
