use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

use crate::server::{data::user_permission::UserPermissionRepository, model::permission::Permission};

/// Tests replacing the permission set of a user.
///
/// Expected: only the new permissions remain, duplicates collapsed
#[tokio::test]
async fn replaces_permissions() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_user_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    factory::grant_permission(db, user.id, "log:read").await?;

    let repo = UserPermissionRepository::new(db);
    repo.replace(
        user.id,
        &[
            Permission::PostWrite,
            Permission::TopicWrite,
            Permission::PostWrite,
        ],
    )
    .await?;

    assert_eq!(
        repo.get_for_user(user.id).await?,
        vec!["post:write".to_string(), "topic:write".to_string()]
    );

    repo.replace(user.id, &[]).await?;
    assert!(repo.get_for_user(user.id).await?.is_empty());

    Ok(())
}

/// Tests that granting twice stores the permission once.
///
/// Expected: one stored grant
#[tokio::test]
async fn grant_is_idempotent() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_user_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let repo = UserPermissionRepository::new(db);

    repo.grant(user.id, Permission::Admin).await?;
    repo.grant(user.id, Permission::Admin).await?;

    assert_eq!(repo.get_for_user(user.id).await?, vec!["admin".to_string()]);

    Ok(())
}

/// Tests detecting whether anyone holds a permission.
///
/// Expected: false before the grant, true after
#[tokio::test]
async fn detects_permission_holders() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_user_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let repo = UserPermissionRepository::new(db);

    assert!(!repo.any_with(Permission::Admin).await?);
    repo.grant(user.id, Permission::Admin).await?;
    assert!(repo.any_with(Permission::Admin).await?);

    Ok(())
}
