use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

use crate::server::{
    data::user::UserRepository,
    error::paging::PagingError,
    model::paging::{PageRequest, QueryDescriptor},
};

/// Tests creating a user and reading back the stored credential.
///
/// Expected: credential carries the given hash
#[tokio::test]
async fn creates_user_with_credential() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_user_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let user = repo
        .create(
            "alice".to_string(),
            "Alice".to_string(),
            "$argon2id$stub".to_string(),
        )
        .await?;

    let (found, credential) = repo.find_credential_by_username("alice").await?.unwrap();
    assert_eq!(found, user);
    assert_eq!(credential.user_id, user.id);
    assert_eq!(credential.hash, "$argon2id$stub");

    assert!(repo.find_credential_by_username("bob").await?.is_none());

    Ok(())
}

/// Tests that usernames are unique.
///
/// Expected: Err(DbErr) on the second insert
#[tokio::test]
async fn rejects_duplicate_username() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_user_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::UserFactory::new(db)
        .username("alice")
        .build()
        .await?;

    let result = UserRepository::new(db)
        .create(
            "alice".to_string(),
            "Other".to_string(),
            "x".to_string(),
        )
        .await;

    assert!(result.is_err());

    Ok(())
}

/// Tests the paged user listing sorted by username.
///
/// Expected: users in ascending username order
#[tokio::test]
async fn lists_users_sorted() -> Result<(), PagingError> {
    let test = TestBuilder::new()
        .with_user_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    for username in ["carol", "alice", "bob"] {
        factory::user::UserFactory::new(db)
            .username(username)
            .build()
            .await?;
    }

    let descriptor = QueryDescriptor::new()
        .with("orderby", "username")
        .with("direction", "asc");
    let page = UserRepository::new(db)
        .get_paged(&PageRequest::from_descriptor(descriptor)?)
        .await?;

    let names: Vec<_> = page.data.iter().map(|u| u.username.as_str()).collect();
    assert_eq!(names, vec!["alice", "bob", "carol"]);

    Ok(())
}

/// Tests deleting a user.
///
/// Expected: user gone afterwards
#[tokio::test]
async fn deletes_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_user_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let repo = UserRepository::new(db);

    assert!(repo.delete(user.id).await?);
    assert!(repo.find_by_id(user.id).await?.is_none());

    Ok(())
}
