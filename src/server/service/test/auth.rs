use test_utils::{builder::TestBuilder, factory};

use crate::server::{
    error::{auth::AuthError, AppError},
    service::auth::AuthService,
    util::password,
};

/// Tests logging in with correct and incorrect credentials.
///
/// Expected: profile for the right password, InvalidCredentials otherwise
#[tokio::test]
async fn verifies_credentials() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_user_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::UserFactory::new(db)
        .username("alice")
        .password_hash(password::hash_password("hunter2").unwrap())
        .build()
        .await?;
    factory::grant_permission(db, user.id, "post:write").await?;

    let service = AuthService::new(db);

    let profile = service.login("alice", "hunter2").await?;
    assert_eq!(profile.user.id, user.id);
    assert_eq!(profile.permissions.to_strings(), vec!["post:write"]);

    for (username, pass) in [("alice", "wrong"), ("bob", "hunter2")] {
        let result = service.login(username, pass).await;
        assert!(matches!(
            result,
            Err(AppError::AuthErr(AuthError::InvalidCredentials))
        ));
    }

    Ok(())
}
