use super::*;

/// Tests that admin satisfies every permission.
///
/// Expected: Ok(UserProfile) for any combination of required permissions
#[tokio::test]
async fn admin_satisfies_all_permissions() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_user_tables()
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let user = factory::create_user(db).await?;
    factory::grant_permission(db, user.id, "admin").await?;
    AuthSession::new(session).set_user_id(user.id).await?;

    let guard = AuthGuard::new(db, session);
    let profile = guard.require(&Permission::ALL).await?;
    assert_eq!(profile.user.id, user.id);

    guard
        .require(&[Permission::LogRead, Permission::ChatbotSend])
        .await?;

    Ok(())
}

/// Tests that a user without admin is denied the admin permission.
///
/// Expected: Err(AuthError::AccessDenied)
#[tokio::test]
async fn denies_admin_to_regular_user() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_user_tables()
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let user = factory::create_user(db).await?;
    factory::grant_permission(db, user.id, "user:write").await?;
    AuthSession::new(session).set_user_id(user.id).await?;

    let result = AuthGuard::new(db, session)
        .require(&[Permission::Admin])
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::AccessDenied(id, _))) if id == user.id
    ));

    Ok(())
}
