use super::*;

/// Tests that a user holding the permission passes.
///
/// Expected: Ok(UserProfile) containing the permission
#[tokio::test]
async fn grants_held_permission() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_user_tables()
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let user = factory::create_user(db).await?;
    factory::grant_permission(db, user.id, "post:write").await?;
    AuthSession::new(session).set_user_id(user.id).await?;

    let profile = AuthGuard::new(db, session)
        .require(&[Permission::PostWrite])
        .await?;

    assert!(profile.permissions.contains(Permission::PostWrite));

    Ok(())
}

/// Tests that every required permission is checked.
///
/// Expected: Err(AuthError::AccessDenied) when only one of two permissions is held
#[tokio::test]
async fn requires_all_permissions() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_user_tables()
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let user = factory::create_user(db).await?;
    factory::grant_permission(db, user.id, "chatbot:write").await?;
    AuthSession::new(session).set_user_id(user.id).await?;

    let result = AuthGuard::new(db, session)
        .require(&[Permission::ChatbotWrite, Permission::ChatbotSend])
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::AccessDenied(_, _)))
    ));

    Ok(())
}
