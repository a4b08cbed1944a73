use super::*;

/// Tests redeeming a reset token and logging in with the new password.
///
/// Expected: Ok, old password stops working, new password works
#[tokio::test]
async fn changes_password() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::UserFactory::new(db)
        .email("alice@example.com")
        .password("old-password")
        .reset_token("reset-xyz")
        .build()
        .await?;

    let service = AuthService::new(db);
    service
        .reset_password(
            Some("reset-xyz".to_string()),
            Some("new-password".to_string()),
        )
        .await
        .expect("reset should succeed");

    assert!(matches!(
        service
            .login("alice@example.com", "old-password", "test-jwt-secret", 24)
            .await,
        Err(AppError::AuthErr(AuthError::InvalidCredentials(_)))
    ));

    service
        .login("alice@example.com", "new-password", "test-jwt-secret", 24)
        .await
        .expect("login with the new password should succeed");

    Ok(())
}

/// Tests resetting without a new password.
///
/// Expected: Err(UnprocessableEntity)
#[tokio::test]
async fn rejects_missing_password() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = AuthService::new(db)
        .reset_password(Some("reset-xyz".to_string()), None)
        .await;

    match result {
        Err(AppError::UnprocessableEntity(msg)) => assert_eq!(msg, "Password is required"),
        other => panic!("expected UnprocessableEntity, got {:?}", other),
    }

    Ok(())
}

/// Tests resetting with a token that matches no account.
///
/// Expected: Err(UnprocessableEntity)
#[tokio::test]
async fn rejects_unknown_token() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = AuthService::new(db)
        .reset_password(
            Some("no-such-token".to_string()),
            Some("new-password".to_string()),
        )
        .await;

    match result {
        Err(AppError::UnprocessableEntity(msg)) => assert_eq!(msg, "Invalid reset token"),
        other => panic!("expected UnprocessableEntity, got {:?}", other),
    }

    Ok(())
}
