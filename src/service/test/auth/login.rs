use super::*;

const SECRET: &str = "test-jwt-secret";

/// Tests logging in with correct credentials.
///
/// Verifies the issued token decodes back to the user's id.
///
/// Expected: Ok((token, user)) with a valid token
#[tokio::test]
async fn issues_token_for_valid_credentials() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::user::UserFactory::new(db)
        .email("alice@example.com")
        .password("a-strong-password")
        .build()
        .await?;

    let (token, user) = AuthService::new(db)
        .login("alice@example.com", "a-strong-password", SECRET, 24)
        .await
        .expect("login should succeed");

    assert_eq!(user.id, created.id);

    let claims = jwt::decode_token(SECRET, &token).expect("token should decode");
    assert_eq!(claims.sub, created.id);

    Ok(())
}

/// Tests logging in with a wrong password.
///
/// Expected: Err(AuthErr(InvalidCredentials))
#[tokio::test]
async fn rejects_wrong_password() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::UserFactory::new(db)
        .email("alice@example.com")
        .password("a-strong-password")
        .build()
        .await?;

    let result = AuthService::new(db)
        .login("alice@example.com", "wrong-password", SECRET, 24)
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::InvalidCredentials(_)))
    ));

    Ok(())
}

/// Tests logging in with an email that matches no account.
///
/// Expected: Err(AuthErr(InvalidCredentials)), same as a wrong password so
/// the response does not reveal which part failed
#[tokio::test]
async fn rejects_unknown_email() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = AuthService::new(db)
        .login("nobody@example.com", "whatever", SECRET, 24)
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::InvalidCredentials(_)))
    ));

    Ok(())
}

/// Tests logging in before the registration is confirmed.
///
/// Expected: Err(AuthErr(AccountNotConfirmed))
#[tokio::test]
async fn rejects_unconfirmed_account() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::UserFactory::new(db)
        .email("pending@example.com")
        .password("a-strong-password")
        .is_registered(false)
        .confirmation_token("confirm-abc")
        .build()
        .await?;

    let result = AuthService::new(db)
        .login("pending@example.com", "a-strong-password", SECRET, 24)
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::AccountNotConfirmed(_)))
    ));

    Ok(())
}

/// Tests the full register/confirm/login flow end to end.
///
/// Expected: login fails before confirmation and succeeds after
#[tokio::test]
async fn register_confirm_login_flow() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = AuthService::new(db);
    let user = service
        .register(RegisterParam {
            name: "Flow".to_string(),
            email: "flow@example.com".to_string(),
            phone: "+15550002".to_string(),
            password: "a-strong-password".to_string(),
            account_type: "patient".to_string(),
        })
        .await
        .expect("register should succeed");

    assert!(matches!(
        service
            .login("flow@example.com", "a-strong-password", SECRET, 24)
            .await,
        Err(AppError::AuthErr(AuthError::AccountNotConfirmed(_)))
    ));

    // Fish the token out of the row; in production it arrives out of band.
    use sea_orm::EntityTrait;
    let token = entity::prelude::User::find_by_id(&user.id)
        .one(db)
        .await
        .map_err(TestError::from)?
        .and_then(|e| e.confirmation_token)
        .expect("confirmation token should be pending");

    service
        .confirm_registration(Some(token))
        .await
        .expect("confirmation should succeed");

    let (_, logged_in) = service
        .login("flow@example.com", "a-strong-password", SECRET, 24)
        .await
        .expect("login should succeed after confirmation");
    assert_eq!(logged_in.id, user.id);

    Ok(())
}
