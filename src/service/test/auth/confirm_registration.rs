use super::*;

/// Tests confirming a freshly registered account.
///
/// Expected: Ok and the account becomes registered
#[tokio::test]
async fn confirms_pending_account() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::user::UserFactory::new(db)
        .is_registered(false)
        .confirmation_token("confirm-abc")
        .build()
        .await?;

    AuthService::new(db)
        .confirm_registration(Some("confirm-abc".to_string()))
        .await
        .expect("confirmation should succeed");

    use sea_orm::EntityTrait;
    let entity = entity::prelude::User::find_by_id(&created.id)
        .one(db)
        .await
        .map_err(TestError::from)?
        .expect("user row should exist");
    assert!(entity.is_registered);
    assert!(entity.confirmation_token.is_none());

    Ok(())
}

/// Tests confirming without a token.
///
/// Expected: Err(UnprocessableEntity)
#[tokio::test]
async fn rejects_missing_token() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = AuthService::new(db).confirm_registration(None).await;

    match result {
        Err(AppError::UnprocessableEntity(msg)) => {
            assert_eq!(msg, "Confirmation token is required");
        }
        other => panic!("expected UnprocessableEntity, got {:?}", other),
    }

    Ok(())
}

/// Tests confirming with a token that matches no account.
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
        .confirm_registration(Some("no-such-token".to_string()))
        .await;

    match result {
        Err(AppError::UnprocessableEntity(msg)) => {
            assert_eq!(msg, "Invalid confirmation token");
        }
        other => panic!("expected UnprocessableEntity, got {:?}", other),
    }

    Ok(())
}
