use super::*;

/// Tests deleting the authenticated user's own account.
///
/// Expected: Ok and the profile becomes unreachable
#[tokio::test]
async fn soft_deletes_account() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::user::create_user(db).await?;

    let service = UserService::new(db);
    service.delete_me(&created.id).await.expect("delete_me should succeed");

    assert!(matches!(
        service.get_me(&created.id).await,
        Err(AppError::NotFound(_))
    ));

    Ok(())
}

/// Tests deleting the same account twice.
///
/// Expected: Ok, then Err(NotFound)
#[tokio::test]
async fn second_delete_reports_not_found() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::user::create_user(db).await?;

    let service = UserService::new(db);
    service.delete_me(&created.id).await.expect("first delete should succeed");

    let result = service.delete_me(&created.id).await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}
