use super::*;

/// Tests fetching the authenticated user's own profile.
///
/// Expected: Ok with the profile
#[tokio::test]
async fn returns_profile() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::user::UserFactory::new(db).name("Alice").build().await?;

    let user = UserService::new(db)
        .get_me(&created.id)
        .await
        .expect("get_me should succeed");

    assert_eq!(user.id, created.id);
    assert_eq!(user.name, "Alice");

    Ok(())
}

/// Tests fetching a profile for an account that was deleted.
///
/// Expected: Err(NotFound)
#[tokio::test]
async fn reports_not_found_for_deleted_account() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::user::UserFactory::new(db).deleted().build().await?;

    let result = UserService::new(db).get_me(&created.id).await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}
