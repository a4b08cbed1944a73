use super::*;

/// Tests soft-deleting a user.
///
/// Verifies that the account drops out of every read path while the row is
/// kept in the table.
///
/// Expected: Ok(()) and the user becomes invisible
#[tokio::test]
async fn hides_user_from_reads() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::user::create_user(db).await?;

    let repo = UserRepository::new(db);
    repo.soft_delete(&created.id).await?;

    assert!(repo.find_by_id(&created.id).await?.is_none());
    assert!(repo.find_auth_by_email(&created.email).await?.is_none());
    assert!(!repo.exists(&created.id).await?);

    // The row itself survives.
    use sea_orm::EntityTrait;
    let raw = entity::prelude::User::find_by_id(&created.id).one(db).await?;
    assert!(raw.is_some());
    assert!(raw.unwrap().deleted_at.is_some());

    Ok(())
}
