use super::*;

/// Tests a partial profile update through the service.
///
/// Expected: Ok with the new name and the original phone
#[tokio::test]
async fn partial_update_leaves_other_fields() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::user::UserFactory::new(db).name("Before").build().await?;

    let updated = UserService::new(db)
        .update_me(
            &created.id,
            UpdateUserParam {
                name: Some("After".to_string()),
                phone: None,
                avatar: None,
            },
        )
        .await
        .expect("update_me should succeed");

    assert_eq!(updated.name, "After");
    assert_eq!(updated.phone, created.phone);

    Ok(())
}

/// Tests that empty strings in the request body count as absent.
///
/// A DTO carrying `""` for `name` must not wipe the stored name:
/// `from_dto` drops empty strings before the service sees the param, so
/// only the genuinely provided field is written.
///
/// Expected: Ok with the name unchanged and the phone updated
#[tokio::test]
async fn empty_strings_are_ignored() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::user::UserFactory::new(db).name("Keep Me").build().await?;

    let param = UpdateUserParam::from_dto(UpdateUserDto {
        name: Some(String::new()),
        phone: Some("+19998887".to_string()),
        avatar: Some(String::new()),
    });
    assert!(param.name.is_none());
    assert!(param.avatar.is_none());

    let updated = UserService::new(db)
        .update_me(&created.id, param)
        .await
        .expect("update_me should succeed");

    assert_eq!(updated.name, "Keep Me");
    assert_eq!(updated.phone, "+19998887");
    assert!(updated.avatar.is_none());

    Ok(())
}

/// Tests updating a profile for an unknown account.
///
/// Expected: Err(NotFound)
#[tokio::test]
async fn reports_not_found_for_unknown_account() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = UserService::new(db)
        .update_me("no-such-id", UpdateUserParam::default())
        .await;

    match result {
        Err(AppError::NotFound(msg)) => assert_eq!(msg, "User not found"),
        other => panic!("expected NotFound, got {:?}", other.map(|_| ())),
    }

    Ok(())
}
