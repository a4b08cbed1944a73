use super::*;

/// Tests creating a new user account.
///
/// Verifies that the repository inserts the account with a generated uuid,
/// stores the profile fields, and starts the account unconfirmed with the
/// confirmation token pending.
///
/// Expected: Ok with unconfirmed user created
#[tokio::test]
async fn creates_unconfirmed_user() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let user = repo
        .create(NewUser {
            name: "Alice".to_string(),
            email: "alice@example.com".to_string(),
            phone: "+15550001".to_string(),
            password_hash: "$argon2id$fake-hash".to_string(),
            account_type: "patient".to_string(),
            confirmation_token: "confirm-123".to_string(),
        })
        .await?;

    assert!(!user.id.is_empty());
    assert_eq!(user.name, "Alice");
    assert_eq!(user.email, "alice@example.com");
    assert_eq!(user.account_type, "patient");
    assert!(!user.is_registered);

    Ok(())
}

/// Tests that the email unique constraint is enforced at the database level.
///
/// Expected: Err on the second insert with the same email
#[tokio::test]
async fn rejects_duplicate_email() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let param = NewUser {
        name: "Alice".to_string(),
        email: "taken@example.com".to_string(),
        phone: "+15550001".to_string(),
        password_hash: "$argon2id$fake-hash".to_string(),
        account_type: "patient".to_string(),
        confirmation_token: "confirm-123".to_string(),
    };

    repo.create(param.clone()).await?;
    let result = repo.create(param).await;

    assert!(result.is_err());

    Ok(())
}
