use super::*;

/// Tests deleting an existing prescription.
///
/// Expected: Ok(1) and the row is gone
#[tokio::test]
async fn deletes_prescription() -> Result<(), TestError> {
    let test = TestBuilder::new().with_clinic_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, created) = factory::helpers::create_prescription_with_users(db).await?;

    let repo = PrescriptionRepository::new(db);
    let rows = repo.delete(&created.id).await?;

    assert_eq!(rows, 1);
    assert!(repo.find_by_id(&created.id).await?.is_none());

    Ok(())
}

/// Tests deleting a non-existent prescription.
///
/// Expected: Ok(0), no error
#[tokio::test]
async fn returns_zero_for_nonexistent_prescription() -> Result<(), TestError> {
    let test = TestBuilder::new().with_clinic_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let rows = PrescriptionRepository::new(db).delete("no-such-id").await?;

    assert_eq!(rows, 0);

    Ok(())
}
