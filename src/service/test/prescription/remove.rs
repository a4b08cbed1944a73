use super::*;

/// Tests deleting a prescription.
///
/// Expected: Ok, then the prescription is gone
#[tokio::test]
async fn deletes_prescription() -> Result<(), TestError> {
    let test = TestBuilder::new().with_clinic_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, created) = factory::helpers::create_prescription_with_users(db).await?;

    let service = PrescriptionService::new(db);
    service.remove(&created.id).await.expect("remove should succeed");

    assert!(matches!(
        service.get_one(&created.id).await,
        Err(AppError::NotFound(_))
    ));

    Ok(())
}

/// Tests deleting the same prescription twice.
///
/// The second delete must report 404, not succeed silently.
///
/// Expected: Ok, then Err(NotFound)
#[tokio::test]
async fn second_delete_reports_not_found() -> Result<(), TestError> {
    let test = TestBuilder::new().with_clinic_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, created) = factory::helpers::create_prescription_with_users(db).await?;

    let service = PrescriptionService::new(db);
    service.remove(&created.id).await.expect("first remove should succeed");

    let result = service.remove(&created.id).await;

    match result {
        Err(AppError::NotFound(msg)) => assert_eq!(msg, "Prescription not found"),
        other => panic!("expected NotFound, got {:?}", other),
    }

    Ok(())
}
