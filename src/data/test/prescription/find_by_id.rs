use super::*;

/// Tests finding an existing prescription by id.
///
/// Expected: Ok(Some(Prescription)) with matching data
#[tokio::test]
async fn finds_existing_prescription() -> Result<(), TestError> {
    let test = TestBuilder::new().with_clinic_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (patient, docter, created) = factory::helpers::create_prescription_with_users(db).await?;

    let found = PrescriptionRepository::new(db).find_by_id(&created.id).await?;

    assert!(found.is_some());
    let prescription = found.unwrap();
    assert_eq!(prescription.id, created.id);
    assert_eq!(prescription.patient_id, patient.id);
    assert_eq!(prescription.docter_id, docter.id);

    Ok(())
}

/// Tests querying for a non-existent prescription.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_nonexistent_prescription() -> Result<(), TestError> {
    let test = TestBuilder::new().with_clinic_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let found = PrescriptionRepository::new(db).find_by_id("no-such-id").await?;

    assert!(found.is_none());

    Ok(())
}
