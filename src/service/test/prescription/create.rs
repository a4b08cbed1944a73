use super::*;

/// Tests creating a prescription for an existing patient and doctor.
///
/// Expected: Ok with the prescription created
#[tokio::test]
async fn creates_prescription_for_existing_users() -> Result<(), TestError> {
    let test = TestBuilder::new().with_clinic_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let patient = factory::user::create_user(db).await?;
    let docter = factory::user::UserFactory::new(db)
        .account_type("docter")
        .build()
        .await?;

    let prescription = PrescriptionService::new(db)
        .create(CreatePrescriptionParam {
            patient_id: Some(patient.id.clone()),
            docter_id: Some(docter.id.clone()),
            content: Some("Amoxicillin 500mg".to_string()),
        })
        .await
        .expect("create should succeed");

    assert_eq!(prescription.patient_id, patient.id);
    assert_eq!(prescription.docter_id, docter.id);

    Ok(())
}

/// Tests that missing required fields are rejected.
///
/// Empty strings count as missing, matching the wire contract.
///
/// Expected: Err(UnprocessableEntity) naming the required fields
#[tokio::test]
async fn rejects_missing_fields() -> Result<(), TestError> {
    let test = TestBuilder::new().with_clinic_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let result = PrescriptionService::new(db)
        .create(CreatePrescriptionParam {
            patient_id: Some("some-patient".to_string()),
            docter_id: None,
            content: Some(String::new()),
        })
        .await;

    match result {
        Err(AppError::UnprocessableEntity(msg)) => {
            assert_eq!(msg, "Missing required fields: patientId, docterId, content");
        }
        other => panic!("expected UnprocessableEntity, got {:?}", other.map(|_| ())),
    }

    Ok(())
}

/// Tests that referencing a non-existent patient is rejected.
///
/// Expected: Err(UnprocessableEntity)
#[tokio::test]
async fn rejects_nonexistent_patient() -> Result<(), TestError> {
    let test = TestBuilder::new().with_clinic_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let docter = factory::user::create_user(db).await?;

    let result = PrescriptionService::new(db)
        .create(CreatePrescriptionParam {
            patient_id: Some("no-such-patient".to_string()),
            docter_id: Some(docter.id),
            content: Some("Amoxicillin 500mg".to_string()),
        })
        .await;

    match result {
        Err(AppError::UnprocessableEntity(msg)) => {
            assert_eq!(msg, "Patient or docter not found");
        }
        other => panic!("expected UnprocessableEntity, got {:?}", other.map(|_| ())),
    }

    Ok(())
}

/// Tests that a soft-deleted doctor no longer passes the existence check.
///
/// Expected: Err(UnprocessableEntity)
#[tokio::test]
async fn rejects_soft_deleted_docter() -> Result<(), TestError> {
    let test = TestBuilder::new().with_clinic_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let patient = factory::user::create_user(db).await?;
    let docter = factory::user::UserFactory::new(db).deleted().build().await?;

    let result = PrescriptionService::new(db)
        .create(CreatePrescriptionParam {
            patient_id: Some(patient.id),
            docter_id: Some(docter.id),
            content: Some("Amoxicillin 500mg".to_string()),
        })
        .await;

    assert!(matches!(result, Err(AppError::UnprocessableEntity(_))));

    Ok(())
}
