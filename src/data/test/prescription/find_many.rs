use super::*;

/// Tests listing all prescriptions without filters.
///
/// Expected: Ok with every prescription returned
#[tokio::test]
async fn lists_all_without_filters() -> Result<(), TestError> {
    let test = TestBuilder::new().with_clinic_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::helpers::create_prescription_with_users(db).await?;
    factory::helpers::create_prescription_with_users(db).await?;

    let prescriptions = PrescriptionRepository::new(db)
        .find_many(&PrescriptionFilter::default())
        .await?;

    assert_eq!(prescriptions.len(), 2);

    Ok(())
}

/// Tests filtering by patient id.
///
/// Expected: Ok with only that patient's prescriptions
#[tokio::test]
async fn filters_by_patient_id() -> Result<(), TestError> {
    let test = TestBuilder::new().with_clinic_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (patient, docter, _) = factory::helpers::create_prescription_with_users(db).await?;
    factory::prescription::create_prescription(db, &patient.id, &docter.id).await?;
    // A prescription for someone else.
    factory::helpers::create_prescription_with_users(db).await?;

    let prescriptions = PrescriptionRepository::new(db)
        .find_many(&PrescriptionFilter::for_patient(&patient.id))
        .await?;

    assert_eq!(prescriptions.len(), 2);
    assert!(prescriptions.iter().all(|p| p.patient_id == patient.id));

    Ok(())
}

/// Tests filtering by both patient and doctor id.
///
/// Expected: Ok with only prescriptions matching both
#[tokio::test]
async fn filters_by_patient_and_docter() -> Result<(), TestError> {
    let test = TestBuilder::new().with_clinic_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (patient, docter, created) = factory::helpers::create_prescription_with_users(db).await?;
    let other_docter = factory::user::create_user(db).await?;
    factory::prescription::create_prescription(db, &patient.id, &other_docter.id).await?;

    let prescriptions = PrescriptionRepository::new(db)
        .find_many(&PrescriptionFilter {
            patient_id: Some(patient.id.clone()),
            docter_id: Some(docter.id.clone()),
        })
        .await?;

    assert_eq!(prescriptions.len(), 1);
    assert_eq!(prescriptions[0].id, created.id);

    Ok(())
}

/// Tests that an unmatched filter yields an empty list rather than an error.
///
/// Expected: Ok(vec![])
#[tokio::test]
async fn returns_empty_for_unmatched_filter() -> Result<(), TestError> {
    let test = TestBuilder::new().with_clinic_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::helpers::create_prescription_with_users(db).await?;

    let prescriptions = PrescriptionRepository::new(db)
        .find_many(&PrescriptionFilter::for_patient("no-such-patient"))
        .await?;

    assert!(prescriptions.is_empty());

    Ok(())
}
