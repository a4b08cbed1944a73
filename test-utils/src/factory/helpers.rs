//! Shared helper utilities for factory methods.

use sea_orm::DatabaseConnection;

use crate::error::TestError;

/// Counter for generating unique values in tests.
///
/// This atomic counter ensures each factory-created entity gets unique
/// identifying fields (emails, names) to prevent collisions in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a prescription together with its patient and doctor users.
///
/// Convenience method for tests that only need a valid prescription and do
/// not care about the specific users involved.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok((patient, docter, prescription))` - Tuple of created entities
/// - `Err(TestError)` - Database or hashing error during creation
pub async fn create_prescription_with_users(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::user::Model,
        entity::user::Model,
        entity::prescription::Model,
    ),
    TestError,
> {
    let patient = crate::factory::user::create_user(db).await?;
    let docter = crate::factory::user::create_user(db).await?;
    let prescription =
        crate::factory::prescription::create_prescription(db, &patient.id, &docter.id).await?;

    Ok((patient, docter, prescription))
}
