//! Prescription factory for creating test prescription entities.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};
use uuid::Uuid;

use crate::factory::helpers::next_id;

/// Factory for creating test prescriptions with customizable fields.
///
/// Callers supply the patient and doctor ids; both users must already exist
/// (use `factory::user` or `helpers::create_prescription_with_users`).
pub struct PrescriptionFactory<'a> {
    db: &'a DatabaseConnection,
    patient_id: String,
    docter_id: String,
    content: String,
}

impl<'a> PrescriptionFactory<'a> {
    /// Creates a new PrescriptionFactory with default content.
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `patient_id` - Id of the patient user
    /// - `docter_id` - Id of the doctor user
    pub fn new(db: &'a DatabaseConnection, patient_id: &str, docter_id: &str) -> Self {
        Self {
            db,
            patient_id: patient_id.to_string(),
            docter_id: docter_id.to_string(),
            content: format!("Prescription {}", next_id()),
        }
    }

    /// Sets the prescription content.
    pub fn content(mut self, content: &str) -> Self {
        self.content = content.to_string();
        self
    }

    /// Inserts the prescription into the database.
    ///
    /// # Returns
    /// - `Ok(Model)` - The inserted prescription entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::prescription::Model, DbErr> {
        let now = Utc::now();
        entity::prescription::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4().to_string()),
            patient_id: ActiveValue::Set(self.patient_id),
            docter_id: ActiveValue::Set(self.docter_id),
            content: ActiveValue::Set(self.content),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a prescription with default content for the given users.
///
/// # Arguments
/// - `db` - Database connection
/// - `patient_id` - Id of the patient user
/// - `docter_id` - Id of the doctor user
///
/// # Returns
/// - `Ok(Model)` - The inserted prescription entity
/// - `Err(DbErr)` - Database error during insert
pub async fn create_prescription(
    db: &DatabaseConnection,
    patient_id: &str,
    docter_id: &str,
) -> Result<entity::prescription::Model, DbErr> {
    PrescriptionFactory::new(db, patient_id, docter_id).build().await
}
