//! Prescription service for business logic.
//!
//! Implements the prescription CRUD contract: required-field validation,
//! patient/doctor existence checks before creation, and the documented
//! status mapping (404 for missing rows, 422 for validation and persistence
//! failures).

use sea_orm::{DatabaseConnection, DbErr};

use crate::{
    data::{prescription::PrescriptionRepository, user::UserRepository},
    error::AppError,
    model::prescription::{
        CreatePrescriptionParam, NewPrescription, Prescription, PrescriptionFilter,
        UpdatePrescriptionParam,
    },
};

/// Service providing business logic for prescription management.
pub struct PrescriptionService<'a> {
    pub db: &'a DatabaseConnection,
}

impl<'a> PrescriptionService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists prescriptions, optionally filtered by patient and/or doctor id.
    ///
    /// # Arguments
    /// - `filter` - Optional equality filters
    ///
    /// # Returns
    /// - `Ok(Vec<Prescription>)` - Matching prescriptions
    /// - `Err(AppError::UnprocessableEntity)` - Query failure (contract: 422)
    pub async fn get_all(&self, filter: PrescriptionFilter) -> Result<Vec<Prescription>, AppError> {
        PrescriptionRepository::new(self.db)
            .find_many(&filter)
            .await
            .map_err(|e| query_failure("Failed to get prescriptions", e))
    }

    /// Fetches one prescription by id.
    ///
    /// # Arguments
    /// - `id` - Prescription id
    ///
    /// # Returns
    /// - `Ok(Prescription)` - The prescription
    /// - `Err(AppError::NotFound)` - No prescription with that id (a query
    ///   failure reports the same way, matching the contract)
    pub async fn get_one(&self, id: &str) -> Result<Prescription, AppError> {
        PrescriptionRepository::new(self.db)
            .find_by_id(id)
            .await
            .unwrap_or_else(|e| {
                tracing::error!("Failed to get prescription: {}", e);
                None
            })
            .ok_or_else(|| AppError::NotFound("Prescription not found".to_string()))
    }

    /// Creates a prescription after validating its fields and references.
    ///
    /// Requires `patient_id`, `docter_id`, and `content` (empty strings count
    /// as missing), and both referenced users must exist and not be
    /// soft-deleted.
    ///
    /// # Arguments
    /// - `param` - Unvalidated creation parameters
    ///
    /// # Returns
    /// - `Ok(Prescription)` - The created prescription
    /// - `Err(AppError::UnprocessableEntity)` - Missing fields, unknown
    ///   patient/doctor, or persistence failure
    pub async fn create(&self, param: CreatePrescriptionParam) -> Result<Prescription, AppError> {
        let (Some(patient_id), Some(docter_id), Some(content)) = (
            param.patient_id.filter(|s| !s.is_empty()),
            param.docter_id.filter(|s| !s.is_empty()),
            param.content.filter(|s| !s.is_empty()),
        ) else {
            return Err(AppError::UnprocessableEntity(
                "Missing required fields: patientId, docterId, content".to_string(),
            ));
        };

        let user_repo = UserRepository::new(self.db);
        let patient_exists = user_repo.exists(&patient_id).await.unwrap_or(false);
        let docter_exists = user_repo.exists(&docter_id).await.unwrap_or(false);
        if !patient_exists || !docter_exists {
            return Err(AppError::UnprocessableEntity(
                "Patient or docter not found".to_string(),
            ));
        }

        PrescriptionRepository::new(self.db)
            .create(NewPrescription {
                patient_id,
                docter_id,
                content,
            })
            .await
            .map_err(|e| query_failure("Failed to create prescription", e))
    }

    /// Applies a partial update to an existing prescription.
    ///
    /// # Arguments
    /// - `id` - Prescription id
    /// - `param` - Fields to update; `None` fields are left unchanged
    ///
    /// # Returns
    /// - `Ok(Prescription)` - The updated prescription
    /// - `Err(AppError::NotFound)` - No prescription with that id
    /// - `Err(AppError::UnprocessableEntity)` - Persistence failure
    pub async fn update(
        &self,
        id: &str,
        param: UpdatePrescriptionParam,
    ) -> Result<Prescription, AppError> {
        let repo = PrescriptionRepository::new(self.db);

        // Existence check first so a missing row reports 404, not 422.
        self.get_one(id).await?;

        repo.update(id, param)
            .await
            .map_err(|e| query_failure("Failed to update prescription", e))?
            .ok_or_else(|| {
                AppError::UnprocessableEntity("Failed to update prescription".to_string())
            })
    }

    /// Deletes one prescription by id.
    ///
    /// # Arguments
    /// - `id` - Prescription id
    ///
    /// # Returns
    /// - `Ok(())` - Prescription deleted
    /// - `Err(AppError::NotFound)` - No prescription with that id
    /// - `Err(AppError::UnprocessableEntity)` - Persistence failure
    pub async fn remove(&self, id: &str) -> Result<(), AppError> {
        self.get_one(id).await?;

        PrescriptionRepository::new(self.db)
            .delete(id)
            .await
            .map_err(|e| query_failure("Failed to delete prescription", e))?;

        Ok(())
    }

    /// Lists all prescriptions issued to one patient.
    ///
    /// # Arguments
    /// - `user_id` - Patient user id
    ///
    /// # Returns
    /// - `Ok(Vec<Prescription>)` - Prescriptions with `patient_id = user_id`
    /// - `Err(AppError::UnprocessableEntity)` - Empty id, unknown user, or
    ///   query failure
    pub async fn get_by_user(&self, user_id: &str) -> Result<Vec<Prescription>, AppError> {
        if user_id.is_empty() {
            return Err(AppError::UnprocessableEntity(
                "User ID is required".to_string(),
            ));
        }

        let user_exists = UserRepository::new(self.db)
            .exists(user_id)
            .await
            .unwrap_or(false);
        if !user_exists {
            return Err(AppError::UnprocessableEntity("User not found".to_string()));
        }

        PrescriptionRepository::new(self.db)
            .find_many(&PrescriptionFilter::for_patient(user_id))
            .await
            .map_err(|e| query_failure("Failed to get user prescriptions", e))
    }
}

/// Maps a data-layer failure to the 422 the prescription contract documents,
/// keeping the underlying error in the log.
fn query_failure(message: &str, err: DbErr) -> AppError {
    tracing::error!("{}: {}", message, err);
    AppError::UnprocessableEntity(message.to_string())
}
