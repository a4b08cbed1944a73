//! Prescription data repository for database operations.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    IntoActiveModel, QueryFilter, QueryOrder,
};
use uuid::Uuid;

use crate::model::prescription::{
    NewPrescription, Prescription, PrescriptionFilter, UpdatePrescriptionParam,
};

/// Repository providing database operations for prescriptions.
pub struct PrescriptionRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PrescriptionRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists prescriptions matching the optional equality filters, oldest
    /// first.
    ///
    /// # Arguments
    /// - `filter` - Optional patient/doctor id filters; `None` fields match everything
    ///
    /// # Returns
    /// - `Ok(Vec<Prescription>)` - Matching prescriptions (possibly empty)
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_many(&self, filter: &PrescriptionFilter) -> Result<Vec<Prescription>, DbErr> {
        let mut query = entity::prelude::Prescription::find()
            .order_by_asc(entity::prescription::Column::CreatedAt);

        if let Some(ref patient_id) = filter.patient_id {
            query = query.filter(entity::prescription::Column::PatientId.eq(patient_id));
        }
        if let Some(ref docter_id) = filter.docter_id {
            query = query.filter(entity::prescription::Column::DocterId.eq(docter_id));
        }

        let entities = query.all(self.db).await?;

        Ok(entities.into_iter().map(Prescription::from_entity).collect())
    }

    /// Finds one prescription by id.
    pub async fn find_by_id(&self, id: &str) -> Result<Option<Prescription>, DbErr> {
        let entity = entity::prelude::Prescription::find_by_id(id)
            .one(self.db)
            .await?;

        Ok(entity.map(Prescription::from_entity))
    }

    /// Inserts a new prescription, generating its uuid identifier and
    /// creation/update timestamps.
    ///
    /// # Arguments
    /// - `param` - Validated prescription data
    ///
    /// # Returns
    /// - `Ok(Prescription)` - The created prescription
    /// - `Err(DbErr)` - Database error during insert
    pub async fn create(&self, param: NewPrescription) -> Result<Prescription, DbErr> {
        let now = Utc::now();
        let entity = entity::prescription::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4().to_string()),
            patient_id: ActiveValue::Set(param.patient_id),
            docter_id: ActiveValue::Set(param.docter_id),
            content: ActiveValue::Set(param.content),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        }
        .insert(self.db)
        .await?;

        Ok(Prescription::from_entity(entity))
    }

    /// Applies a partial update and re-stamps `updated_at`.
    ///
    /// Only the `Some` fields of the param are written.
    ///
    /// # Arguments
    /// - `id` - Prescription id
    /// - `param` - Fields to update
    ///
    /// # Returns
    /// - `Ok(Some(Prescription))` - Updated prescription
    /// - `Ok(None)` - No prescription with that id
    /// - `Err(DbErr)` - Database error during query or update
    pub async fn update(
        &self,
        id: &str,
        param: UpdatePrescriptionParam,
    ) -> Result<Option<Prescription>, DbErr> {
        let Some(entity) = entity::prelude::Prescription::find_by_id(id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active = entity.into_active_model();
        if let Some(patient_id) = param.patient_id {
            active.patient_id = ActiveValue::Set(patient_id);
        }
        if let Some(docter_id) = param.docter_id {
            active.docter_id = ActiveValue::Set(docter_id);
        }
        if let Some(content) = param.content {
            active.content = ActiveValue::Set(content);
        }
        active.updated_at = ActiveValue::Set(Utc::now());

        let updated = active.update(self.db).await?;

        Ok(Some(Prescription::from_entity(updated)))
    }

    /// Hard-deletes one prescription by id.
    ///
    /// # Arguments
    /// - `id` - Prescription id
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of rows deleted (0 or 1)
    /// - `Err(DbErr)` - Database error during delete
    pub async fn delete(&self, id: &str) -> Result<u64, DbErr> {
        let result = entity::prelude::Prescription::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
