//! Prescription domain models and parameters.

use chrono::{DateTime, Utc};

use crate::dto::prescription::{
    CreatePrescriptionDto, PrescriptionDto, PrescriptionFilterParam, UpdatePrescriptionDto,
};

/// Medical prescription issued by a doctor to a patient.
#[derive(Debug, Clone, PartialEq)]
pub struct Prescription {
    pub id: String,
    pub patient_id: String,
    pub docter_id: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Prescription {
    /// Converts an entity model to a domain model at the repository boundary.
    pub fn from_entity(entity: entity::prescription::Model) -> Self {
        Self {
            id: entity.id,
            patient_id: entity.patient_id,
            docter_id: entity.docter_id,
            content: entity.content,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }

    /// Converts the domain model to a DTO for API responses.
    pub fn into_dto(self) -> PrescriptionDto {
        PrescriptionDto {
            id: self.id,
            patient_id: self.patient_id,
            docter_id: self.docter_id,
            content: self.content,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

/// Unvalidated creation parameters as received from the request body.
///
/// Presence of the required fields is a service concern (missing or empty
/// fields report 422), so each field is optional here.
#[derive(Debug, Clone, Default)]
pub struct CreatePrescriptionParam {
    pub patient_id: Option<String>,
    pub docter_id: Option<String>,
    pub content: Option<String>,
}

impl CreatePrescriptionParam {
    pub fn from_dto(dto: CreatePrescriptionDto) -> Self {
        Self {
            patient_id: dto.patient_id,
            docter_id: dto.docter_id,
            content: dto.content,
        }
    }
}

/// Validated prescription data handed to the repository for insertion.
#[derive(Debug, Clone)]
pub struct NewPrescription {
    pub patient_id: String,
    pub docter_id: String,
    pub content: String,
}

/// Parameters for a partial prescription update. `None` fields are left
/// unchanged; empty strings are dropped at the DTO boundary.
#[derive(Debug, Clone, Default)]
pub struct UpdatePrescriptionParam {
    pub patient_id: Option<String>,
    pub docter_id: Option<String>,
    pub content: Option<String>,
}

impl UpdatePrescriptionParam {
    pub fn from_dto(dto: UpdatePrescriptionDto) -> Self {
        Self {
            patient_id: dto.patient_id.filter(|s| !s.is_empty()),
            docter_id: dto.docter_id.filter(|s| !s.is_empty()),
            content: dto.content.filter(|s| !s.is_empty()),
        }
    }
}

/// Equality filters for listing prescriptions.
#[derive(Debug, Clone, Default)]
pub struct PrescriptionFilter {
    pub patient_id: Option<String>,
    pub docter_id: Option<String>,
}

impl PrescriptionFilter {
    pub fn from_dto(dto: PrescriptionFilterParam) -> Self {
        Self {
            patient_id: dto.patient_id,
            docter_id: dto.docter_id,
        }
    }

    /// Filter matching all prescriptions issued to one patient.
    pub fn for_patient(patient_id: &str) -> Self {
        Self {
            patient_id: Some(patient_id.to_string()),
            docter_id: None,
        }
    }
}
