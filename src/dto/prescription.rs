use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

/// Prescription as returned by the API.
///
/// The "docter" spelling matches the documented wire format and the
/// underlying schema.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PrescriptionDto {
    pub id: String,
    pub patient_id: String,
    pub docter_id: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Prescription creation body. All three fields are required; presence is
/// validated by the service so missing fields report 422 with a contract
/// message rather than a deserialization error.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreatePrescriptionDto {
    pub patient_id: Option<String>,
    pub docter_id: Option<String>,
    pub content: Option<String>,
}

/// Partial prescription update; absent or empty fields are left unchanged.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePrescriptionDto {
    pub patient_id: Option<String>,
    pub docter_id: Option<String>,
    pub content: Option<String>,
}

/// Equality filters for listing prescriptions.
#[derive(Debug, Clone, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
pub struct PrescriptionFilterParam {
    /// Only prescriptions issued to this patient.
    pub patient_id: Option<String>,
    /// Only prescriptions issued by this doctor.
    pub docter_id: Option<String>,
}
