use axum::{
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    dto::{
        api::{ErrorDto, MessageDto},
        prescription::{
            CreatePrescriptionDto, PrescriptionDto, PrescriptionFilterParam, UpdatePrescriptionDto,
        },
    },
    error::AppError,
    middleware::auth::AuthGuard,
    model::prescription::{CreatePrescriptionParam, PrescriptionFilter, UpdatePrescriptionParam},
    service::prescription::PrescriptionService,
    state::AppState,
};

/// Tag for grouping prescription endpoints in OpenAPI documentation
pub static PRESCRIPTION_TAG: &str = "prescription";

/// List prescriptions.
///
/// Returns all prescriptions, optionally filtered by patient and/or doctor
/// id, oldest first.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `headers` - Request headers carrying the bearer token
/// - `params` - Optional equality filters
///
/// # Returns
/// - `200 OK` - Matching prescriptions
/// - `401 Unauthorized` - Missing or invalid bearer token
/// - `422 Unprocessable Entity` - Query failure
#[utoipa::path(
    get,
    path = "/client/prescription",
    tag = PRESCRIPTION_TAG,
    security(("bearerAuth" = [])),
    params(PrescriptionFilterParam),
    responses(
        (status = 200, description = "Matching prescriptions", body = Vec<PrescriptionDto>),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 422, description = "Query failure", body = ErrorDto)
    ),
)]
pub async fn get_prescriptions(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(params): Query<PrescriptionFilterParam>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.jwt_secret)
        .require(&headers)
        .await?;

    let prescriptions = PrescriptionService::new(&state.db)
        .get_all(PrescriptionFilter::from_dto(params))
        .await?;

    Ok((
        StatusCode::OK,
        Json(
            prescriptions
                .into_iter()
                .map(|p| p.into_dto())
                .collect::<Vec<_>>(),
        ),
    ))
}

/// Get one prescription by id.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `headers` - Request headers carrying the bearer token
/// - `id` - Prescription id
///
/// # Returns
/// - `200 OK` - The prescription
/// - `401 Unauthorized` - Missing or invalid bearer token
/// - `404 Not Found` - No prescription with that id
#[utoipa::path(
    get,
    path = "/client/prescription/{id}",
    tag = PRESCRIPTION_TAG,
    security(("bearerAuth" = [])),
    params(
        ("id" = String, Path, description = "Prescription id")
    ),
    responses(
        (status = 200, description = "The prescription", body = PrescriptionDto),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 404, description = "Prescription not found", body = ErrorDto)
    ),
)]
pub async fn get_prescription(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.jwt_secret)
        .require(&headers)
        .await?;

    let prescription = PrescriptionService::new(&state.db).get_one(&id).await?;

    Ok((StatusCode::OK, Json(prescription.into_dto())))
}

/// Create a prescription.
///
/// Requires a patient id, a doctor id, and content. Both referenced users
/// must exist and not be deleted.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `headers` - Request headers carrying the bearer token
/// - `payload` - Prescription creation data
///
/// # Returns
/// - `201 Created` - Successfully created prescription
/// - `401 Unauthorized` - Missing or invalid bearer token
/// - `422 Unprocessable Entity` - Missing fields or unknown patient/doctor
#[utoipa::path(
    post,
    path = "/client/prescription",
    tag = PRESCRIPTION_TAG,
    security(("bearerAuth" = [])),
    request_body = CreatePrescriptionDto,
    responses(
        (status = 201, description = "Successfully created prescription", body = PrescriptionDto),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 422, description = "Missing fields or unknown patient/doctor", body = ErrorDto)
    ),
)]
pub async fn create_prescription(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<CreatePrescriptionDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.jwt_secret)
        .require(&headers)
        .await?;

    let prescription = PrescriptionService::new(&state.db)
        .create(CreatePrescriptionParam::from_dto(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(prescription.into_dto())))
}

/// Update a prescription.
///
/// Applies a partial update; absent or empty fields are left unchanged.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `headers` - Request headers carrying the bearer token
/// - `id` - Prescription id
/// - `payload` - Fields to update
///
/// # Returns
/// - `200 OK` - Updated prescription
/// - `401 Unauthorized` - Missing or invalid bearer token
/// - `404 Not Found` - No prescription with that id
/// - `422 Unprocessable Entity` - Persistence failure
#[utoipa::path(
    put,
    path = "/client/prescription/{id}",
    tag = PRESCRIPTION_TAG,
    security(("bearerAuth" = [])),
    params(
        ("id" = String, Path, description = "Prescription id")
    ),
    request_body = UpdatePrescriptionDto,
    responses(
        (status = 200, description = "Updated prescription", body = PrescriptionDto),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 404, description = "Prescription not found", body = ErrorDto),
        (status = 422, description = "Persistence failure", body = ErrorDto)
    ),
)]
pub async fn update_prescription(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<String>,
    Json(payload): Json<UpdatePrescriptionDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.jwt_secret)
        .require(&headers)
        .await?;

    let prescription = PrescriptionService::new(&state.db)
        .update(&id, UpdatePrescriptionParam::from_dto(payload))
        .await?;

    Ok((StatusCode::OK, Json(prescription.into_dto())))
}

/// Delete a prescription.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `headers` - Request headers carrying the bearer token
/// - `id` - Prescription id
///
/// # Returns
/// - `200 OK` - Prescription deleted
/// - `401 Unauthorized` - Missing or invalid bearer token
/// - `404 Not Found` - No prescription with that id
#[utoipa::path(
    delete,
    path = "/client/prescription/{id}",
    tag = PRESCRIPTION_TAG,
    security(("bearerAuth" = [])),
    params(
        ("id" = String, Path, description = "Prescription id")
    ),
    responses(
        (status = 200, description = "Prescription deleted", body = MessageDto),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 404, description = "Prescription not found", body = ErrorDto)
    ),
)]
pub async fn delete_prescription(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.jwt_secret)
        .require(&headers)
        .await?;

    PrescriptionService::new(&state.db).remove(&id).await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto::new("Prescription deleted successfully")),
    ))
}

/// List all prescriptions issued to one patient.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `headers` - Request headers carrying the bearer token
/// - `user_id` - Patient user id
///
/// # Returns
/// - `200 OK` - The patient's prescriptions
/// - `401 Unauthorized` - Missing or invalid bearer token
/// - `422 Unprocessable Entity` - Unknown user or query failure
#[utoipa::path(
    get,
    path = "/client/prescription/user/{user_id}",
    tag = PRESCRIPTION_TAG,
    security(("bearerAuth" = [])),
    params(
        ("user_id" = String, Path, description = "Patient user id")
    ),
    responses(
        (status = 200, description = "The patient's prescriptions", body = Vec<PrescriptionDto>),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 422, description = "Unknown user or query failure", body = ErrorDto)
    ),
)]
pub async fn get_user_prescriptions(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(user_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.jwt_secret)
        .require(&headers)
        .await?;

    let prescriptions = PrescriptionService::new(&state.db)
        .get_by_user(&user_id)
        .await?;

    Ok((
        StatusCode::OK,
        Json(
            prescriptions
                .into_iter()
                .map(|p| p.into_dto())
                .collect::<Vec<_>>(),
        ),
    ))
}
