use axum::{extract::State, http::HeaderMap, http::StatusCode, response::IntoResponse, Json};

use crate::{
    dto::{
        api::{ErrorDto, MessageDto},
        user::{UpdateUserDto, UserDto},
    },
    error::AppError,
    middleware::auth::AuthGuard,
    model::user::UpdateUserParam,
    service::user::UserService,
    state::AppState,
};

/// Tag for grouping user profile endpoints in OpenAPI documentation
pub static USER_TAG: &str = "user";

/// Get the authenticated user's profile.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `headers` - Request headers carrying the bearer token
///
/// # Returns
/// - `200 OK` - Current profile
/// - `401 Unauthorized` - Missing or invalid bearer token
/// - `404 Not Found` - Account no longer exists
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/client/user/me",
    tag = USER_TAG,
    security(("bearerAuth" = [])),
    responses(
        (status = 200, description = "Current profile", body = UserDto),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 404, description = "Account no longer exists", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_me(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.jwt_secret)
        .require(&headers)
        .await?;

    let profile = UserService::new(&state.db).get_me(&user.id).await?;

    Ok((StatusCode::OK, Json(profile.into_dto())))
}

/// Update the authenticated user's profile.
///
/// Applies a partial update; absent or empty fields are left unchanged.
/// Email, password, and account type cannot be changed here.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `headers` - Request headers carrying the bearer token
/// - `payload` - Profile fields to update (name, phone, avatar)
///
/// # Returns
/// - `200 OK` - Updated profile
/// - `401 Unauthorized` - Missing or invalid bearer token
/// - `404 Not Found` - Account no longer exists
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    patch,
    path = "/client/user/me",
    tag = USER_TAG,
    security(("bearerAuth" = [])),
    request_body = UpdateUserDto,
    responses(
        (status = 200, description = "Updated profile", body = UserDto),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 404, description = "Account no longer exists", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_me(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<UpdateUserDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.jwt_secret)
        .require(&headers)
        .await?;

    let updated = UserService::new(&state.db)
        .update_me(&user.id, UpdateUserParam::from_dto(payload))
        .await?;

    Ok((StatusCode::OK, Json(updated.into_dto())))
}

/// Delete the authenticated user's account.
///
/// The account is soft-deleted: the row is kept but becomes invisible to all
/// reads, and outstanding bearer tokens stop resolving.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `headers` - Request headers carrying the bearer token
///
/// # Returns
/// - `200 OK` - Account deleted
/// - `401 Unauthorized` - Missing or invalid bearer token
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/client/user/me",
    tag = USER_TAG,
    security(("bearerAuth" = [])),
    responses(
        (status = 200, description = "Account deleted", body = MessageDto),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_me(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.jwt_secret)
        .require(&headers)
        .await?;

    UserService::new(&state.db).delete_me(&user.id).await?;

    Ok((StatusCode::OK, Json(MessageDto::new("Account deleted"))))
}
