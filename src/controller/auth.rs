use axum::{
    extract::{Query, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    dto::{
        api::{ErrorDto, MessageDto},
        auth::{
            ConfirmationParam, ForgotPasswordDto, LoginDto, RegisterDto, ResetPasswordDto,
            TokenDto,
        },
        user::UserDto,
    },
    error::AppError,
    middleware::auth::AuthGuard,
    model::user::RegisterParam,
    service::auth::AuthService,
    state::AppState,
};

/// Tag for grouping authentication endpoints in OpenAPI documentation
pub static AUTH_TAG: &str = "auth";

/// Register a new account.
///
/// Creates an unconfirmed account and issues a confirmation token. The
/// account cannot log in until the token is redeemed via the confirmation
/// endpoint.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `payload` - Registration data (name, email, phone, password)
///
/// # Returns
/// - `201 Created` - Successfully registered account
/// - `422 Unprocessable Entity` - Missing fields or email already registered
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/client/auth/register",
    tag = AUTH_TAG,
    request_body = RegisterDto,
    responses(
        (status = 201, description = "Successfully registered account", body = UserDto),
        (status = 422, description = "Missing fields or email already registered", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn register(
    State(state): State<AppState>,
    Json(payload): Json<RegisterDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthService::new(&state.db)
        .register(RegisterParam::from_dto(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(user.into_dto())))
}

/// Confirm a registration.
///
/// Redeems the confirmation token issued at registration, marking the
/// account as registered so it can log in.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `params` - Query parameters carrying the confirmation token
///
/// # Returns
/// - `200 OK` - Account confirmed
/// - `422 Unprocessable Entity` - Missing or invalid token
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/client/auth/register/confirmation",
    tag = AUTH_TAG,
    params(ConfirmationParam),
    responses(
        (status = 200, description = "Account confirmed", body = MessageDto),
        (status = 422, description = "Missing or invalid token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn confirm_registration(
    State(state): State<AppState>,
    Query(params): Query<ConfirmationParam>,
) -> Result<impl IntoResponse, AppError> {
    AuthService::new(&state.db)
        .confirm_registration(params.token)
        .await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto::new("Registration confirmed")),
    ))
}

/// Log in with email and password.
///
/// Verifies the credentials against the stored password hash and returns a
/// signed bearer token along with the user profile.
///
/// # Arguments
/// - `state` - Application state containing the database connection and JWT settings
/// - `payload` - Login credentials
///
/// # Returns
/// - `200 OK` - Bearer token and user profile
/// - `401 Unauthorized` - Unknown email, wrong password, or unconfirmed account
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/client/auth/login",
    tag = AUTH_TAG,
    request_body = LoginDto,
    responses(
        (status = 200, description = "Successfully logged in", body = TokenDto),
        (status = 401, description = "Invalid credentials or unconfirmed account", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginDto>,
) -> Result<impl IntoResponse, AppError> {
    let (token, user) = AuthService::new(&state.db)
        .login(
            &payload.email,
            &payload.password,
            &state.jwt_secret,
            state.jwt_ttl_hours,
        )
        .await?;

    Ok((
        StatusCode::OK,
        Json(TokenDto {
            token,
            user: user.into_dto(),
        }),
    ))
}

/// Log out.
///
/// Tokens are stateless, so there is nothing to revoke server-side; the
/// client discards its token after the call. The guard still runs so an
/// unauthenticated caller gets 401 like on any other protected route.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `headers` - Request headers carrying the bearer token
///
/// # Returns
/// - `200 OK` - Acknowledgement message
/// - `401 Unauthorized` - Missing or invalid bearer token
#[utoipa::path(
    get,
    path = "/client/auth/logout",
    tag = AUTH_TAG,
    security(("bearerAuth" = [])),
    responses(
        (status = 200, description = "Logged out", body = MessageDto),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto)
    ),
)]
pub async fn logout(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.jwt_secret)
        .require(&headers)
        .await?;

    Ok((StatusCode::OK, Json(MessageDto::new("Logged out"))))
}

/// Start the password recovery flow.
///
/// Issues a reset token for the account with the given email.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `payload` - The account email
///
/// # Returns
/// - `200 OK` - Reset token issued
/// - `422 Unprocessable Entity` - Missing email or unknown account
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/client/auth/forgotpassword",
    tag = AUTH_TAG,
    request_body = ForgotPasswordDto,
    responses(
        (status = 200, description = "Reset token issued", body = MessageDto),
        (status = 422, description = "Missing email or unknown account", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn forgot_password(
    State(state): State<AppState>,
    Json(payload): Json<ForgotPasswordDto>,
) -> Result<impl IntoResponse, AppError> {
    AuthService::new(&state.db)
        .forgot_password(payload.email)
        .await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto::new("Password reset token issued")),
    ))
}

/// Complete the password recovery flow.
///
/// Redeems a reset token and stores the new password.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `payload` - The reset token and new password
///
/// # Returns
/// - `200 OK` - Password updated
/// - `422 Unprocessable Entity` - Missing input or invalid token
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/client/auth/forgotpassword/reset",
    tag = AUTH_TAG,
    request_body = ResetPasswordDto,
    responses(
        (status = 200, description = "Password updated", body = MessageDto),
        (status = 422, description = "Missing input or invalid token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn reset_password(
    State(state): State<AppState>,
    Json(payload): Json<ResetPasswordDto>,
) -> Result<impl IntoResponse, AppError> {
    AuthService::new(&state.db)
        .reset_password(payload.token, payload.password)
        .await?;

    Ok((StatusCode::OK, Json(MessageDto::new("Password updated"))))
}
