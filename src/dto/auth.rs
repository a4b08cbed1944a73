use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::dto::user::UserDto;

/// Registration request body.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RegisterDto {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub password: String,
    /// Account category, e.g. "patient" or "docter". Defaults to "patient".
    pub account_type: Option<String>,
}

/// Registration confirmation query parameters.
#[derive(Debug, Clone, Deserialize, IntoParams)]
pub struct ConfirmationParam {
    /// Confirmation token issued at registration.
    pub token: Option<String>,
}

/// Login request body.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LoginDto {
    pub email: String,
    pub password: String,
}

/// Successful login response: the bearer token plus the authenticated user.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TokenDto {
    pub token: String,
    pub user: UserDto,
}

/// Forgot-password request body.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ForgotPasswordDto {
    pub email: Option<String>,
}

/// Password reset request body.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ResetPasswordDto {
    /// Reset token issued by the forgot-password flow.
    pub token: Option<String>,
    pub password: Option<String>,
}
