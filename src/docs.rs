//! OpenAPI specification, generated with utoipa from the controller path
//! attributes and served through the Swagger UI at `/docs`.

use utoipa::{
    openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme},
    Modify, OpenApi,
};

use crate::{
    controller::{auth, prescription, user},
    dto,
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Clinic API",
        description = "Clinic backend: accounts, authentication, and prescription management"
    ),
    paths(
        // auth
        auth::register,
        auth::confirm_registration,
        auth::login,
        auth::logout,
        auth::forgot_password,
        auth::reset_password,
        // user
        user::get_me,
        user::update_me,
        user::delete_me,
        // prescription
        prescription::get_prescriptions,
        prescription::get_prescription,
        prescription::create_prescription,
        prescription::update_prescription,
        prescription::delete_prescription,
        prescription::get_user_prescriptions,
    ),
    components(schemas(
        dto::api::ErrorDto,
        dto::api::MessageDto,
        dto::auth::RegisterDto,
        dto::auth::LoginDto,
        dto::auth::TokenDto,
        dto::auth::ForgotPasswordDto,
        dto::auth::ResetPasswordDto,
        dto::user::UserDto,
        dto::user::UpdateUserDto,
        dto::prescription::PrescriptionDto,
        dto::prescription::CreatePrescriptionDto,
        dto::prescription::UpdatePrescriptionDto,
    )),
    tags(
        (name = auth::AUTH_TAG, description = "Account registration, login, and password recovery"),
        (name = user::USER_TAG, description = "Authenticated user's own profile"),
        (name = prescription::PRESCRIPTION_TAG, description = "Prescription management"),
    ),
    modifiers(&SecurityAddon)
)]
pub struct ApiDoc;

/// Adds the bearer-token security scheme referenced by the protected paths.
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_default();
        components.add_security_scheme(
            "bearerAuth",
            SecurityScheme::Http(
                HttpBuilder::new()
                    .scheme(HttpAuthScheme::Bearer)
                    .bearer_format("JWT")
                    .build(),
            ),
        );
    }
}
