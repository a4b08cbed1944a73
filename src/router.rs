use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::{
    controller::{auth, prescription, user},
    docs::ApiDoc,
    state::AppState,
};

/// Builds the application router: client API routes plus the Swagger UI.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/client/auth/register", post(auth::register))
        .route(
            "/client/auth/register/confirmation",
            get(auth::confirm_registration),
        )
        .route("/client/auth/login", post(auth::login))
        .route("/client/auth/logout", get(auth::logout))
        .route("/client/auth/forgotpassword", post(auth::forgot_password))
        .route(
            "/client/auth/forgotpassword/reset",
            post(auth::reset_password),
        )
        .route(
            "/client/user/me",
            get(user::get_me)
                .patch(user::update_me)
                .delete(user::delete_me),
        )
        .route(
            "/client/prescription",
            get(prescription::get_prescriptions).post(prescription::create_prescription),
        )
        .route(
            "/client/prescription/{id}",
            get(prescription::get_prescription)
                .put(prescription::update_prescription)
                .delete(prescription::delete_prescription),
        )
        .route(
            "/client/prescription/user/{user_id}",
            get(prescription::get_user_prescriptions),
        )
        .merge(SwaggerUi::new("/docs").url("/docs/openapi.json", ApiDoc::openapi()))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}
