use crate::{
    error::{auth::AuthError, AppError},
    model::user::RegisterParam,
    service::auth::AuthService,
    util::jwt,
};
use test_utils::{builder::TestBuilder, error::TestError, factory};

mod confirm_registration;
mod login;
mod reset_password;
