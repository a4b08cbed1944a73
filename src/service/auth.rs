//! Authentication service: registration, confirmation, login, and password
//! recovery.
//!
//! There is no mailer in this deployment; confirmation and reset tokens are
//! written to the application log at `info` so the flows remain exercisable
//! end to end.

use sea_orm::DatabaseConnection;
use uuid::Uuid;

use crate::{
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
    model::user::{NewUser, RegisterParam, User},
    util::{jwt, password},
};

/// Service providing business logic for account lifecycle and credentials.
pub struct AuthService<'a> {
    pub db: &'a DatabaseConnection,
}

impl<'a> AuthService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Registers a new user account.
    ///
    /// Validates required fields, rejects already-registered emails, hashes
    /// the password, and persists the account unconfirmed with a pending
    /// confirmation token.
    ///
    /// # Arguments
    /// - `param` - Registration parameters with the plain password
    ///
    /// # Returns
    /// - `Ok(User)` - The created account
    /// - `Err(AppError::UnprocessableEntity)` - Missing fields, taken email,
    ///   or persistence failure
    pub async fn register(&self, param: RegisterParam) -> Result<User, AppError> {
        if param.name.is_empty()
            || param.email.is_empty()
            || param.phone.is_empty()
            || param.password.is_empty()
        {
            return Err(AppError::UnprocessableEntity(
                "Missing required fields: name, email, phone, password".to_string(),
            ));
        }

        let repo = UserRepository::new(self.db);

        if repo.find_auth_by_email(&param.email).await?.is_some() {
            return Err(AppError::UnprocessableEntity(
                "Email already registered".to_string(),
            ));
        }

        let password_hash = password::hash_password(&param.password)?;
        let confirmation_token = Uuid::new_v4().to_string();

        let user = repo
            .create(NewUser {
                name: param.name,
                email: param.email,
                phone: param.phone,
                password_hash,
                account_type: param.account_type,
                confirmation_token: confirmation_token.clone(),
            })
            .await
            .map_err(|e| {
                tracing::error!("Failed to register user: {}", e);
                AppError::UnprocessableEntity("Failed to register user".to_string())
            })?;

        // Stands in for the confirmation email.
        tracing::info!(
            email = %user.email,
            token = %confirmation_token,
            "registration confirmation token issued"
        );

        Ok(user)
    }

    /// Redeems a registration confirmation token.
    ///
    /// # Arguments
    /// - `token` - Token from the confirmation link, if any
    ///
    /// # Returns
    /// - `Ok(())` - Account confirmed
    /// - `Err(AppError::UnprocessableEntity)` - Missing or unknown token
    pub async fn confirm_registration(&self, token: Option<String>) -> Result<(), AppError> {
        let Some(token) = token.filter(|t| !t.is_empty()) else {
            return Err(AppError::UnprocessableEntity(
                "Confirmation token is required".to_string(),
            ));
        };

        UserRepository::new(self.db)
            .confirm_registration(&token)
            .await?
            .ok_or_else(|| {
                AppError::UnprocessableEntity("Invalid confirmation token".to_string())
            })?;

        Ok(())
    }

    /// Verifies credentials and issues a bearer token.
    ///
    /// # Arguments
    /// - `email` - Account email
    /// - `plain_password` - Password to verify
    /// - `jwt_secret` - HS256 signing secret
    /// - `jwt_ttl_hours` - Token lifetime in hours
    ///
    /// # Returns
    /// - `Ok((token, User))` - Signed JWT and the authenticated user
    /// - `Err(AppError::AuthErr)` - Unknown email, wrong password, or
    ///   unconfirmed account (all 401)
    pub async fn login(
        &self,
        email: &str,
        plain_password: &str,
        jwt_secret: &str,
        jwt_ttl_hours: i64,
    ) -> Result<(String, User), AppError> {
        let Some(entity) = UserRepository::new(self.db).find_auth_by_email(email).await? else {
            return Err(AuthError::InvalidCredentials(email.to_string()).into());
        };

        if !password::verify_password(plain_password, &entity.password)? {
            return Err(AuthError::InvalidCredentials(email.to_string()).into());
        }

        if !entity.is_registered {
            return Err(AuthError::AccountNotConfirmed(email.to_string()).into());
        }

        let token = jwt::encode_token(jwt_secret, &entity.id, jwt_ttl_hours)?;

        Ok((token, User::from_entity(entity)))
    }

    /// Starts the password recovery flow for an account.
    ///
    /// # Arguments
    /// - `email` - Account email, if any
    ///
    /// # Returns
    /// - `Ok(())` - Reset token stored (and logged)
    /// - `Err(AppError::UnprocessableEntity)` - Missing or unknown email
    pub async fn forgot_password(&self, email: Option<String>) -> Result<(), AppError> {
        let Some(email) = email.filter(|e| !e.is_empty()) else {
            return Err(AppError::UnprocessableEntity(
                "Email is required".to_string(),
            ));
        };

        let repo = UserRepository::new(self.db);

        let Some(entity) = repo.find_auth_by_email(&email).await? else {
            return Err(AppError::UnprocessableEntity("User not found".to_string()));
        };

        let reset_token = Uuid::new_v4().to_string();
        repo.set_reset_token(&entity.id, &reset_token).await?;

        // Stands in for the recovery email.
        tracing::info!(email = %email, token = %reset_token, "password reset token issued");

        Ok(())
    }

    /// Redeems a password reset token and stores the new password.
    ///
    /// # Arguments
    /// - `token` - Reset token, if any
    /// - `plain_password` - New password, if any
    ///
    /// # Returns
    /// - `Ok(())` - Password updated, token cleared
    /// - `Err(AppError::UnprocessableEntity)` - Missing input or unknown token
    pub async fn reset_password(
        &self,
        token: Option<String>,
        plain_password: Option<String>,
    ) -> Result<(), AppError> {
        let Some(token) = token.filter(|t| !t.is_empty()) else {
            return Err(AppError::UnprocessableEntity(
                "Reset token is required".to_string(),
            ));
        };
        let Some(plain_password) = plain_password.filter(|p| !p.is_empty()) else {
            return Err(AppError::UnprocessableEntity(
                "Password is required".to_string(),
            ));
        };

        let password_hash = password::hash_password(&plain_password)?;

        UserRepository::new(self.db)
            .reset_password(&token, &password_hash)
            .await?
            .ok_or_else(|| AppError::UnprocessableEntity("Invalid reset token".to_string()))?;

        Ok(())
    }
}
