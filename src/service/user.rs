//! User profile service for the authenticated principal's own account.

use sea_orm::DatabaseConnection;

use crate::{
    data::user::UserRepository,
    error::AppError,
    model::user::{UpdateUserParam, User},
};

/// Service providing business logic for the `/client/user/me` operations.
pub struct UserService<'a> {
    pub db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Fetches the authenticated user's profile.
    ///
    /// # Arguments
    /// - `id` - User id from the verified bearer token
    ///
    /// # Returns
    /// - `Ok(User)` - Current profile
    /// - `Err(AppError::NotFound)` - Account vanished since the token was issued
    pub async fn get_me(&self, id: &str) -> Result<User, AppError> {
        UserRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))
    }

    /// Applies a partial profile update.
    ///
    /// Only provided non-empty fields (`name`, `phone`, `avatar`) are
    /// written; `updated_at` is re-stamped.
    ///
    /// # Arguments
    /// - `id` - User id from the verified bearer token
    /// - `param` - Fields to update
    ///
    /// # Returns
    /// - `Ok(User)` - Updated profile
    /// - `Err(AppError::NotFound)` - Account vanished since the token was issued
    pub async fn update_me(&self, id: &str, param: UpdateUserParam) -> Result<User, AppError> {
        UserRepository::new(self.db)
            .update_profile(id, param)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))
    }

    /// Soft-deletes the authenticated user's account.
    ///
    /// # Arguments
    /// - `id` - User id from the verified bearer token
    ///
    /// # Returns
    /// - `Ok(())` - Account marked deleted
    /// - `Err(AppError::NotFound)` - Account already gone
    pub async fn delete_me(&self, id: &str) -> Result<(), AppError> {
        let repo = UserRepository::new(self.db);

        if repo.find_by_id(id).await?.is_none() {
            return Err(AppError::NotFound("User not found".to_string()));
        }

        repo.soft_delete(id).await?;

        Ok(())
    }
}
