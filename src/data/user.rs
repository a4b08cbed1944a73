//! User data repository for database operations.
//!
//! This module provides the `UserRepository` for managing user records. It
//! handles account creation, profile updates, token flows, and soft deletes
//! with conversion between entity models and domain models at the
//! infrastructure boundary. Every read filters out soft-deleted rows.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    IntoActiveModel, PaginatorTrait, QueryFilter,
};
use uuid::Uuid;

use crate::model::user::{NewUser, UpdateUserParam, User};

/// Repository providing database operations for user management.
pub struct UserRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserRepository<'a> {
    /// Creates a new UserRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `UserRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a new user account.
    ///
    /// Generates the uuid identifier and creation/update timestamps. The
    /// account starts unconfirmed (`is_registered = false`) with the
    /// provided confirmation token pending.
    ///
    /// # Arguments
    /// - `param` - Validated user data including the password hash
    ///
    /// # Returns
    /// - `Ok(User)` - The created user
    /// - `Err(DbErr)` - Database error during insert (including unique
    ///   email violations that slipped past the service-level check)
    pub async fn create(&self, param: NewUser) -> Result<User, DbErr> {
        let now = Utc::now();
        let entity = entity::user::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4().to_string()),
            name: ActiveValue::Set(param.name),
            email: ActiveValue::Set(param.email),
            phone: ActiveValue::Set(param.phone),
            password: ActiveValue::Set(param.password_hash),
            avatar: ActiveValue::Set(None),
            account_type: ActiveValue::Set(param.account_type),
            is_registered: ActiveValue::Set(false),
            confirmation_token: ActiveValue::Set(Some(param.confirmation_token)),
            reset_token: ActiveValue::Set(None),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            deleted_at: ActiveValue::Set(None),
        }
        .insert(self.db)
        .await?;

        Ok(User::from_entity(entity))
    }

    /// Finds a live user by id.
    ///
    /// # Arguments
    /// - `id` - User id
    ///
    /// # Returns
    /// - `Ok(Some(User))` - User found and not soft-deleted
    /// - `Ok(None)` - No such user, or the account is soft-deleted
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_id(&self, id: &str) -> Result<Option<User>, DbErr> {
        let entity = entity::prelude::User::find_by_id(id)
            .filter(entity::user::Column::DeletedAt.is_null())
            .one(self.db)
            .await?;

        Ok(entity.map(User::from_entity))
    }

    /// Finds a live user by email, returning the full entity model.
    ///
    /// Returns the entity rather than the domain model because the caller
    /// (credential verification) needs the stored password hash.
    ///
    /// # Arguments
    /// - `email` - Email address to look up
    ///
    /// # Returns
    /// - `Ok(Some(Model))` - User found and not soft-deleted
    /// - `Ok(None)` - No such user
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_auth_by_email(
        &self,
        email: &str,
    ) -> Result<Option<entity::user::Model>, DbErr> {
        entity::prelude::User::find()
            .filter(entity::user::Column::Email.eq(email))
            .filter(entity::user::Column::DeletedAt.is_null())
            .one(self.db)
            .await
    }

    /// Checks whether a live user with the given id exists.
    ///
    /// Used by the prescription service for patient/doctor existence checks;
    /// soft-deleted users do not count.
    ///
    /// # Arguments
    /// - `id` - User id
    ///
    /// # Returns
    /// - `Ok(bool)` - Whether the user exists
    /// - `Err(DbErr)` - Database error during count query
    pub async fn exists(&self, id: &str) -> Result<bool, DbErr> {
        let count = entity::prelude::User::find_by_id(id)
            .filter(entity::user::Column::DeletedAt.is_null())
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Applies a partial profile update and re-stamps `updated_at`.
    ///
    /// Only the `Some` fields of the param are written; everything else is
    /// left unchanged.
    ///
    /// # Arguments
    /// - `id` - User id
    /// - `param` - Fields to update
    ///
    /// # Returns
    /// - `Ok(Some(User))` - Updated user
    /// - `Ok(None)` - No live user with that id
    /// - `Err(DbErr)` - Database error during query or update
    pub async fn update_profile(
        &self,
        id: &str,
        param: UpdateUserParam,
    ) -> Result<Option<User>, DbErr> {
        let Some(entity) = entity::prelude::User::find_by_id(id)
            .filter(entity::user::Column::DeletedAt.is_null())
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active = entity.into_active_model();
        if let Some(name) = param.name {
            active.name = ActiveValue::Set(name);
        }
        if let Some(phone) = param.phone {
            active.phone = ActiveValue::Set(phone);
        }
        if let Some(avatar) = param.avatar {
            active.avatar = ActiveValue::Set(Some(avatar));
        }
        active.updated_at = ActiveValue::Set(Utc::now());

        let updated = active.update(self.db).await?;

        Ok(Some(User::from_entity(updated)))
    }

    /// Redeems a registration confirmation token.
    ///
    /// Marks the matching account as registered and clears the token so it
    /// cannot be redeemed twice.
    ///
    /// # Arguments
    /// - `token` - Confirmation token issued at registration
    ///
    /// # Returns
    /// - `Ok(Some(User))` - Account confirmed
    /// - `Ok(None)` - Token matches no live account
    /// - `Err(DbErr)` - Database error during query or update
    pub async fn confirm_registration(&self, token: &str) -> Result<Option<User>, DbErr> {
        let Some(entity) = entity::prelude::User::find()
            .filter(entity::user::Column::ConfirmationToken.eq(token))
            .filter(entity::user::Column::DeletedAt.is_null())
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active = entity.into_active_model();
        active.is_registered = ActiveValue::Set(true);
        active.confirmation_token = ActiveValue::Set(None);
        active.updated_at = ActiveValue::Set(Utc::now());

        let updated = active.update(self.db).await?;

        Ok(Some(User::from_entity(updated)))
    }

    /// Stores a password reset token on a user.
    ///
    /// # Arguments
    /// - `id` - User id
    /// - `token` - Reset token to store
    ///
    /// # Returns
    /// - `Ok(())` - Token stored (or no matching user found)
    /// - `Err(DbErr)` - Database error during update
    pub async fn set_reset_token(&self, id: &str, token: &str) -> Result<(), DbErr> {
        entity::prelude::User::update_many()
            .filter(entity::user::Column::Id.eq(id))
            .col_expr(
                entity::user::Column::ResetToken,
                sea_orm::sea_query::Expr::value(token),
            )
            .col_expr(
                entity::user::Column::UpdatedAt,
                sea_orm::sea_query::Expr::value(Utc::now()),
            )
            .exec(self.db)
            .await?;
        Ok(())
    }

    /// Redeems a password reset token, storing the new password hash.
    ///
    /// Clears the token so it cannot be redeemed twice.
    ///
    /// # Arguments
    /// - `token` - Reset token issued by the forgot-password flow
    /// - `password_hash` - New Argon2id hash to store
    ///
    /// # Returns
    /// - `Ok(Some(User))` - Password updated
    /// - `Ok(None)` - Token matches no live account
    /// - `Err(DbErr)` - Database error during query or update
    pub async fn reset_password(
        &self,
        token: &str,
        password_hash: &str,
    ) -> Result<Option<User>, DbErr> {
        let Some(entity) = entity::prelude::User::find()
            .filter(entity::user::Column::ResetToken.eq(token))
            .filter(entity::user::Column::DeletedAt.is_null())
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active = entity.into_active_model();
        active.password = ActiveValue::Set(password_hash.to_string());
        active.reset_token = ActiveValue::Set(None);
        active.updated_at = ActiveValue::Set(Utc::now());

        let updated = active.update(self.db).await?;

        Ok(Some(User::from_entity(updated)))
    }

    /// Soft-deletes a user by stamping `deleted_at`.
    ///
    /// The row is kept; all read paths exclude it from then on.
    ///
    /// # Arguments
    /// - `id` - User id
    ///
    /// # Returns
    /// - `Ok(())` - User marked deleted (or no matching user found)
    /// - `Err(DbErr)` - Database error during update
    pub async fn soft_delete(&self, id: &str) -> Result<(), DbErr> {
        entity::prelude::User::update_many()
            .filter(entity::user::Column::Id.eq(id))
            .col_expr(
                entity::user::Column::DeletedAt,
                sea_orm::sea_query::Expr::value(Utc::now()),
            )
            .exec(self.db)
            .await?;
        Ok(())
    }
}
