//! User factory for creating test user entities.
//!
//! Provides factory methods for creating user entities with sensible
//! defaults, reducing boilerplate in tests. The factory supports
//! customization through a builder pattern.

use argon2::{
    password_hash::{rand_core::OsRng, SaltString},
    Argon2, PasswordHasher,
};
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection};
use uuid::Uuid;

use crate::{error::TestError, factory::helpers::next_id};

/// Factory for creating test users with customizable fields.
///
/// Defaults produce a confirmed ("registered") account so authenticated
/// flows and prescription existence checks work without extra setup.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::user::UserFactory;
///
/// let user = UserFactory::new(&db)
///     .email("doc@example.com")
///     .account_type("docter")
///     .build()
///     .await?;
/// ```
pub struct UserFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    email: String,
    phone: String,
    password: String,
    account_type: String,
    is_registered: bool,
    confirmation_token: Option<String>,
    reset_token: Option<String>,
    deleted: bool,
}

impl<'a> UserFactory<'a> {
    /// Creates a new UserFactory with default values.
    ///
    /// Defaults:
    /// - name: `"User {n}"`, email: `"user{n}@example.com"` (n auto-incremented)
    /// - phone: `"+1000000{n}"`
    /// - password: `"secret-password"` (stored as a real Argon2id hash)
    /// - account_type: `"patient"`, is_registered: `true`, not deleted
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    ///
    /// # Returns
    /// - `UserFactory` - New factory instance with defaults
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("User {}", id),
            email: format!("user{}@example.com", id),
            phone: format!("+1000000{}", id),
            password: "secret-password".to_string(),
            account_type: "patient".to_string(),
            is_registered: true,
            confirmation_token: None,
            reset_token: None,
            deleted: false,
        }
    }

    /// Sets the display name for the user.
    pub fn name(mut self, name: &str) -> Self {
        self.name = name.to_string();
        self
    }

    /// Sets the email address for the user.
    pub fn email(mut self, email: &str) -> Self {
        self.email = email.to_string();
        self
    }

    /// Sets the plain password; it is hashed on `build()`.
    pub fn password(mut self, password: &str) -> Self {
        self.password = password.to_string();
        self
    }

    /// Sets the account type (e.g. `"patient"` or `"docter"`).
    pub fn account_type(mut self, account_type: &str) -> Self {
        self.account_type = account_type.to_string();
        self
    }

    /// Sets the registration confirmation flag.
    pub fn is_registered(mut self, is_registered: bool) -> Self {
        self.is_registered = is_registered;
        self
    }

    /// Sets a pending confirmation token.
    pub fn confirmation_token(mut self, token: &str) -> Self {
        self.confirmation_token = Some(token.to_string());
        self
    }

    /// Sets a pending password reset token.
    pub fn reset_token(mut self, token: &str) -> Self {
        self.reset_token = Some(token.to_string());
        self
    }

    /// Marks the user as soft-deleted (`deleted_at` set to now).
    pub fn deleted(mut self) -> Self {
        self.deleted = true;
        self
    }

    /// Inserts the user into the database.
    ///
    /// # Returns
    /// - `Ok(Model)` - The inserted user entity
    /// - `Err(TestError)` - Hashing or database error
    pub async fn build(self) -> Result<entity::user::Model, TestError> {
        let salt = SaltString::generate(&mut OsRng);
        let hash = Argon2::default()
            .hash_password(self.password.as_bytes(), &salt)
            .map_err(|e| TestError::PasswordHash(e.to_string()))?
            .to_string();

        let now = Utc::now();
        let user = entity::user::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4().to_string()),
            name: ActiveValue::Set(self.name),
            email: ActiveValue::Set(self.email),
            phone: ActiveValue::Set(self.phone),
            password: ActiveValue::Set(hash),
            avatar: ActiveValue::Set(None),
            account_type: ActiveValue::Set(self.account_type),
            is_registered: ActiveValue::Set(self.is_registered),
            confirmation_token: ActiveValue::Set(self.confirmation_token),
            reset_token: ActiveValue::Set(self.reset_token),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            deleted_at: ActiveValue::Set(self.deleted.then_some(now)),
        }
        .insert(self.db)
        .await?;

        Ok(user)
    }
}

/// Creates a user with all default values.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok(Model)` - The inserted user entity
/// - `Err(TestError)` - Hashing or database error
pub async fn create_user(db: &DatabaseConnection) -> Result<entity::user::Model, TestError> {
    UserFactory::new(db).build().await
}
