//! User domain models and parameters.
//!
//! The domain model deliberately omits the password hash and the
//! confirmation/reset tokens; code that needs those works with the entity
//! model inside the data layer.

use chrono::{DateTime, Utc};

use crate::dto::{auth::RegisterDto, user::UpdateUserDto, user::UserDto};

/// Clinic user with profile fields and registration state.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub avatar: Option<String>,
    /// Account category, e.g. "patient" or "docter".
    pub account_type: String,
    /// Whether the registration confirmation token has been redeemed.
    pub is_registered: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Converts an entity model to a domain model at the repository boundary.
    ///
    /// # Arguments
    /// - `entity` - The entity model from the database
    ///
    /// # Returns
    /// - `User` - The converted domain model
    pub fn from_entity(entity: entity::user::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            email: entity.email,
            phone: entity.phone,
            avatar: entity.avatar,
            account_type: entity.account_type,
            is_registered: entity.is_registered,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }

    /// Converts the domain model to a DTO for API responses.
    pub fn into_dto(self) -> UserDto {
        UserDto {
            id: self.id,
            name: self.name,
            email: self.email,
            phone: self.phone,
            avatar: self.avatar,
            account_type: self.account_type,
            is_registered: self.is_registered,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

/// Parameters for the registration operation.
///
/// Carries the plain password; hashing happens in the service before the
/// repository sees the data.
#[derive(Debug, Clone)]
pub struct RegisterParam {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub password: String,
    pub account_type: String,
}

impl RegisterParam {
    /// Builds registration parameters from the request DTO.
    pub fn from_dto(dto: RegisterDto) -> Self {
        Self {
            name: dto.name,
            email: dto.email,
            phone: dto.phone,
            password: dto.password,
            account_type: dto.account_type.unwrap_or_else(|| "patient".to_string()),
        }
    }
}

/// Validated user data handed to the repository for insertion.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub phone: String,
    /// Argon2id hash, never the plain password.
    pub password_hash: String,
    pub account_type: String,
    /// Token the account holder must redeem to confirm registration.
    pub confirmation_token: String,
}

/// Parameters for a partial profile update. `None` fields are left
/// unchanged.
#[derive(Debug, Clone, Default)]
pub struct UpdateUserParam {
    pub name: Option<String>,
    pub phone: Option<String>,
    pub avatar: Option<String>,
}

impl UpdateUserParam {
    /// Builds update parameters from the request DTO, dropping empty
    /// strings so they do not overwrite existing values.
    pub fn from_dto(dto: UpdateUserDto) -> Self {
        Self {
            name: dto.name.filter(|s| !s.is_empty()),
            phone: dto.phone.filter(|s| !s.is_empty()),
            avatar: dto.avatar.filter(|s| !s.is_empty()),
        }
    }
}
