//! Password hashing and verification with Argon2id.

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, SaltString},
    Argon2, PasswordHasher, PasswordVerifier,
};

use crate::error::AppError;

/// Hashes a plain password into a PHC string with a fresh random salt.
///
/// # Arguments
/// - `plain` - The plain-text password
///
/// # Returns
/// - `Ok(String)` - PHC-formatted Argon2id hash
/// - `Err(AppError::InternalError)` - Hashing failed
pub fn hash_password(plain: &str) -> Result<String, AppError> {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(plain.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| AppError::InternalError(format!("Failed to hash password: {}", e)))
}

/// Verifies a plain password against a stored PHC hash.
///
/// # Arguments
/// - `plain` - The plain-text password to check
/// - `hash` - Stored PHC-formatted hash
///
/// # Returns
/// - `Ok(true)` - Password matches
/// - `Ok(false)` - Password does not match
/// - `Err(AppError::InternalError)` - The stored hash is malformed
pub fn verify_password(plain: &str, hash: &str) -> Result<bool, AppError> {
    let parsed = PasswordHash::new(hash)
        .map_err(|e| AppError::InternalError(format!("Malformed password hash: {}", e)))?;

    Ok(Argon2::default()
        .verify_password(plain.as_bytes(), &parsed)
        .is_ok())
}
