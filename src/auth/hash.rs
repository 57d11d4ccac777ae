//! PIN hashing using Argon2id
//!
//! PINs are short, so the stored value is a salted, memory-hard hash in PHC
//! string format rather than the PIN itself.

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};

use crate::error::{WellspaceError, WellspaceResult};

/// Hash a PIN into a PHC string (`$argon2id$v=19$...`)
pub fn hash_pin(pin: &str) -> WellspaceResult<String> {
    let salt = SaltString::generate(&mut OsRng);

    let hash = Argon2::default()
        .hash_password(pin.as_bytes(), &salt)
        .map_err(|e| WellspaceError::Auth(format!("Failed to hash PIN: {}", e)))?;

    Ok(hash.to_string())
}

/// Check a PIN against a stored PHC hash
///
/// A malformed stored hash is an error; a wrong PIN is `Ok(false)`.
pub fn verify_pin(pin: &str, stored_hash: &str) -> WellspaceResult<bool> {
    let parsed = PasswordHash::new(stored_hash)
        .map_err(|e| WellspaceError::Storage(format!("Stored PIN hash is corrupt: {}", e)))?;

    Ok(Argon2::default()
        .verify_password(pin.as_bytes(), &parsed)
        .is_ok())
}
