use crate::error::PortalError;
use argon2::password_hash::{PasswordHash, SaltString, rand_core::OsRng};
use argon2::{Argon2, PasswordHasher, PasswordVerifier};
use std::sync::LazyLock;

/// Verified against when the email is unknown, so both failure paths hash.
static DUMMY_HASH: LazyLock<Option<String>> =
    LazyLock::new(|| hash_password("not-a-real-password").ok());

/// Build the dummy hash ahead of the first signin. Returns whether it is usable.
pub fn prime_dummy_hash() -> bool {
    DUMMY_HASH.is_some()
}

/// Salted argon2id hash in PHC string form.
pub fn hash_password(password: &str) -> Result<String, PortalError> {
    let salt = SaltString::generate(&mut OsRng);
    let hash = Argon2::default().hash_password(password.as_bytes(), &salt)?;
    Ok(hash.to_string())
}

pub fn verify_password(password: &str, phc: &str) -> Result<bool, PortalError> {
    let parsed = PasswordHash::new(phc)?;
    match Argon2::default().verify_password(password.as_bytes(), &parsed) {
        Ok(()) => Ok(true),
        Err(argon2::password_hash::Error::Password) => Ok(false),
        Err(e) => Err(e.into()),
    }
}

pub async fn hash_password_blocking(password: String) -> Result<String, PortalError> {
    tokio::task::spawn_blocking(move || hash_password(&password)).await?
}

/// Check `password` against `stored`, or against a dummy hash when there is
/// no stored hash. The dummy path always answers `false`.
pub async fn verify_password_blocking(
    password: String,
    stored: Option<String>,
) -> Result<bool, PortalError> {
    tokio::task::spawn_blocking(move || match stored {
        Some(phc) => verify_password(&password, &phc),
        None => {
            if let Some(dummy) = DUMMY_HASH.as_deref() {
                let _ = verify_password(&password, dummy);
            }
            Ok(false)
        }
    })
    .await?
}
