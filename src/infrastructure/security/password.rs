// src/infrastructure/security/password.rs
use crate::application::{
    error::{ApplicationError, ApplicationResult},
    ports::security::PasswordHasher,
};
use argon2::{
    Argon2,
    password_hash::{PasswordHasher as _, SaltString, rand_core::OsRng},
};
use async_trait::async_trait;

/// Argon2id with a fresh random salt per member. The PHC string keeps the
/// parameters next to the hash.
#[derive(Default, Clone)]
pub struct Argon2PasswordHasher;

fn hash_blocking(password: &[u8]) -> ApplicationResult<String> {
    let salt = SaltString::generate(&mut OsRng);
    let hash = Argon2::default()
        .hash_password(password, &salt)
        .map_err(|err| ApplicationError::infrastructure(format!("password hashing: {err}")))?;
    Ok(hash.to_string())
}

#[async_trait]
impl PasswordHasher for Argon2PasswordHasher {
    async fn hash(&self, password: &str) -> ApplicationResult<String> {
        let password = password.as_bytes().to_vec();
        tokio::task::spawn_blocking(move || hash_blocking(&password))
            .await
            .map_err(|err| ApplicationError::infrastructure(format!("hashing task: {err}")))?
    }
}
