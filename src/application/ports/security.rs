// src/application/ports/security.rs
use crate::application::ApplicationResult;
use async_trait::async_trait;

/// One-way hashing of member passwords before they are stored.
#[async_trait]
pub trait PasswordHasher: Send + Sync {
    async fn hash(&self, password: &str) -> ApplicationResult<String>;
}
