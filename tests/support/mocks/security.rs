// tests/support/mocks/security.rs
use corpnews::application::{ApplicationResult, ports::security::PasswordHasher};

pub const HASH_PREFIX: &str = "hashed:";

/// 決定論的なハッシュを返すパスワードハッシャー
pub struct PrefixPasswordHasher;

#[async_trait::async_trait]
impl PasswordHasher for PrefixPasswordHasher {
    async fn hash(&self, password: &str) -> ApplicationResult<String> {
        Ok(format!("{HASH_PREFIX}{password}"))
    }
}
