// tests/support/mocks/mod.rs
//! テスト用モックの再エクスポート
#![allow(dead_code)]
#![allow(unused_imports)]

pub mod repos;
pub mod security;
pub mod time;

pub use repos::{InMemoryArticleRepo, InMemoryCompanyRepo, InMemoryMemberRepo};
pub use security::{HASH_PREFIX, PrefixPasswordHasher};
pub use time::{FixedClock, fixed_now, fixed_today};
