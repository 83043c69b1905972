// src/application/commands/members/service.rs
use std::sync::Arc;

use crate::{
    application::ports::{security::PasswordHasher, time::Clock},
    domain::member::MemberRepository,
};

pub struct MemberCommandService {
    pub(super) repo: Arc<dyn MemberRepository>,
    pub(super) password_hasher: Arc<dyn PasswordHasher>,
    pub(super) clock: Arc<dyn Clock>,
}

impl MemberCommandService {
    pub fn new(
        repo: Arc<dyn MemberRepository>,
        password_hasher: Arc<dyn PasswordHasher>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            repo,
            password_hasher,
            clock,
        }
    }
}
