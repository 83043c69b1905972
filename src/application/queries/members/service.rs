use std::sync::Arc;

use crate::domain::member::MemberRepository;

pub struct MemberQueryService {
    pub(super) repo: Arc<dyn MemberRepository>,
}

impl MemberQueryService {
    pub fn new(repo: Arc<dyn MemberRepository>) -> Self {
        Self { repo }
    }
}
