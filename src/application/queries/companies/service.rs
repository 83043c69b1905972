use std::sync::Arc;

use crate::domain::company::CompanyRepository;

pub struct CompanyQueryService {
    pub(super) repo: Arc<dyn CompanyRepository>,
}

impl CompanyQueryService {
    pub fn new(repo: Arc<dyn CompanyRepository>) -> Self {
        Self { repo }
    }
}
