// src/application/commands/companies/service.rs
use std::sync::Arc;

use crate::{application::ports::time::Clock, domain::company::CompanyRepository};

pub struct CompanyCommandService {
    pub(super) repo: Arc<dyn CompanyRepository>,
    pub(super) clock: Arc<dyn Clock>,
}

impl CompanyCommandService {
    pub fn new(repo: Arc<dyn CompanyRepository>, clock: Arc<dyn Clock>) -> Self {
        Self { repo, clock }
    }
}
