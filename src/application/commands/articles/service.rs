// src/application/commands/articles/service.rs
use std::sync::Arc;

use crate::{
    application::{
        dto::CompanyArticleDto,
        error::{ApplicationError, ApplicationResult},
        messages,
        ports::time::Clock,
        validation::{self, ValidationContext},
    },
    domain::{
        article::{CompanyArticleReadRepository, CompanyArticleWriteRepository},
        company::{CompanyName, CompanyRepository},
    },
};

pub struct ArticleCommandService {
    pub(super) write_repo: Arc<dyn CompanyArticleWriteRepository>,
    pub(super) read_repo: Arc<dyn CompanyArticleReadRepository>,
    pub(super) company_repo: Arc<dyn CompanyRepository>,
    pub(super) clock: Arc<dyn Clock>,
}

impl ArticleCommandService {
    pub fn new(
        write_repo: Arc<dyn CompanyArticleWriteRepository>,
        read_repo: Arc<dyn CompanyArticleReadRepository>,
        company_repo: Arc<dyn CompanyRepository>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            write_repo,
            read_repo,
            company_repo,
            clock,
        }
    }

    pub(super) fn validate(&self, dto: &CompanyArticleDto) -> ApplicationResult<()> {
        let ctx = ValidationContext::new(self.clock.today());
        validation::article::validate(dto, &ctx).map_err(ApplicationError::Invalid)
    }

    pub(super) async fn ensure_company_exists(&self, name: &CompanyName) -> ApplicationResult<()> {
        match self.company_repo.find_by_name(name).await? {
            Some(_) => Ok(()),
            None => Err(ApplicationError::not_found(messages::NOT_FOUND_ARTICLE_COMPANY)),
        }
    }
}
