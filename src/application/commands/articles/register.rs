// src/application/commands/articles/register.rs
use super::ArticleCommandService;
use crate::application::{
    dto::{CompanyArticleDto, CompanyArticleView},
    error::{ApplicationError, ApplicationResult},
    messages,
};

impl ArticleCommandService {
    /// Registers one article after the form rules and the uniqueness and
    /// subject company checks pass.
    pub async fn register_article(
        &self,
        dto: &CompanyArticleDto,
    ) -> ApplicationResult<CompanyArticleView> {
        self.validate(dto)?;
        let article = dto.to_new_article()?;

        if self.read_repo.find_by_name(&article.name).await?.is_some() {
            tracing::warn!(name = %article.name, "article name already registered");
            return Err(ApplicationError::conflict(messages::EXIST_ARTICLE_NAME));
        }
        if self.read_repo.find_by_link(&article.link).await?.is_some() {
            tracing::warn!(link = %article.link, "article link already registered");
            return Err(ApplicationError::conflict(messages::EXIST_ARTICLE_LINK));
        }
        self.ensure_company_exists(&article.subject_company).await?;

        let created = self.write_repo.insert(article).await?;
        tracing::info!(number = %created.number, name = %created.name, "article registered");
        Ok(created.into())
    }
}
