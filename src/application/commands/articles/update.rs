// src/application/commands/articles/update.rs
use super::ArticleCommandService;
use crate::{
    application::{
        dto::{CompanyArticleDto, CompanyArticleView},
        error::{ApplicationError, ApplicationResult},
        messages,
    },
    domain::article::CompanyArticleUpdate,
};

impl ArticleCommandService {
    /// Overwrites the article that carries `dto.name`.
    ///
    /// The link may not be moved onto another article's link.
    pub async fn update_article(
        &self,
        dto: &CompanyArticleDto,
    ) -> ApplicationResult<CompanyArticleView> {
        self.validate(dto)?;
        let article = dto.to_new_article()?;

        let existing = self
            .read_repo
            .find_by_name(&article.name)
            .await?
            .ok_or_else(|| ApplicationError::not_found(messages::NOT_FOUND_ARTICLE_NAME))?;

        if let Some(owner) = self.read_repo.find_by_link(&article.link).await?
            && owner.number != existing.number
        {
            return Err(ApplicationError::not_found(messages::NOT_FOUND_ARTICLE_LINK));
        }
        self.ensure_company_exists(&article.subject_company).await?;

        let updated = self
            .write_repo
            .update(CompanyArticleUpdate::from(article))
            .await?;
        tracing::info!(number = %updated.number, name = %updated.name, "article updated");
        Ok(updated.into())
    }
}
