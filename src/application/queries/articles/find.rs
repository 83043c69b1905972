use super::ArticleQueryService;
use crate::{
    application::{dto::CompanyArticleView, error::ApplicationResult},
    domain::article::{ArticleName, ArticleNumber},
};

impl ArticleQueryService {
    pub async fn list_articles(&self) -> ApplicationResult<Vec<CompanyArticleView>> {
        let articles = self.read_repo.list().await?;
        Ok(articles.into_iter().map(Into::into).collect())
    }

    pub async fn find_by_name(&self, name: &str) -> ApplicationResult<Option<CompanyArticleView>> {
        let Ok(name) = ArticleName::new(name.trim()) else {
            return Ok(None);
        };
        tracing::debug!(%name, "looking up article by name");
        Ok(self.read_repo.find_by_name(&name).await?.map(Into::into))
    }

    /// All-digit input is looked up as a number, anything else as a name.
    pub async fn find_by_number_or_name(
        &self,
        number_or_name: &str,
    ) -> ApplicationResult<Option<CompanyArticleView>> {
        let trimmed = number_or_name.trim();
        if !trimmed.is_empty() && trimmed.bytes().all(|b| b.is_ascii_digit()) {
            let number = trimmed.parse::<i64>().ok().and_then(|n| ArticleNumber::new(n).ok());
            if let Some(number) = number {
                tracing::debug!(%number, "looking up article by number");
                return Ok(self.read_repo.find_by_number(number).await?.map(Into::into));
            }
        }
        self.find_by_name(trimmed).await
    }
}
