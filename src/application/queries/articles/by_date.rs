use super::ArticleQueryService;
use crate::application::{
    dto::CompanyArticleView,
    error::{ApplicationError, ApplicationResult},
    messages,
};
use chrono::NaiveDate;

/// Either a single day or an inclusive range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArticlesByDateQuery {
    On(NaiveDate),
    Between(NaiveDate, NaiveDate),
}

impl ArticleQueryService {
    pub async fn find_by_date(&self, date: NaiveDate) -> ApplicationResult<Vec<CompanyArticleView>> {
        let articles = self.read_repo.find_by_date(date).await?;
        Ok(articles.into_iter().map(Into::into).collect())
    }

    pub async fn find_by_date_range(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> ApplicationResult<Vec<CompanyArticleView>> {
        if start > end {
            return Err(ApplicationError::validation(messages::RANGE_ARTICLE_PERIOD));
        }
        let articles = self.read_repo.find_by_date_range(start, end).await?;
        Ok(articles.into_iter().map(Into::into).collect())
    }

    pub async fn articles_by_date(
        &self,
        query: ArticlesByDateQuery,
    ) -> ApplicationResult<Vec<CompanyArticleView>> {
        match query {
            ArticlesByDateQuery::On(date) => self.find_by_date(date).await,
            ArticlesByDateQuery::Between(start, end) => self.find_by_date_range(start, end).await,
        }
    }
}
