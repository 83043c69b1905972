use crate::domain::article::entity::{CompanyArticle, CompanyArticleUpdate, NewCompanyArticle};
use crate::domain::article::value_objects::{ArticleLink, ArticleName, ArticleNumber};
use crate::domain::errors::DomainResult;
use async_trait::async_trait;
use chrono::NaiveDate;

#[async_trait]
pub trait CompanyArticleWriteRepository: Send + Sync {
    async fn insert(&self, article: NewCompanyArticle) -> DomainResult<CompanyArticle>;
    /// Inserts every article or none of them.
    async fn insert_many(
        &self,
        articles: Vec<NewCompanyArticle>,
    ) -> DomainResult<Vec<CompanyArticle>>;
    async fn update(&self, update: CompanyArticleUpdate) -> DomainResult<CompanyArticle>;
    async fn delete_by_name(&self, name: &ArticleName) -> DomainResult<()>;
    async fn delete_by_number(&self, number: ArticleNumber) -> DomainResult<()>;
}

#[async_trait]
pub trait CompanyArticleReadRepository: Send + Sync {
    async fn list(&self) -> DomainResult<Vec<CompanyArticle>>;
    async fn find_by_number(&self, number: ArticleNumber) -> DomainResult<Option<CompanyArticle>>;
    async fn find_by_name(&self, name: &ArticleName) -> DomainResult<Option<CompanyArticle>>;
    async fn find_by_link(&self, link: &ArticleLink) -> DomainResult<Option<CompanyArticle>>;
    async fn find_by_date(&self, date: NaiveDate) -> DomainResult<Vec<CompanyArticle>>;
    async fn find_by_date_range(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> DomainResult<Vec<CompanyArticle>>;
}
