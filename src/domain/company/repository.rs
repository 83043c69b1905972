use crate::domain::company::entity::Company;
use crate::domain::company::value_objects::{CompanyCode, CompanyName};
use crate::domain::errors::DomainResult;
use async_trait::async_trait;

#[async_trait]
pub trait CompanyRepository: Send + Sync {
    async fn list(&self) -> DomainResult<Vec<Company>>;
    async fn find_by_code(&self, code: &CompanyCode) -> DomainResult<Option<Company>>;
    async fn find_by_name(&self, name: &CompanyName) -> DomainResult<Option<Company>>;
    async fn insert(&self, company: Company) -> DomainResult<Company>;
    async fn delete_by_code(&self, code: &CompanyCode) -> DomainResult<()>;
}
