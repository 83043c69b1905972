use super::CompanyQueryService;
use crate::{
    application::{dto::CompanyView, error::ApplicationResult},
    domain::company::{CompanyCode, CompanyName},
};

impl CompanyQueryService {
    pub async fn list_companies(&self) -> ApplicationResult<Vec<CompanyView>> {
        let companies = self.repo.list().await?;
        Ok(companies.into_iter().map(Into::into).collect())
    }

    pub async fn find_by_code(&self, code: &str) -> ApplicationResult<Option<CompanyView>> {
        let Ok(code) = CompanyCode::new(code.trim()) else {
            return Ok(None);
        };
        Ok(self.repo.find_by_code(&code).await?.map(Into::into))
    }

    pub async fn find_by_name(&self, name: &str) -> ApplicationResult<Option<CompanyView>> {
        let Ok(name) = CompanyName::new(name.trim()) else {
            return Ok(None);
        };
        Ok(self.repo.find_by_name(&name).await?.map(Into::into))
    }

    /// An all-digit input is looked up as a code, anything else as a name.
    /// Digit strings that are not six long find nothing.
    pub async fn find_by_name_or_code(
        &self,
        name_or_code: &str,
    ) -> ApplicationResult<Option<CompanyView>> {
        let trimmed = name_or_code.trim();
        tracing::debug!(key = trimmed, "looking up company");
        if !trimmed.is_empty() && trimmed.bytes().all(|b| b.is_ascii_digit()) {
            self.find_by_code(trimmed).await
        } else {
            self.find_by_name(trimmed).await
        }
    }
}
