// src/application/commands/companies/remove.rs
use super::CompanyCommandService;
use crate::{
    application::{
        error::{ApplicationError, ApplicationResult},
        messages,
    },
    domain::company::CompanyCode,
};

impl CompanyCommandService {
    /// Deletes the company with `code` and returns its name.
    pub async fn remove_company(&self, code: &str) -> ApplicationResult<String> {
        let not_found = || ApplicationError::not_found(messages::NOT_FOUND_COMPANY);
        let code = CompanyCode::new(code.trim()).map_err(|_| not_found())?;
        let company = self.repo.find_by_code(&code).await?.ok_or_else(not_found)?;

        self.repo.delete_by_code(&code).await?;
        tracing::info!(code = %code, name = %company.name, "company removed");
        Ok(company.name.into())
    }
}
