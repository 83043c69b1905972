// src/application/commands/companies/register.rs
use super::CompanyCommandService;
use crate::application::{
    dto::{CompanyDto, CompanyView},
    error::{ApplicationError, ApplicationResult},
    messages,
    validation::{self, ValidationContext},
};

impl CompanyCommandService {
    pub async fn register_company(&self, dto: &CompanyDto) -> ApplicationResult<CompanyView> {
        let ctx = ValidationContext::new(self.clock.today());
        validation::company::validate(dto, &ctx).map_err(ApplicationError::Invalid)?;
        let company = dto.to_company()?;

        if self.repo.find_by_code(&company.code).await?.is_some() {
            tracing::warn!(code = %company.code, "company code already registered");
            return Err(ApplicationError::conflict(messages::EXIST_COMPANY_CODE));
        }
        if self.repo.find_by_name(&company.name).await?.is_some() {
            tracing::warn!(name = %company.name, "company name already registered");
            return Err(ApplicationError::conflict(messages::EXIST_COMPANY_NAME));
        }

        let created = self.repo.insert(company).await?;
        tracing::info!(code = %created.code, name = %created.name, "company registered");
        Ok(created.into())
    }
}
