// src/domain/company/entity.rs
use crate::domain::company::value_objects::{
    CompanyCode, CompanyName, Country, FirstCategory, Scale, SecondCategories,
};
use crate::domain::errors::{DomainError, DomainResult};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Company {
    pub code: CompanyCode,
    pub country: Country,
    pub scale: Scale,
    pub name: CompanyName,
    pub category_1st: FirstCategory,
    pub category_2nd: SecondCategories,
}

impl Company {
    pub fn builder() -> CompanyBuilder {
        CompanyBuilder::default()
    }
}

#[derive(Debug, Default, Clone)]
pub struct CompanyBuilder {
    code: Option<CompanyCode>,
    country: Option<Country>,
    scale: Option<Scale>,
    name: Option<CompanyName>,
    category_1st: Option<FirstCategory>,
    category_2nd: Option<SecondCategories>,
}

impl CompanyBuilder {
    /// Starts from an existing company so individual fields can be replaced.
    pub fn company(mut self, company: &Company) -> Self {
        self.code = Some(company.code.clone());
        self.country = Some(company.country);
        self.scale = Some(company.scale);
        self.name = Some(company.name.clone());
        self.category_1st = Some(company.category_1st);
        self.category_2nd = Some(company.category_2nd.clone());
        self
    }

    pub fn code(mut self, code: CompanyCode) -> Self {
        self.code = Some(code);
        self
    }

    pub fn country(mut self, country: Country) -> Self {
        self.country = Some(country);
        self
    }

    pub fn scale(mut self, scale: Scale) -> Self {
        self.scale = Some(scale);
        self
    }

    pub fn name(mut self, name: CompanyName) -> Self {
        self.name = Some(name);
        self
    }

    pub fn category_1st(mut self, category: FirstCategory) -> Self {
        self.category_1st = Some(category);
        self
    }

    pub fn category_2nd(mut self, categories: SecondCategories) -> Self {
        self.category_2nd = Some(categories);
        self
    }

    pub fn build(self) -> DomainResult<Company> {
        Ok(Company {
            code: self.code.ok_or_else(|| missing("code"))?,
            country: self.country.ok_or_else(|| missing("country"))?,
            scale: self.scale.ok_or_else(|| missing("scale"))?,
            name: self.name.ok_or_else(|| missing("name"))?,
            category_1st: self.category_1st.ok_or_else(|| missing("category1st"))?,
            category_2nd: self.category_2nd.ok_or_else(|| missing("category2nd"))?,
        })
    }
}

fn missing(field: &str) -> DomainError {
    DomainError::Validation(format!("company {field} is required"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::company::value_objects::SecondCategory;

    fn samsung() -> Company {
        Company::builder()
            .code(CompanyCode::new("005930").unwrap())
            .country(Country::Korea)
            .scale(Scale::Big)
            .name(CompanyName::new("삼성전자").unwrap())
            .category_1st(FirstCategory::Semiconductor)
            .category_2nd(
                SecondCategories::new(vec![SecondCategory::MemorySemiconductor]).unwrap(),
            )
            .build()
            .unwrap()
    }

    #[test]
    fn builder_copies_and_overrides() {
        let original = samsung();
        let renamed = Company::builder()
            .company(&original)
            .name(CompanyName::new("삼성전자우").unwrap())
            .build()
            .unwrap();
        assert_eq!(renamed.code, original.code);
        assert_eq!(renamed.name.as_str(), "삼성전자우");
    }

    #[test]
    fn builder_reports_missing_field() {
        let err = Company::builder().build().unwrap_err();
        assert!(matches!(err, DomainError::Validation(msg) if msg.contains("code")));
    }
}
