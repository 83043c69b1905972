use crate::domain::company::{
    Company, CompanyCode, CompanyName, Country, FirstCategory, Scale, SecondCategories,
};
use crate::domain::errors::DomainResult;
use serde::{Deserialize, Serialize};

/// Form-bound shape of a company. `second_category` holds the raw JSON
/// document `{"secondCategory": [...]}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CompanyDto {
    pub code: String,
    pub country: String,
    pub scale: String,
    pub name: String,
    pub first_category: String,
    pub second_category: String,
}

impl CompanyDto {
    pub fn to_company(&self) -> DomainResult<Company> {
        Company::builder()
            .code(CompanyCode::new(self.code.trim())?)
            .country(self.country.parse::<Country>()?)
            .scale(self.scale.parse::<Scale>()?)
            .name(CompanyName::new(self.name.trim())?)
            .category_1st(self.first_category.parse::<FirstCategory>()?)
            .category_2nd(SecondCategories::from_json(&self.second_category)?)
            .build()
    }
}

impl From<&Company> for CompanyDto {
    fn from(company: &Company) -> Self {
        Self {
            code: company.code.as_str().to_string(),
            country: company.country.as_str().to_string(),
            scale: company.scale.as_str().to_string(),
            name: company.name.as_str().to_string(),
            first_category: company.category_1st.as_str().to_string(),
            second_category: company.category_2nd.to_json(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanyView {
    pub code: String,
    pub country: String,
    pub scale: String,
    pub name: String,
    pub first_category: String,
    pub second_category: Vec<String>,
}

impl From<Company> for CompanyView {
    fn from(company: Company) -> Self {
        Self {
            code: company.code.into(),
            country: company.country.as_str().to_string(),
            scale: company.scale.as_str().to_string(),
            name: company.name.into(),
            first_category: company.category_1st.as_str().to_string(),
            second_category: company
                .category_2nd
                .as_slice()
                .iter()
                .map(|category| category.as_str().to_string())
                .collect(),
        }
    }
}
