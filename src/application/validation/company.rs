// src/application/validation/company.rs
use super::{FieldErrors, Rule, ValidationContext, check, not_blank, run_rules};
use crate::application::dto::CompanyDto;
use crate::domain::company::{
    Country, FirstCategory, Scale, SecondCategory, value_objects::is_company_code,
    value_objects::second_category_values,
};

type CompanyRule = Rule<CompanyDto>;

pub const RULES: &[CompanyRule] = &[
    CompanyRule::new("code", |dto, _| check(is_company_code(dto.code.trim()), "Pattern.company.code")),
    CompanyRule::new("country", |dto, _| {
        check(dto.country.parse::<Country>().is_ok(), "typeMismatch.enum.company.country")
    }),
    CompanyRule::new("scale", |dto, _| {
        check(dto.scale.parse::<Scale>().is_ok(), "typeMismatch.enum.company.scale")
    }),
    CompanyRule::new("name", |dto, _| check(not_blank(&dto.name), "NotBlank.company.name")),
    CompanyRule::new("firstCategory", |dto, _| {
        check(
            dto.first_category.parse::<FirstCategory>().is_ok(),
            "typeMismatch.enum.company.firstCategory",
        )
    }),
    CompanyRule::new("secondCategory", |dto, _| {
        check(
            !second_category_values(&dto.second_category).is_empty(),
            "NotBlank.company.secondCategory",
        )
    }),
    CompanyRule::new("secondCategory", |dto, _| {
        let all_known = second_category_values(&dto.second_category)
            .iter()
            .all(|value| value.parse::<SecondCategory>().is_ok());
        check(all_known, "typeMismatch.enum.company.secondCategory")
    }),
];

pub fn validate(dto: &CompanyDto, ctx: &ValidationContext) -> Result<(), FieldErrors> {
    run_rules(RULES, dto, ctx).into_result()
}
