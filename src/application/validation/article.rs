// src/application/validation/article.rs
use super::{FieldErrors, Rule, ValidationContext, check, not_blank, run_rules};
use crate::application::dto::CompanyArticleDto;
use crate::domain::article::{
    Importance, Press,
    value_objects::{calendar_date, is_entry_date_in_range, is_web_link},
};

type ArticleRule = Rule<CompanyArticleDto>;

pub const RULES: &[ArticleRule] = &[
    ArticleRule::new("name", |dto, _| check(not_blank(&dto.name), "NotBlank.article.name")),
    ArticleRule::new("press", |dto, _| check(not_blank(&dto.press), "NotBlank.article.press")),
    ArticleRule::new("press", |dto, _| {
        check(dto.press.parse::<Press>().is_ok(), "typeMismatch.enum.article.press")
    }),
    ArticleRule::new("subjectCompany", |dto, _| {
        check(not_blank(&dto.subject_company), "NotBlank.article.subjectCompany")
    }),
    ArticleRule::new("link", |dto, _| check(not_blank(&dto.link), "NotBlank.article.link")),
    ArticleRule::new("link", |dto, _| check(is_web_link(dto.link.trim()), "URL.article.link")),
    ArticleRule::new("date", |dto, _| {
        check(
            calendar_date(dto.year, dto.month, dto.days).is_some(),
            "typeMismatch.article.date",
        )
    }),
    ArticleRule::new("date", |dto, ctx| {
        let in_range = calendar_date(dto.year, dto.month, dto.days)
            .is_some_and(|date| is_entry_date_in_range(date, ctx.today));
        check(in_range, "Range.article.date")
    }),
    ArticleRule::new("importance", |dto, _| {
        check(Importance::new(dto.importance).is_ok(), "Range.article.importance")
    }),
];

pub fn validate(dto: &CompanyArticleDto, ctx: &ValidationContext) -> Result<(), FieldErrors> {
    run_rules(RULES, dto, ctx).into_result()
}
