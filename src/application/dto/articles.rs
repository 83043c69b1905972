use crate::domain::article::{
    ArticleLink, ArticleName, CompanyArticle, Importance, NewCompanyArticle, Press,
    value_objects::calendar_date,
};
use crate::domain::company::CompanyName;
use crate::domain::errors::{DomainError, DomainResult};
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// Form-bound shape of a company article.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CompanyArticleDto {
    pub name: String,
    pub press: String,
    pub subject_company: String,
    pub link: String,
    pub year: i32,
    pub month: i32,
    pub days: i32,
    pub importance: i32,
}

impl CompanyArticleDto {
    pub fn date(&self) -> Option<NaiveDate> {
        calendar_date(self.year, self.month, self.days)
    }

    /// Converts an already validated form into the domain shape. Names and
    /// the link are stored trimmed, the same form every lookup uses.
    pub fn to_new_article(&self) -> DomainResult<NewCompanyArticle> {
        let date = self
            .date()
            .ok_or_else(|| DomainError::Validation("article date is not a calendar date".into()))?;
        CompanyArticle::builder()
            .name(ArticleName::new(self.name.trim())?)
            .press(self.press.parse::<Press>()?)
            .subject_company(CompanyName::new(self.subject_company.trim())?)
            .link(ArticleLink::new(self.link.trim())?)
            .date(date)
            .importance(Importance::new(self.importance)?)
            .build()
    }
}

impl From<&CompanyArticle> for CompanyArticleDto {
    fn from(article: &CompanyArticle) -> Self {
        Self {
            name: article.name.as_str().to_string(),
            press: article.press.as_str().to_string(),
            subject_company: article.subject_company.as_str().to_string(),
            link: article.link.as_str().to_string(),
            year: article.date.year(),
            month: article.date.month() as i32,
            days: article.date.day() as i32,
            importance: article.importance.level(),
        }
    }
}

impl From<&CompanyArticleView> for CompanyArticleDto {
    fn from(view: &CompanyArticleView) -> Self {
        Self {
            name: view.name.clone(),
            press: view.press.clone(),
            subject_company: view.subject_company.clone(),
            link: view.link.clone(),
            year: view.date.year(),
            month: view.date.month() as i32,
            days: view.date.day() as i32,
            importance: view.importance,
        }
    }
}

/// Stored article as it is handed to list and detail views.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanyArticleView {
    pub number: i64,
    pub name: String,
    pub press: String,
    pub press_label: String,
    pub subject_company: String,
    pub link: String,
    pub date: NaiveDate,
    pub importance: i32,
}

impl From<CompanyArticle> for CompanyArticleView {
    fn from(article: CompanyArticle) -> Self {
        Self {
            number: article.number.into(),
            press: article.press.as_str().to_string(),
            press_label: article.press.label().to_string(),
            name: article.name.into(),
            subject_company: article.subject_company.into(),
            link: article.link.into(),
            date: article.date,
            importance: article.importance.level(),
        }
    }
}

/// Three aligned text blocks submitted by the string-batch form.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ArticleBatchDto {
    pub name_date_press_string: String,
    pub subject_company: String,
    pub link_string: String,
}
