// src/domain/article/entity.rs
use crate::domain::article::value_objects::{
    ArticleLink, ArticleName, ArticleNumber, Importance, Press,
};
use crate::domain::company::CompanyName;
use crate::domain::errors::{DomainError, DomainResult};
use chrono::NaiveDate;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompanyArticle {
    pub number: ArticleNumber,
    pub name: ArticleName,
    pub press: Press,
    pub subject_company: CompanyName,
    pub link: ArticleLink,
    pub date: NaiveDate,
    pub importance: Importance,
}

impl CompanyArticle {
    pub fn builder() -> CompanyArticleBuilder {
        CompanyArticleBuilder::default()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCompanyArticle {
    pub name: ArticleName,
    pub press: Press,
    pub subject_company: CompanyName,
    pub link: ArticleLink,
    pub date: NaiveDate,
    pub importance: Importance,
}

impl NewCompanyArticle {
    pub fn with_number(self, number: ArticleNumber) -> CompanyArticle {
        CompanyArticle {
            number,
            name: self.name,
            press: self.press,
            subject_company: self.subject_company,
            link: self.link,
            date: self.date,
            importance: self.importance,
        }
    }
}

/// Positional update keyed by the article name; every other column is
/// overwritten.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompanyArticleUpdate {
    pub name: ArticleName,
    pub press: Press,
    pub subject_company: CompanyName,
    pub link: ArticleLink,
    pub date: NaiveDate,
    pub importance: Importance,
}

impl From<NewCompanyArticle> for CompanyArticleUpdate {
    fn from(article: NewCompanyArticle) -> Self {
        Self {
            name: article.name,
            press: article.press,
            subject_company: article.subject_company,
            link: article.link,
            date: article.date,
            importance: article.importance,
        }
    }
}

#[derive(Debug, Default, Clone)]
pub struct CompanyArticleBuilder {
    name: Option<ArticleName>,
    press: Option<Press>,
    subject_company: Option<CompanyName>,
    link: Option<ArticleLink>,
    date: Option<NaiveDate>,
    importance: Option<Importance>,
}

impl CompanyArticleBuilder {
    /// Starts from a stored article; the number is dropped.
    pub fn article(mut self, article: &CompanyArticle) -> Self {
        self.name = Some(article.name.clone());
        self.press = Some(article.press);
        self.subject_company = Some(article.subject_company.clone());
        self.link = Some(article.link.clone());
        self.date = Some(article.date);
        self.importance = Some(article.importance);
        self
    }

    pub fn name(mut self, name: ArticleName) -> Self {
        self.name = Some(name);
        self
    }

    pub fn press(mut self, press: Press) -> Self {
        self.press = Some(press);
        self
    }

    pub fn subject_company(mut self, company: CompanyName) -> Self {
        self.subject_company = Some(company);
        self
    }

    pub fn link(mut self, link: ArticleLink) -> Self {
        self.link = Some(link);
        self
    }

    pub fn date(mut self, date: NaiveDate) -> Self {
        self.date = Some(date);
        self
    }

    pub fn importance(mut self, importance: Importance) -> Self {
        self.importance = Some(importance);
        self
    }

    pub fn build(self) -> DomainResult<NewCompanyArticle> {
        Ok(NewCompanyArticle {
            name: self.name.ok_or_else(|| missing("name"))?,
            press: self.press.ok_or_else(|| missing("press"))?,
            subject_company: self.subject_company.ok_or_else(|| missing("subjectCompany"))?,
            link: self.link.ok_or_else(|| missing("link"))?,
            date: self.date.ok_or_else(|| missing("date"))?,
            importance: self.importance.unwrap_or_default(),
        })
    }
}

fn missing(field: &str) -> DomainError {
    DomainError::Validation(format!("article {field} is required"))
}
