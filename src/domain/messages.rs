// src/domain/messages.rs
//! Message keys for business-rule rejections. The view layer resolves them
//! to localized text.

pub const EXIST_ARTICLE_NAME: &str = "Exist.article.name";
pub const EXIST_ARTICLE_LINK: &str = "Exist.article.link";
pub const NOT_FOUND_ARTICLE: &str = "NotFound.article";
pub const NOT_FOUND_ARTICLE_NAME: &str = "NotFound.article.name";
pub const NOT_FOUND_ARTICLE_LINK: &str = "NotFound.article.link";
pub const NOT_FOUND_ARTICLE_COMPANY: &str = "NotFound.article.subjectCompany";
pub const RANGE_ARTICLE_PERIOD: &str = "Range.article.period";
pub const RANGE_ARTICLE_IMPORTANCE: &str = "Range.article.importance";

pub const EXIST_COMPANY_CODE: &str = "Exist.company.code";
pub const EXIST_COMPANY_NAME: &str = "Exist.company.name";
pub const NOT_FOUND_COMPANY: &str = "NotFound.company";

pub const EXIST_MEMBER_ID: &str = "Exist.member.id";
