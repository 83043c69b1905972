use crate::domain::enumeration::labeled_enum;
use crate::domain::errors::{DomainError, DomainResult};
use chrono::{Datelike, NaiveDate};
use std::fmt;

/// Earliest year an article may be dated.
pub const MIN_ENTRY_YEAR: i32 = 1990;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ArticleNumber(pub i64);

impl ArticleNumber {
    pub fn new(number: i64) -> DomainResult<Self> {
        if number <= 0 {
            Err(DomainError::Validation(
                "article number must be positive".into(),
            ))
        } else {
            Ok(Self(number))
        }
    }
}

impl From<ArticleNumber> for i64 {
    fn from(value: ArticleNumber) -> Self {
        value.0
    }
}

impl fmt::Display for ArticleNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ArticleName(String);

impl ArticleName {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(DomainError::Validation("article name cannot be empty".into()));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ArticleName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<ArticleName> for String {
    fn from(value: ArticleName) -> Self {
        value.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ArticleLink(String);

impl ArticleLink {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if !is_web_link(&value) {
            return Err(DomainError::Validation(
                "article link must be an absolute http(s) URL".into(),
            ));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ArticleLink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<ArticleLink> for String {
    fn from(value: ArticleLink) -> Self {
        value.0
    }
}

/// Absolute `http`/`https` URL with a non-empty host and no whitespace.
pub fn is_web_link(value: &str) -> bool {
    if value.chars().any(char::is_whitespace) {
        return false;
    }
    let lower = value.to_ascii_lowercase();
    let rest = if let Some(rest) = lower.strip_prefix("https://") {
        rest
    } else if let Some(rest) = lower.strip_prefix("http://") {
        rest
    } else {
        return false;
    };
    let authority = rest.split(['/', '?', '#']).next().unwrap_or_default();
    let host = authority.rsplit('@').next().unwrap_or_default();
    let host = host.split(':').next().unwrap_or_default();
    !host.is_empty()
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Importance(u8);

impl Importance {
    pub const LEVELS: [i32; 3] = [0, 1, 2];

    pub fn new(level: i32) -> DomainResult<Self> {
        if Self::LEVELS.contains(&level) {
            Ok(Self(level as u8))
        } else {
            Err(DomainError::Validation(format!(
                "importance must be one of {:?}",
                Self::LEVELS
            )))
        }
    }

    pub fn level(&self) -> i32 {
        i32::from(self.0)
    }
}

labeled_enum! {
    pub enum Press("press") {
        MaeilBusiness => ("MAEIL_BUSINESS", "매일경제"),
        KoreaEconomic => ("KOREA_ECONOMIC", "한국경제"),
        SeoulEconomic => ("SEOUL_ECONOMIC", "서울경제"),
        Edaily => ("EDAILY", "이데일리"),
        Yonhap => ("YONHAP", "연합뉴스"),
        ChosunBiz => ("CHOSUN_BIZ", "조선비즈"),
        MoneyToday => ("MONEY_TODAY", "머니투데이"),
        HeraldEconomy => ("HERALD_ECONOMY", "헤럴드경제"),
        Newspim => ("NEWSPIM", "뉴스핌"),
        ElectronicTimes => ("ELECTRONIC_TIMES", "전자신문"),
    }
}

/// Calendar date from a `(year, month, day)` triple, `None` when no such day
/// exists.
pub fn calendar_date(year: i32, month: i32, days: i32) -> Option<NaiveDate> {
    let month = u32::try_from(month).ok()?;
    let days = u32::try_from(days).ok()?;
    NaiveDate::from_ymd_opt(year, month, days)
}

/// Whether `date` falls inside the accepted entry window ending at `today`.
pub fn is_entry_date_in_range(date: NaiveDate, today: NaiveDate) -> bool {
    date.year() >= MIN_ENTRY_YEAR && date <= today
}
