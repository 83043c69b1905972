// src/domain/article/batch.rs
//! Parser for string-batch registration.
//!
//! `name_date_press` carries two lines per article: the article name, then
//! `(<press>, <YYYY>-<M>-<D>)`. `links` carries one link per line in the same
//! order. Blank lines are ignored in both blocks. Fields come back unvalidated
//! so that the regular article rules decide what is acceptable.

use crate::domain::errors::{DomainError, DomainResult};

pub const EMPTY_BATCH: &str = "NotBlank.article.string";
pub const MALFORMED_LINE: &str = "Pattern.article.nameDatePress";
pub const COUNT_MISMATCH: &str = "Mismatch.article.count";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleEntry {
    pub name: String,
    pub press: String,
    pub year: i32,
    pub month: i32,
    pub days: i32,
    pub link: String,
}

pub fn parse_article_entries(name_date_press: &str, links: &str) -> DomainResult<Vec<ArticleEntry>> {
    let lines: Vec<&str> = non_blank_lines(name_date_press).collect();
    let links: Vec<&str> = non_blank_lines(links).collect();

    if lines.is_empty() {
        return Err(DomainError::Validation(EMPTY_BATCH.into()));
    }
    if lines.len() % 2 != 0 || lines.len() / 2 != links.len() {
        return Err(DomainError::Validation(COUNT_MISMATCH.into()));
    }

    lines
        .chunks_exact(2)
        .zip(links)
        .map(|(pair, link)| {
            let (press, (year, month, days)) = parse_press_date(pair[1])?;
            Ok(ArticleEntry {
                name: pair[0].to_string(),
                press,
                year,
                month,
                days,
                link: link.to_string(),
            })
        })
        .collect()
}

fn non_blank_lines(block: &str) -> impl Iterator<Item = &str> {
    block.lines().map(str::trim).filter(|line| !line.is_empty())
}

fn parse_press_date(line: &str) -> DomainResult<(String, (i32, i32, i32))> {
    let malformed = || DomainError::Validation(MALFORMED_LINE.into());

    let inner = line
        .strip_prefix('(')
        .and_then(|rest| rest.strip_suffix(')'))
        .ok_or_else(malformed)?;
    let (press, date) = inner.rsplit_once(',').ok_or_else(malformed)?;
    let press = press.trim();
    if press.is_empty() {
        return Err(malformed());
    }

    let mut parts = date.trim().split('-').map(|part| part.trim().parse::<i32>());
    let triple = match (parts.next(), parts.next(), parts.next(), parts.next()) {
        (Some(Ok(year)), Some(Ok(month)), Some(Ok(days)), None) => (year, month, days),
        _ => return Err(malformed()),
    };

    Ok((press.to_string(), triple))
}
