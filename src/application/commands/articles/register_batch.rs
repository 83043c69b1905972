// src/application/commands/articles/register_batch.rs
use std::collections::HashSet;

use super::ArticleCommandService;
use crate::{
    application::{
        dto::{ArticleBatchDto, CompanyArticleDto, CompanyArticleView},
        error::{ApplicationError, ApplicationResult},
        messages,
    },
    domain::{article::batch::parse_article_entries, company::CompanyName},
};

impl ArticleCommandService {
    /// Registers every article described by the text blocks, or none.
    ///
    /// Entries are checked in order and the first failure aborts the batch
    /// before anything is written.
    pub async fn register_articles_from_text(
        &self,
        batch: &ArticleBatchDto,
    ) -> ApplicationResult<Vec<CompanyArticleView>> {
        let entries = parse_article_entries(&batch.name_date_press_string, &batch.link_string)?;

        let dtos: Vec<CompanyArticleDto> = entries
            .into_iter()
            .map(|entry| CompanyArticleDto {
                name: entry.name,
                press: entry.press,
                subject_company: batch.subject_company.trim().to_string(),
                link: entry.link,
                year: entry.year,
                month: entry.month,
                days: entry.days,
                importance: 0,
            })
            .collect();

        for dto in &dtos {
            self.validate(dto)?;
        }

        let subject_company = CompanyName::new(batch.subject_company.trim())?;
        self.ensure_company_exists(&subject_company).await?;

        let mut names = HashSet::new();
        let mut links = HashSet::new();
        let mut articles = Vec::with_capacity(dtos.len());
        for dto in &dtos {
            let article = dto.to_new_article()?;
            if !names.insert(article.name.clone())
                || self.read_repo.find_by_name(&article.name).await?.is_some()
            {
                return Err(ApplicationError::conflict(messages::EXIST_ARTICLE_NAME));
            }
            if !links.insert(article.link.clone())
                || self.read_repo.find_by_link(&article.link).await?.is_some()
            {
                return Err(ApplicationError::conflict(messages::EXIST_ARTICLE_LINK));
            }
            articles.push(article);
        }

        let created = self.write_repo.insert_many(articles).await?;
        tracing::info!(
            count = created.len(),
            company = %subject_company,
            "articles registered from text"
        );
        Ok(created.into_iter().map(CompanyArticleView::from).collect())
    }
}
