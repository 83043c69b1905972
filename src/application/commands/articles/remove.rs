// src/application/commands/articles/remove.rs
use super::ArticleCommandService;
use crate::{
    application::{
        error::{ApplicationError, ApplicationResult},
        messages,
    },
    domain::article::{ArticleName, ArticleNumber},
};

/// Identifies the article to remove by its number or its name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RemoveArticleCommand {
    Number(i64),
    Name(String),
}

impl RemoveArticleCommand {
    /// An all-digit input is read as a number, anything else as a name.
    pub fn parse(number_or_name: &str) -> Self {
        let trimmed = number_or_name.trim();
        if !trimmed.is_empty()
            && trimmed.bytes().all(|b| b.is_ascii_digit())
            && let Ok(number) = trimmed.parse::<i64>()
        {
            return Self::Number(number);
        }
        Self::Name(trimmed.to_string())
    }
}

impl ArticleCommandService {
    /// Deletes the article and returns its name.
    pub async fn remove_article(&self, command: RemoveArticleCommand) -> ApplicationResult<String> {
        let not_found = || ApplicationError::not_found(messages::NOT_FOUND_ARTICLE);

        let article = match &command {
            RemoveArticleCommand::Number(number) => {
                let number = ArticleNumber::new(*number).map_err(|_| not_found())?;
                self.read_repo.find_by_number(number).await?
            }
            RemoveArticleCommand::Name(name) => {
                let name = ArticleName::new(name.as_str()).map_err(|_| not_found())?;
                self.read_repo.find_by_name(&name).await?
            }
        }
        .ok_or_else(not_found)?;

        match command {
            RemoveArticleCommand::Number(_) => self.write_repo.delete_by_number(article.number).await?,
            RemoveArticleCommand::Name(_) => self.write_repo.delete_by_name(&article.name).await?,
        }
        tracing::info!(number = %article.number, name = %article.name, "article removed");
        Ok(article.name.into())
    }
}
