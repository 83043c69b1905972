// src/application/commands/articles/mod.rs
mod register;
mod register_batch;
mod remove;
mod service;
mod update;

pub use remove::RemoveArticleCommand;
pub use service::ArticleCommandService;
