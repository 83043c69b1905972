mod by_date;
mod find;
mod service;

pub use by_date::ArticlesByDateQuery;
pub use service::ArticleQueryService;
