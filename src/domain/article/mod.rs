pub mod batch;
pub mod entity;
pub mod repository;
pub mod value_objects;

pub use entity::{CompanyArticle, CompanyArticleBuilder, CompanyArticleUpdate, NewCompanyArticle};
pub use repository::{CompanyArticleReadRepository, CompanyArticleWriteRepository};
pub use value_objects::{ArticleLink, ArticleName, ArticleNumber, Importance, Press};
