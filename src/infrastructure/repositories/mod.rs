// src/infrastructure/repositories/mod.rs
mod error;
mod postgres_article;
mod postgres_company;
mod postgres_member;

pub use error::map_sqlx;
pub use postgres_article::{
    PostgresCompanyArticleReadRepository, PostgresCompanyArticleWriteRepository,
};
pub use postgres_company::PostgresCompanyRepository;
pub use postgres_member::PostgresMemberRepository;
