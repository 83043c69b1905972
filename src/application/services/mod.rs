// src/application/services/mod.rs
use std::sync::Arc;

use crate::{
    application::{
        commands::{
            articles::ArticleCommandService, companies::CompanyCommandService,
            members::MemberCommandService,
        },
        ports::{security::PasswordHasher, time::Clock},
        queries::{
            articles::ArticleQueryService, companies::CompanyQueryService,
            members::MemberQueryService,
        },
    },
    domain::{
        article::{CompanyArticleReadRepository, CompanyArticleWriteRepository},
        company::CompanyRepository,
        member::MemberRepository,
    },
};

pub struct ApplicationServices {
    pub article_commands: Arc<ArticleCommandService>,
    pub article_queries: Arc<ArticleQueryService>,
    pub company_commands: Arc<CompanyCommandService>,
    pub company_queries: Arc<CompanyQueryService>,
    pub member_commands: Arc<MemberCommandService>,
    pub member_queries: Arc<MemberQueryService>,
}

impl ApplicationServices {
    pub fn new(
        company_repo: Arc<dyn CompanyRepository>,
        article_write_repo: Arc<dyn CompanyArticleWriteRepository>,
        article_read_repo: Arc<dyn CompanyArticleReadRepository>,
        member_repo: Arc<dyn MemberRepository>,
        password_hasher: Arc<dyn PasswordHasher>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        let article_commands = Arc::new(ArticleCommandService::new(
            Arc::clone(&article_write_repo),
            Arc::clone(&article_read_repo),
            Arc::clone(&company_repo),
            Arc::clone(&clock),
        ));
        let article_queries = Arc::new(ArticleQueryService::new(Arc::clone(&article_read_repo)));

        let company_commands = Arc::new(CompanyCommandService::new(
            Arc::clone(&company_repo),
            Arc::clone(&clock),
        ));
        let company_queries = Arc::new(CompanyQueryService::new(Arc::clone(&company_repo)));

        let member_commands = Arc::new(MemberCommandService::new(
            Arc::clone(&member_repo),
            Arc::clone(&password_hasher),
            Arc::clone(&clock),
        ));
        let member_queries = Arc::new(MemberQueryService::new(Arc::clone(&member_repo)));

        Self {
            article_commands,
            article_queries,
            company_commands,
            company_queries,
            member_commands,
            member_queries,
        }
    }
}
