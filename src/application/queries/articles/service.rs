use std::sync::Arc;

use crate::domain::article::CompanyArticleReadRepository;

pub struct ArticleQueryService {
    pub(super) read_repo: Arc<dyn CompanyArticleReadRepository>,
}

impl ArticleQueryService {
    pub fn new(read_repo: Arc<dyn CompanyArticleReadRepository>) -> Self {
        Self { read_repo }
    }
}
