// tests/support/mocks/repos.rs
//! インメモリリポジトリ。UNIQUE 制約と同じ衝突を返す。
use std::collections::BTreeMap;
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::NaiveDate;
use corpnews::domain::messages;
use corpnews::domain::article::{
    ArticleLink, ArticleName, ArticleNumber, CompanyArticle, CompanyArticleReadRepository,
    CompanyArticleUpdate, CompanyArticleWriteRepository, NewCompanyArticle,
};
use corpnews::domain::company::{Company, CompanyCode, CompanyName, CompanyRepository};
use corpnews::domain::errors::{DomainError, DomainResult};
use corpnews::domain::member::{Member, MemberId, MemberIdentifier, MemberRepository, NewMember};

#[derive(Default)]
pub struct InMemoryCompanyRepo {
    inner: Mutex<BTreeMap<String, Company>>,
}

impl InMemoryCompanyRepo {
    pub fn with(companies: impl IntoIterator<Item = Company>) -> Self {
        let repo = Self::default();
        {
            let mut map = repo.inner.lock().unwrap();
            for company in companies {
                map.insert(company.code.as_str().to_string(), company);
            }
        }
        repo
    }

    pub fn snapshot(&self) -> Vec<Company> {
        self.inner.lock().unwrap().values().cloned().collect()
    }
}

#[async_trait]
impl CompanyRepository for InMemoryCompanyRepo {
    async fn list(&self) -> DomainResult<Vec<Company>> {
        Ok(self.snapshot())
    }

    async fn find_by_code(&self, code: &CompanyCode) -> DomainResult<Option<Company>> {
        Ok(self.inner.lock().unwrap().get(code.as_str()).cloned())
    }

    async fn find_by_name(&self, name: &CompanyName) -> DomainResult<Option<Company>> {
        let map = self.inner.lock().unwrap();
        Ok(map.values().find(|c| &c.name == name).cloned())
    }

    async fn insert(&self, company: Company) -> DomainResult<Company> {
        let mut map = self.inner.lock().unwrap();
        if map.contains_key(company.code.as_str()) {
            return Err(DomainError::Conflict(messages::EXIST_COMPANY_CODE.into()));
        }
        if map.values().any(|c| c.name == company.name) {
            return Err(DomainError::Conflict(messages::EXIST_COMPANY_NAME.into()));
        }
        map.insert(company.code.as_str().to_string(), company.clone());
        Ok(company)
    }

    async fn delete_by_code(&self, code: &CompanyCode) -> DomainResult<()> {
        match self.inner.lock().unwrap().remove(code.as_str()) {
            Some(_) => Ok(()),
            None => Err(DomainError::NotFound(messages::NOT_FOUND_COMPANY.into())),
        }
    }
}

#[derive(Default)]
struct ArticleTable {
    rows: BTreeMap<i64, CompanyArticle>,
    next_number: i64,
}

impl ArticleTable {
    fn check_unique(&self, name: &ArticleName, link: &ArticleLink, skip: Option<i64>) -> DomainResult<()> {
        let others = self.rows.values().filter(|a| Some(a.number.0) != skip);
        for article in others {
            if &article.name == name {
                return Err(DomainError::Conflict(messages::EXIST_ARTICLE_NAME.into()));
            }
            if &article.link == link {
                return Err(DomainError::Conflict(messages::EXIST_ARTICLE_LINK.into()));
            }
        }
        Ok(())
    }

    fn push(&mut self, article: NewCompanyArticle) -> DomainResult<CompanyArticle> {
        self.check_unique(&article.name, &article.link, None)?;
        self.next_number += 1;
        let stored = article.with_number(ArticleNumber::new(self.next_number)?);
        self.rows.insert(self.next_number, stored.clone());
        Ok(stored)
    }
}

#[derive(Default)]
pub struct InMemoryArticleRepo {
    inner: Mutex<ArticleTable>,
}

impl InMemoryArticleRepo {
    pub fn snapshot(&self) -> Vec<CompanyArticle> {
        self.inner.lock().unwrap().rows.values().cloned().collect()
    }

    pub fn names(&self) -> Vec<String> {
        self.snapshot()
            .into_iter()
            .map(|a| a.name.as_str().to_string())
            .collect()
    }
}

#[async_trait]
impl CompanyArticleWriteRepository for InMemoryArticleRepo {
    async fn insert(&self, article: NewCompanyArticle) -> DomainResult<CompanyArticle> {
        self.inner.lock().unwrap().push(article)
    }

    async fn insert_many(&self, articles: Vec<NewCompanyArticle>) -> DomainResult<Vec<CompanyArticle>> {
        let mut table = self.inner.lock().unwrap();
        let before = (table.rows.clone(), table.next_number);
        let mut created = Vec::with_capacity(articles.len());
        for article in articles {
            match table.push(article) {
                Ok(stored) => created.push(stored),
                Err(err) => {
                    (table.rows, table.next_number) = before;
                    return Err(err);
                }
            }
        }
        Ok(created)
    }

    async fn update(&self, update: CompanyArticleUpdate) -> DomainResult<CompanyArticle> {
        let mut table = self.inner.lock().unwrap();
        let number = table
            .rows
            .values()
            .find(|a| a.name == update.name)
            .map(|a| a.number)
            .ok_or_else(|| DomainError::NotFound(messages::NOT_FOUND_ARTICLE_NAME.into()))?;
        table.check_unique(&update.name, &update.link, Some(number.0))?;

        let updated = CompanyArticle {
            number,
            name: update.name,
            press: update.press,
            subject_company: update.subject_company,
            link: update.link,
            date: update.date,
            importance: update.importance,
        };
        table.rows.insert(number.0, updated.clone());
        Ok(updated)
    }

    async fn delete_by_name(&self, name: &ArticleName) -> DomainResult<()> {
        let mut table = self.inner.lock().unwrap();
        let before = table.rows.len();
        table.rows.retain(|_, a| &a.name != name);
        if table.rows.len() == before {
            return Err(DomainError::NotFound(messages::NOT_FOUND_ARTICLE.into()));
        }
        Ok(())
    }

    async fn delete_by_number(&self, number: ArticleNumber) -> DomainResult<()> {
        match self.inner.lock().unwrap().rows.remove(&number.0) {
            Some(_) => Ok(()),
            None => Err(DomainError::NotFound(messages::NOT_FOUND_ARTICLE.into())),
        }
    }
}

#[async_trait]
impl CompanyArticleReadRepository for InMemoryArticleRepo {
    async fn list(&self) -> DomainResult<Vec<CompanyArticle>> {
        Ok(self.snapshot())
    }

    async fn find_by_number(&self, number: ArticleNumber) -> DomainResult<Option<CompanyArticle>> {
        Ok(self.inner.lock().unwrap().rows.get(&number.0).cloned())
    }

    async fn find_by_name(&self, name: &ArticleName) -> DomainResult<Option<CompanyArticle>> {
        Ok(self.snapshot().into_iter().find(|a| &a.name == name))
    }

    async fn find_by_link(&self, link: &ArticleLink) -> DomainResult<Option<CompanyArticle>> {
        Ok(self.snapshot().into_iter().find(|a| &a.link == link))
    }

    async fn find_by_date(&self, date: NaiveDate) -> DomainResult<Vec<CompanyArticle>> {
        Ok(self.snapshot().into_iter().filter(|a| a.date == date).collect())
    }

    async fn find_by_date_range(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> DomainResult<Vec<CompanyArticle>> {
        let mut found: Vec<_> = self
            .snapshot()
            .into_iter()
            .filter(|a| a.date >= start && a.date <= end)
            .collect();
        found.sort_by_key(|a| (a.date, a.number));
        Ok(found)
    }
}

#[derive(Default)]
pub struct InMemoryMemberRepo {
    inner: Mutex<Vec<Member>>,
}

impl InMemoryMemberRepo {
    pub fn snapshot(&self) -> Vec<Member> {
        self.inner.lock().unwrap().clone()
    }
}

#[async_trait]
impl MemberRepository for InMemoryMemberRepo {
    async fn list(&self) -> DomainResult<Vec<Member>> {
        Ok(self.snapshot())
    }

    async fn find_by_id(&self, id: &MemberId) -> DomainResult<Option<Member>> {
        Ok(self.snapshot().into_iter().find(|m| &m.id == id))
    }

    async fn insert(&self, member: NewMember) -> DomainResult<Member> {
        let mut members = self.inner.lock().unwrap();
        if members.iter().any(|m| m.id == member.id) {
            return Err(DomainError::Conflict(messages::EXIST_MEMBER_ID.into()));
        }
        let identifier = MemberIdentifier::new(members.len() as i64 + 1)?;
        let stored = member.with_identifier(identifier);
        members.push(stored.clone());
        Ok(stored)
    }
}
