// src/infrastructure/repositories/postgres_article.rs
use super::map_sqlx;
use crate::domain::messages;
use crate::domain::article::{
    ArticleLink, ArticleName, ArticleNumber, CompanyArticle, CompanyArticleReadRepository,
    CompanyArticleUpdate, CompanyArticleWriteRepository, Importance, NewCompanyArticle,
};
use crate::domain::company::CompanyName;
use crate::domain::errors::{DomainError, DomainResult};
use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::{FromRow, PgPool, Postgres, QueryBuilder};

const ARTICLE_COLUMNS: &str = "number, name, press, subjectcompany, link, date, importance";

#[derive(Clone)]
pub struct PostgresCompanyArticleWriteRepository {
    pool: PgPool,
}

impl PostgresCompanyArticleWriteRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Clone)]
pub struct PostgresCompanyArticleReadRepository {
    pool: PgPool,
}

impl PostgresCompanyArticleReadRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct CompanyArticleRow {
    number: i64,
    name: String,
    press: String,
    #[sqlx(rename = "subjectcompany")]
    subject_company: String,
    link: String,
    date: NaiveDate,
    importance: i16,
}

impl TryFrom<CompanyArticleRow> for CompanyArticle {
    type Error = DomainError;

    fn try_from(row: CompanyArticleRow) -> Result<Self, Self::Error> {
        Ok(CompanyArticle {
            number: ArticleNumber::new(row.number)?,
            name: ArticleName::new(row.name)?,
            press: row.press.parse()?,
            subject_company: CompanyName::new(row.subject_company)?,
            link: ArticleLink::new(row.link)?,
            date: row.date,
            importance: Importance::new(i32::from(row.importance))?,
        })
    }
}

fn importance_column(importance: Importance) -> i16 {
    // levels are 0..=2
    importance.level() as i16
}

#[async_trait]
impl CompanyArticleWriteRepository for PostgresCompanyArticleWriteRepository {
    async fn insert(&self, article: NewCompanyArticle) -> DomainResult<CompanyArticle> {
        let sql = format!(
            "INSERT INTO company_article (name, press, subjectcompany, link, date, importance) \
             VALUES ($1, $2, $3, $4, $5, $6) RETURNING {ARTICLE_COLUMNS}"
        );
        let row = sqlx::query_as::<_, CompanyArticleRow>(&sql)
            .bind(article.name.as_str())
            .bind(article.press.as_str())
            .bind(article.subject_company.as_str())
            .bind(article.link.as_str())
            .bind(article.date)
            .bind(importance_column(article.importance))
            .fetch_one(&self.pool)
            .await
            .map_err(map_sqlx)?;

        CompanyArticle::try_from(row)
    }

    async fn insert_many(
        &self,
        articles: Vec<NewCompanyArticle>,
    ) -> DomainResult<Vec<CompanyArticle>> {
        if articles.is_empty() {
            return Ok(Vec::new());
        }

        let mut tx = self.pool.begin().await.map_err(map_sqlx)?;

        let mut builder: QueryBuilder<Postgres> = QueryBuilder::new(
            "INSERT INTO company_article (name, press, subjectcompany, link, date, importance) ",
        );
        builder.push_values(&articles, |mut row, article| {
            row.push_bind(article.name.as_str())
                .push_bind(article.press.as_str())
                .push_bind(article.subject_company.as_str())
                .push_bind(article.link.as_str())
                .push_bind(article.date)
                .push_bind(importance_column(article.importance));
        });
        builder.push(" RETURNING ");
        builder.push(ARTICLE_COLUMNS);

        let rows = builder
            .build_query_as::<CompanyArticleRow>()
            .fetch_all(&mut *tx)
            .await
            .map_err(map_sqlx)?;

        tx.commit().await.map_err(map_sqlx)?;

        let mut created = rows
            .into_iter()
            .map(CompanyArticle::try_from)
            .collect::<DomainResult<Vec<_>>>()?;
        created.sort_by_key(|article| article.number);
        Ok(created)
    }

    async fn update(&self, update: CompanyArticleUpdate) -> DomainResult<CompanyArticle> {
        let CompanyArticleUpdate {
            name,
            press,
            subject_company,
            link,
            date,
            importance,
        } = update;

        let sql = format!(
            "UPDATE company_article \
             SET press = $1, subjectcompany = $2, link = $3, date = $4, importance = $5 \
             WHERE name = $6 RETURNING {ARTICLE_COLUMNS}"
        );
        let row = sqlx::query_as::<_, CompanyArticleRow>(&sql)
            .bind(press.as_str())
            .bind(subject_company.as_str())
            .bind(link.as_str())
            .bind(date)
            .bind(importance_column(importance))
            .bind(name.as_str())
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?
            .ok_or_else(|| DomainError::NotFound(messages::NOT_FOUND_ARTICLE_NAME.into()))?;

        CompanyArticle::try_from(row)
    }

    async fn delete_by_name(&self, name: &ArticleName) -> DomainResult<()> {
        let result = sqlx::query("DELETE FROM company_article WHERE name = $1")
            .bind(name.as_str())
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;
        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound(messages::NOT_FOUND_ARTICLE.into()));
        }
        Ok(())
    }

    async fn delete_by_number(&self, number: ArticleNumber) -> DomainResult<()> {
        let result = sqlx::query("DELETE FROM company_article WHERE number = $1")
            .bind(i64::from(number))
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;
        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound(messages::NOT_FOUND_ARTICLE.into()));
        }
        Ok(())
    }
}

impl PostgresCompanyArticleReadRepository {
    async fn fetch_optional(
        &self,
        mut builder: QueryBuilder<'_, Postgres>,
    ) -> DomainResult<Option<CompanyArticle>> {
        let row = builder
            .build_query_as::<CompanyArticleRow>()
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?;
        row.map(CompanyArticle::try_from).transpose()
    }

    async fn fetch_all(
        &self,
        mut builder: QueryBuilder<'_, Postgres>,
    ) -> DomainResult<Vec<CompanyArticle>> {
        builder.push(" ORDER BY date, number");
        let rows = builder
            .build_query_as::<CompanyArticleRow>()
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx)?;
        rows.into_iter().map(CompanyArticle::try_from).collect()
    }

    fn select() -> QueryBuilder<'static, Postgres> {
        let mut builder = QueryBuilder::new("SELECT ");
        builder.push(ARTICLE_COLUMNS);
        builder.push(" FROM company_article");
        builder
    }
}

#[async_trait]
impl CompanyArticleReadRepository for PostgresCompanyArticleReadRepository {
    async fn list(&self) -> DomainResult<Vec<CompanyArticle>> {
        let mut builder = Self::select();
        builder.push(" ORDER BY number");
        let rows = builder
            .build_query_as::<CompanyArticleRow>()
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx)?;
        rows.into_iter().map(CompanyArticle::try_from).collect()
    }

    async fn find_by_number(&self, number: ArticleNumber) -> DomainResult<Option<CompanyArticle>> {
        let mut builder = Self::select();
        builder.push(" WHERE number = ").push_bind(i64::from(number));
        self.fetch_optional(builder).await
    }

    async fn find_by_name(&self, name: &ArticleName) -> DomainResult<Option<CompanyArticle>> {
        let mut builder = Self::select();
        builder
            .push(" WHERE name = ")
            .push_bind(name.as_str().to_string());
        self.fetch_optional(builder).await
    }

    async fn find_by_link(&self, link: &ArticleLink) -> DomainResult<Option<CompanyArticle>> {
        let mut builder = Self::select();
        builder
            .push(" WHERE link = ")
            .push_bind(link.as_str().to_string());
        self.fetch_optional(builder).await
    }

    async fn find_by_date(&self, date: NaiveDate) -> DomainResult<Vec<CompanyArticle>> {
        let mut builder = Self::select();
        builder.push(" WHERE date = ").push_bind(date);
        self.fetch_all(builder).await
    }

    async fn find_by_date_range(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> DomainResult<Vec<CompanyArticle>> {
        let mut builder = Self::select();
        builder
            .push(" WHERE date BETWEEN ")
            .push_bind(start)
            .push(" AND ")
            .push_bind(end);
        self.fetch_all(builder).await
    }
}
