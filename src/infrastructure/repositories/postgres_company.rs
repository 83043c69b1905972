// src/infrastructure/repositories/postgres_company.rs
use super::map_sqlx;
use crate::domain::messages;
use crate::domain::company::{
    Company, CompanyCode, CompanyName, CompanyRepository, SecondCategories,
};
use crate::domain::errors::{DomainError, DomainResult};
use async_trait::async_trait;
use sqlx::{FromRow, PgPool};

const COMPANY_COLUMNS: &str = "code, country, scale, name, category1st, category2nd";

#[derive(Clone)]
pub struct PostgresCompanyRepository {
    pool: PgPool,
}

impl PostgresCompanyRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct CompanyRow {
    code: String,
    country: String,
    scale: String,
    name: String,
    category1st: String,
    category2nd: String,
}

impl TryFrom<CompanyRow> for Company {
    type Error = DomainError;

    fn try_from(row: CompanyRow) -> Result<Self, Self::Error> {
        Company::builder()
            .code(CompanyCode::new(row.code)?)
            .country(row.country.parse()?)
            .scale(row.scale.parse()?)
            .name(CompanyName::new(row.name)?)
            .category_1st(row.category1st.parse()?)
            .category_2nd(SecondCategories::from_json(&row.category2nd)?)
            .build()
    }
}

impl PostgresCompanyRepository {
    async fn fetch_one_by(&self, column: &str, value: &str) -> DomainResult<Option<Company>> {
        let sql = format!("SELECT {COMPANY_COLUMNS} FROM company WHERE {column} = $1");
        let row = sqlx::query_as::<_, CompanyRow>(&sql)
            .bind(value)
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?;
        row.map(Company::try_from).transpose()
    }
}

#[async_trait]
impl CompanyRepository for PostgresCompanyRepository {
    async fn list(&self) -> DomainResult<Vec<Company>> {
        let sql = format!("SELECT {COMPANY_COLUMNS} FROM company ORDER BY code");
        let rows = sqlx::query_as::<_, CompanyRow>(&sql)
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx)?;
        rows.into_iter().map(Company::try_from).collect()
    }

    async fn find_by_code(&self, code: &CompanyCode) -> DomainResult<Option<Company>> {
        self.fetch_one_by("code", code.as_str()).await
    }

    async fn find_by_name(&self, name: &CompanyName) -> DomainResult<Option<Company>> {
        self.fetch_one_by("name", name.as_str()).await
    }

    async fn insert(&self, company: Company) -> DomainResult<Company> {
        let sql = format!(
            "INSERT INTO company ({COMPANY_COLUMNS}) VALUES ($1, $2, $3, $4, $5, $6) \
             RETURNING {COMPANY_COLUMNS}"
        );
        let row = sqlx::query_as::<_, CompanyRow>(&sql)
            .bind(company.code.as_str())
            .bind(company.country.as_str())
            .bind(company.scale.as_str())
            .bind(company.name.as_str())
            .bind(company.category_1st.as_str())
            .bind(company.category_2nd.to_json())
            .fetch_one(&self.pool)
            .await
            .map_err(map_sqlx)?;

        Company::try_from(row)
    }

    async fn delete_by_code(&self, code: &CompanyCode) -> DomainResult<()> {
        let result = sqlx::query("DELETE FROM company WHERE code = $1")
            .bind(code.as_str())
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;
        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound(messages::NOT_FOUND_COMPANY.into()));
        }
        Ok(())
    }
}
