// src/infrastructure/repositories/postgres_member.rs
use super::map_sqlx;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::member::{
    Member, MemberId, MemberIdentifier, MemberRepository, NewMember, PasswordHash,
};
use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::{FromRow, PgPool};

const MEMBER_COLUMNS: &str = "identifier, id, password, name, birth, phonenumber";

#[derive(Clone)]
pub struct PostgresMemberRepository {
    pool: PgPool,
}

impl PostgresMemberRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct MemberRow {
    identifier: i64,
    id: String,
    password: String,
    name: String,
    birth: NaiveDate,
    #[sqlx(rename = "phonenumber")]
    phone_number: String,
}

impl TryFrom<MemberRow> for Member {
    type Error = DomainError;

    fn try_from(row: MemberRow) -> Result<Self, Self::Error> {
        Ok(Member {
            identifier: MemberIdentifier::new(row.identifier)?,
            id: MemberId::new(row.id)?,
            password: PasswordHash::new(row.password)?,
            name: row.name,
            birth: row.birth,
            phone_number: row.phone_number.parse()?,
        })
    }
}

#[async_trait]
impl MemberRepository for PostgresMemberRepository {
    async fn list(&self) -> DomainResult<Vec<Member>> {
        let sql = format!("SELECT {MEMBER_COLUMNS} FROM member ORDER BY identifier");
        let rows = sqlx::query_as::<_, MemberRow>(&sql)
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx)?;
        rows.into_iter().map(Member::try_from).collect()
    }

    async fn find_by_id(&self, id: &MemberId) -> DomainResult<Option<Member>> {
        let sql = format!("SELECT {MEMBER_COLUMNS} FROM member WHERE id = $1");
        let row = sqlx::query_as::<_, MemberRow>(&sql)
            .bind(id.as_str())
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?;
        row.map(Member::try_from).transpose()
    }

    async fn insert(&self, member: NewMember) -> DomainResult<Member> {
        let NewMember {
            id,
            password,
            name,
            birth,
            phone_number,
        } = member;

        let sql = format!(
            "INSERT INTO member (id, password, name, birth, phonenumber) \
             VALUES ($1, $2, $3, $4, $5) RETURNING {MEMBER_COLUMNS}"
        );
        let row = sqlx::query_as::<_, MemberRow>(&sql)
            .bind(id.as_str())
            .bind(password.as_str())
            .bind(name)
            .bind(birth)
            .bind(phone_number.to_string())
            .fetch_one(&self.pool)
            .await
            .map_err(map_sqlx)?;

        Member::try_from(row)
    }
}
