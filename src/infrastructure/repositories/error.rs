// src/infrastructure/repositories/error.rs
use crate::domain::messages;
use crate::domain::errors::DomainError;

const CNT_COMPANY_CODE: &str = "company_pkey";
const CNT_COMPANY_NAME: &str = "company_name_key";
const CNT_ARTICLE_NAME: &str = "company_article_name_key";
const CNT_ARTICLE_LINK: &str = "company_article_link_key";
const CNT_ARTICLE_IMPORTANCE: &str = "company_article_importance_chk";
const CNT_MEMBER_ID: &str = "member_id_key";

/// Maps a sqlx failure onto the domain error that the matching service
/// pre-check would have produced.
pub fn map_sqlx(err: sqlx::Error) -> DomainError {
    match &err {
        sqlx::Error::Database(db_err) => {
            if let Some(constraint) = db_err.constraint() {
                return match constraint {
                    CNT_COMPANY_CODE => DomainError::Conflict(messages::EXIST_COMPANY_CODE.into()),
                    CNT_COMPANY_NAME => DomainError::Conflict(messages::EXIST_COMPANY_NAME.into()),
                    CNT_ARTICLE_NAME => DomainError::Conflict(messages::EXIST_ARTICLE_NAME.into()),
                    CNT_ARTICLE_LINK => DomainError::Conflict(messages::EXIST_ARTICLE_LINK.into()),
                    CNT_MEMBER_ID => DomainError::Conflict(messages::EXIST_MEMBER_ID.into()),
                    CNT_ARTICLE_IMPORTANCE => {
                        DomainError::Validation(messages::RANGE_ARTICLE_IMPORTANCE.into())
                    }
                    other => {
                        DomainError::Persistence(format!("database constraint violation: {other}"))
                    }
                };
            }

            if let Some(code) = db_err.code() {
                match code.as_ref() {
                    "23505" => {
                        return DomainError::Conflict("unique constraint violated".into());
                    }
                    "23514" => {
                        return DomainError::Validation("check constraint violated".into());
                    }
                    _ => {}
                }
            }

            DomainError::Persistence(db_err.message().to_string())
        }
        _ => DomainError::Persistence(err.to_string()),
    }
}
