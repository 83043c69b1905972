// src/domain/member/entity.rs
use crate::domain::member::value_objects::{MemberId, MemberIdentifier, PasswordHash, PhoneNumber};
use chrono::NaiveDate;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Member {
    pub identifier: MemberIdentifier,
    pub id: MemberId,
    pub password: PasswordHash,
    pub name: String,
    pub birth: NaiveDate,
    pub phone_number: PhoneNumber,
}

#[derive(Debug, Clone)]
pub struct NewMember {
    pub id: MemberId,
    pub password: PasswordHash,
    pub name: String,
    pub birth: NaiveDate,
    pub phone_number: PhoneNumber,
}

impl NewMember {
    pub fn with_identifier(self, identifier: MemberIdentifier) -> Member {
        Member {
            identifier,
            id: self.id,
            password: self.password,
            name: self.name,
            birth: self.birth,
            phone_number: self.phone_number,
        }
    }
}
