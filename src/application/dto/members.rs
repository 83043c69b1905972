use crate::domain::member::Member;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MemberDto {
    pub id: String,
    pub password: String,
    pub name: String,
    pub year: i32,
    pub month: i32,
    pub days: i32,
    pub phone_number: String,
}

impl MemberDto {
    /// Copy that is safe to put back into a view model.
    pub fn without_password(&self) -> Self {
        Self {
            password: String::new(),
            ..self.clone()
        }
    }
}

/// Member as listed to the manager; the password hash never leaves the
/// service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MemberView {
    pub identifier: i64,
    pub id: String,
    pub name: String,
    pub birth: NaiveDate,
    pub phone_number: String,
}

impl From<Member> for MemberView {
    fn from(member: Member) -> Self {
        Self {
            identifier: member.identifier.into(),
            id: member.id.as_str().to_string(),
            name: member.name,
            birth: member.birth,
            phone_number: member.phone_number.to_string(),
        }
    }
}
