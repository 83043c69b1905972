// src/domain/member/value_objects.rs
use crate::domain::errors::{DomainError, DomainResult};
use std::{fmt, str::FromStr};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MemberIdentifier(pub i64);

impl MemberIdentifier {
    pub fn new(identifier: i64) -> DomainResult<Self> {
        if identifier <= 0 {
            Err(DomainError::Validation(
                "member identifier must be positive".into(),
            ))
        } else {
            Ok(Self(identifier))
        }
    }
}

impl From<MemberIdentifier> for i64 {
    fn from(value: MemberIdentifier) -> Self {
        value.0
    }
}

/// Login id chosen by the member.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MemberId(String);

impl MemberId {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(DomainError::Validation("member id cannot be empty".into()));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for MemberId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PasswordHash(String);

impl PasswordHash {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if value.is_empty() {
            return Err(DomainError::Validation(
                "password hash cannot be empty".into(),
            ));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Dash separated phone number such as `010-1234-5678`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhoneNumber {
    area: String,
    exchange: String,
    line: String,
}

impl PhoneNumber {
    pub fn area(&self) -> &str {
        &self.area
    }

    pub fn exchange(&self) -> &str {
        &self.exchange
    }

    pub fn line(&self) -> &str {
        &self.line
    }
}

impl FromStr for PhoneNumber {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || DomainError::Validation(format!("invalid phone number '{s}'"));
        let groups: Vec<&str> = s.trim().split('-').collect();
        let [area, exchange, line] = groups.as_slice() else {
            return Err(invalid());
        };

        let digits = |group: &str, min: usize, max: usize| {
            (min..=max).contains(&group.len()) && group.bytes().all(|b| b.is_ascii_digit())
        };
        if !(digits(area, 2, 3) && digits(exchange, 3, 4) && digits(line, 4, 4)) {
            return Err(invalid());
        }

        Ok(Self {
            area: (*area).to_string(),
            exchange: (*exchange).to_string(),
            line: (*line).to_string(),
        })
    }
}

impl fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}-{}", self.area, self.exchange, self.line)
    }
}
