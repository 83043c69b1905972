// src/application/validation/mod.rs
//! Ordered rule lists for form DTOs.
//!
//! Each rule inspects one field and either passes or yields a message key.
//! Rules run in declaration order and the first failing key per field wins.

pub mod article;
pub mod company;
pub mod member;

use chrono::NaiveDate;
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;

/// Values a rule may depend on besides the DTO itself.
#[derive(Debug, Clone, Copy)]
pub struct ValidationContext {
    pub today: NaiveDate,
}

impl ValidationContext {
    pub fn new(today: NaiveDate) -> Self {
        Self { today }
    }
}

pub type RuleFn<T> = fn(&T, &ValidationContext) -> Result<(), &'static str>;

/// A check bound to the form field it reports against.
pub struct Rule<T> {
    pub field: &'static str,
    pub check: RuleFn<T>,
}

impl<T> Rule<T> {
    pub const fn new(field: &'static str, check: RuleFn<T>) -> Self {
        Self { field, check }
    }
}

/// Field name to message key, ordered by field name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<String, String>);

impl FieldErrors {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    /// Keeps the first key recorded for a field.
    pub fn reject(&mut self, field: &str, key: &str) {
        self.0
            .entry(field.to_string())
            .or_insert_with(|| key.to_string());
    }

    /// Any one key, preferring the alphabetically first field.
    pub fn first_key(&self) -> Option<&str> {
        self.0.values().next().map(String::as_str)
    }

    pub fn into_result(self) -> Result<(), FieldErrors> {
        if self.is_empty() { Ok(()) } else { Err(self) }
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (field, key) in &self.0 {
            if !first {
                f.write_str(", ")?;
            }
            write!(f, "{field}={key}")?;
            first = false;
        }
        Ok(())
    }
}

pub fn run_rules<T>(rules: &[Rule<T>], value: &T, ctx: &ValidationContext) -> FieldErrors {
    let mut errors = FieldErrors::default();
    for rule in rules {
        if errors.get(rule.field).is_some() {
            continue;
        }
        if let Err(key) = (rule.check)(value, ctx) {
            errors.reject(rule.field, key);
        }
    }
    errors
}

pub(crate) fn not_blank(value: &str) -> bool {
    !value.trim().is_empty()
}

fn check(ok: bool, key: &'static str) -> Result<(), &'static str> {
    if ok { Ok(()) } else { Err(key) }
}
