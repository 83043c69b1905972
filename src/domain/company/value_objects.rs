// src/domain/company/value_objects.rs
use crate::domain::enumeration::labeled_enum;
use crate::domain::errors::{DomainError, DomainResult};
use std::collections::BTreeMap;
use std::fmt;

/// Key of the single-entry JSON map that carries second-level categories.
pub const SECOND_CATEGORY_KEY: &str = "secondCategory";

const COMPANY_CODE_LEN: usize = 6;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CompanyCode(String);

impl CompanyCode {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if !is_company_code(&value) {
            return Err(DomainError::Validation(format!(
                "company code must be {COMPANY_CODE_LEN} digits"
            )));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

pub fn is_company_code(value: &str) -> bool {
    value.len() == COMPANY_CODE_LEN && value.bytes().all(|b| b.is_ascii_digit())
}

impl fmt::Display for CompanyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<CompanyCode> for String {
    fn from(value: CompanyCode) -> Self {
        value.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CompanyName(String);

impl CompanyName {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(DomainError::Validation("company name cannot be empty".into()));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CompanyName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<CompanyName> for String {
    fn from(value: CompanyName) -> Self {
        value.0
    }
}

labeled_enum! {
    pub enum Country("country") {
        Korea => ("KOREA", "대한민국"),
        Usa => ("USA", "미국"),
    }
}

labeled_enum! {
    pub enum Scale("scale") {
        Big => ("BIG", "대기업"),
        Middle => ("MIDDLE", "중견기업"),
        Small => ("SMALL", "중소기업"),
        Venture => ("VENTURE", "벤처기업"),
    }
}

labeled_enum! {
    pub enum FirstCategory("first category") {
        Semiconductor => ("SEMICONDUCTOR", "반도체"),
        SecondaryBattery => ("SECONDARY_BATTERY", "2차전지"),
        Automobile => ("AUTOMOBILE", "자동차"),
        Bio => ("BIO", "바이오"),
        Internet => ("INTERNET", "인터넷"),
        Finance => ("FINANCE", "금융"),
        Shipbuilding => ("SHIPBUILDING", "조선"),
        Steel => ("STEEL", "철강"),
        Chemical => ("CHEMICAL", "화학"),
        Entertainment => ("ENTERTAINMENT", "엔터테인먼트"),
    }
}

labeled_enum! {
    pub enum SecondCategory("second category") {
        MemorySemiconductor => ("MEMORY_SEMICONDUCTOR", "메모리반도체"),
        SystemSemiconductor => ("SYSTEM_SEMICONDUCTOR", "시스템반도체"),
        Foundry => ("FOUNDRY", "파운드리"),
        SemiconductorEquipment => ("SEMICONDUCTOR_EQUIPMENT", "반도체장비"),
        BatteryCell => ("BATTERY_CELL", "배터리셀"),
        BatteryMaterial => ("BATTERY_MATERIAL", "배터리소재"),
        ElectricVehicle => ("ELECTRIC_VEHICLE", "전기차"),
        AutoParts => ("AUTO_PARTS", "자동차부품"),
        Pharmaceutical => ("PHARMACEUTICAL", "제약"),
        Biosimilar => ("BIOSIMILAR", "바이오시밀러"),
        Platform => ("PLATFORM", "플랫폼"),
        Game => ("GAME", "게임"),
        Bank => ("BANK", "은행"),
        Securities => ("SECURITIES", "증권"),
        Insurance => ("INSURANCE", "보험"),
        Display => ("DISPLAY", "디스플레이"),
        Smartphone => ("SMARTPHONE", "스마트폰"),
        HomeAppliance => ("HOME_APPLIANCE", "가전"),
    }
}

/// Reads the element list out of a `{"secondCategory": [...]}` document.
///
/// Anything that is not exactly that single-key shape yields an empty list.
pub fn second_category_values(raw: &str) -> Vec<String> {
    let Ok(mut map) = serde_json::from_str::<BTreeMap<String, Vec<String>>>(raw) else {
        return Vec::new();
    };
    if map.len() != 1 {
        return Vec::new();
    }
    map.remove(SECOND_CATEGORY_KEY).unwrap_or_default()
}

/// Non-empty list of second-level categories, persisted as the JSON
/// single-key map.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SecondCategories(Vec<SecondCategory>);

impl SecondCategories {
    pub fn new(values: Vec<SecondCategory>) -> DomainResult<Self> {
        if values.is_empty() {
            return Err(DomainError::Validation(
                "at least one second category is required".into(),
            ));
        }
        Ok(Self(values))
    }

    pub fn from_json(raw: &str) -> DomainResult<Self> {
        let values = second_category_values(raw)
            .iter()
            .map(|value| value.parse::<SecondCategory>())
            .collect::<DomainResult<Vec<_>>>()?;
        Self::new(values)
    }

    pub fn to_json(&self) -> String {
        let codes: Vec<&str> = self.0.iter().map(SecondCategory::as_str).collect();
        serde_json::json!({ SECOND_CATEGORY_KEY: codes }).to_string()
    }

    pub fn as_slice(&self) -> &[SecondCategory] {
        &self.0
    }
}
