// tests/support/builders.rs
use chrono::NaiveDate;
use corpnews::application::dto::{CompanyArticleDto, CompanyDto, MemberDto};
use corpnews::domain::company::{
    Company, CompanyCode, CompanyName, Country, FirstCategory, Scale, SecondCategories,
    SecondCategory,
};

pub const SAMSUNG: &str = "삼성전자";
pub const SAMSUNG_CODE: &str = "005930";
pub const HYNIX: &str = "SK하이닉스";
pub const HYNIX_CODE: &str = "000660";

pub fn company(code: &str, name: &str) -> Company {
    Company::builder()
        .code(CompanyCode::new(code).unwrap())
        .country(Country::Korea)
        .scale(Scale::Big)
        .name(CompanyName::new(name).unwrap())
        .category_1st(FirstCategory::Semiconductor)
        .category_2nd(SecondCategories::new(vec![SecondCategory::MemorySemiconductor]).unwrap())
        .build()
        .unwrap()
}

pub fn samsung() -> Company {
    company(SAMSUNG_CODE, SAMSUNG)
}

pub fn hynix() -> Company {
    company(HYNIX_CODE, HYNIX)
}

pub struct ArticleFormBuilder {
    dto: CompanyArticleDto,
}

impl ArticleFormBuilder {
    pub fn new(name: &str) -> Self {
        Self {
            dto: CompanyArticleDto {
                name: name.into(),
                press: "MAEIL_BUSINESS".into(),
                subject_company: SAMSUNG.into(),
                link: format!("https://news.example.com/{}", slug(name)),
                year: 2023,
                month: 11,
                days: 15,
                importance: 1,
            },
        }
    }

    pub fn link(mut self, link: &str) -> Self {
        self.dto.link = link.into();
        self
    }

    pub fn press(mut self, press: &str) -> Self {
        self.dto.press = press.into();
        self
    }

    pub fn company(mut self, company: &str) -> Self {
        self.dto.subject_company = company.into();
        self
    }

    pub fn date(mut self, year: i32, month: i32, days: i32) -> Self {
        self.dto.year = year;
        self.dto.month = month;
        self.dto.days = days;
        self
    }

    pub fn importance(mut self, importance: i32) -> Self {
        self.dto.importance = importance;
        self
    }

    pub fn build(self) -> CompanyArticleDto {
        self.dto
    }
}

fn slug(name: &str) -> String {
    name.bytes().map(|b| format!("{b:02x}")).collect()
}

pub fn company_form(code: &str, name: &str, second_category: &str) -> CompanyDto {
    CompanyDto {
        code: code.into(),
        country: "KOREA".into(),
        scale: "BIG".into(),
        name: name.into(),
        first_category: "SEMICONDUCTOR".into(),
        second_category: second_category.into(),
    }
}

pub fn member_form(id: &str) -> MemberDto {
    MemberDto {
        id: id.into(),
        password: "correct-horse".into(),
        name: "김투자".into(),
        year: 1991,
        month: 3,
        days: 9,
        phone_number: "010-1234-5678".into(),
    }
}

pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}
