// src/application/validation/member.rs
use super::{FieldErrors, Rule, ValidationContext, check, not_blank, run_rules};
use crate::application::dto::MemberDto;
use crate::domain::article::value_objects::calendar_date;
use crate::domain::member::PhoneNumber;

pub const MIN_PASSWORD_LEN: usize = 8;

type MemberRule = Rule<MemberDto>;

pub const RULES: &[MemberRule] = &[
    MemberRule::new("id", |dto, _| check(not_blank(&dto.id), "NotBlank.member.id")),
    MemberRule::new("password", |dto, _| {
        check(not_blank(&dto.password), "NotBlank.member.password")
    }),
    MemberRule::new("password", |dto, _| {
        check(
            dto.password.chars().count() >= MIN_PASSWORD_LEN,
            "Length.member.password",
        )
    }),
    MemberRule::new("name", |dto, _| check(not_blank(&dto.name), "NotBlank.member.name")),
    MemberRule::new("birth", |dto, _| {
        check(
            calendar_date(dto.year, dto.month, dto.days).is_some(),
            "typeMismatch.member.birth",
        )
    }),
    MemberRule::new("birth", |dto, ctx| {
        let past = calendar_date(dto.year, dto.month, dto.days).is_some_and(|d| d <= ctx.today);
        check(past, "Range.member.birth")
    }),
    MemberRule::new("phoneNumber", |dto, _| {
        check(
            dto.phone_number.parse::<PhoneNumber>().is_ok(),
            "Pattern.member.phoneNumber",
        )
    }),
];

pub fn validate(dto: &MemberDto, ctx: &ValidationContext) -> Result<(), FieldErrors> {
    run_rules(RULES, dto, ctx).into_result()
}
