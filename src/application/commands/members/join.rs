// src/application/commands/members/join.rs
use super::MemberCommandService;
use crate::{
    application::{
        dto::{MemberDto, MemberView},
        error::{ApplicationError, ApplicationResult},
        messages,
        validation::{self, ValidationContext},
    },
    domain::{
        article::value_objects::calendar_date,
        member::{MemberId, NewMember, PasswordHash, PhoneNumber},
    },
};

impl MemberCommandService {
    pub async fn join_member(&self, dto: &MemberDto) -> ApplicationResult<MemberView> {
        let ctx = ValidationContext::new(self.clock.today());
        validation::member::validate(dto, &ctx).map_err(ApplicationError::Invalid)?;

        let id = MemberId::new(dto.id.trim())?;
        if self.repo.find_by_id(&id).await?.is_some() {
            tracing::warn!(member_id = %id, "member id already taken");
            return Err(ApplicationError::conflict(messages::EXIST_MEMBER_ID));
        }

        let birth = calendar_date(dto.year, dto.month, dto.days)
            .ok_or_else(|| ApplicationError::validation("member birth is not a calendar date"))?;
        let phone_number: PhoneNumber = dto.phone_number.parse()?;
        let password = PasswordHash::new(self.password_hasher.hash(&dto.password).await?)?;

        let member = self
            .repo
            .insert(NewMember {
                id,
                password,
                name: dto.name.trim().to_string(),
                birth,
                phone_number,
            })
            .await?;
        tracing::info!(member_id = %member.id, "member joined");
        Ok(member.into())
    }
}
