use crate::domain::errors::DomainResult;
use crate::domain::member::entity::{Member, NewMember};
use crate::domain::member::value_objects::MemberId;
use async_trait::async_trait;

#[async_trait]
pub trait MemberRepository: Send + Sync {
    async fn list(&self) -> DomainResult<Vec<Member>>;
    async fn find_by_id(&self, id: &MemberId) -> DomainResult<Option<Member>>;
    async fn insert(&self, member: NewMember) -> DomainResult<Member>;
}
