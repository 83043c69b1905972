use super::MemberQueryService;
use crate::application::{dto::MemberView, error::ApplicationResult};

impl MemberQueryService {
    pub async fn list_members(&self) -> ApplicationResult<Vec<MemberView>> {
        let members = self.repo.list().await?;
        Ok(members.into_iter().map(Into::into).collect())
    }
}
