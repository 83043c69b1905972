// src/presentation/http/controllers/membership.rs
use super::form_failure;
use crate::application::dto::MemberDto;
use crate::presentation::http::{
    constants::{attrs, layouts, urls, views},
    error::HttpResult,
    state::HttpState,
    view::View,
};
use axum::{
    Extension, Form,
    response::{IntoResponse, Redirect, Response},
};

fn membership_view() -> View {
    View::new(views::MEMBERSHIP_PROCESS).layout(layouts::BASIC)
}

pub async fn process_membership() -> View {
    membership_view().attr(attrs::MEMBER, &MemberDto::default())
}

pub async fn submit_membership(
    Extension(state): Extension<HttpState>,
    Form(dto): Form<MemberDto>,
) -> HttpResult<Response> {
    match state.services.member_commands.join_member(&dto).await {
        Ok(_) => Ok(Redirect::to(urls::MEMBERSHIP_FINISH).into_response()),
        Err(err) => form_failure(
            membership_view().attr(attrs::MEMBER, &dto.without_password()),
            err,
        ),
    }
}

pub async fn finish_membership() -> View {
    View::new(views::MEMBERSHIP_FINISH).layout(layouts::BASIC)
}
