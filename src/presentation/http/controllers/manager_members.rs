// src/presentation/http/controllers/manager_members.rs
use crate::presentation::http::{
    constants::{attrs, layouts, views},
    error::{HttpResult, IntoHttpResult},
    state::HttpState,
    view::View,
};
use axum::Extension;

pub async fn select_members(Extension(state): Extension<HttpState>) -> HttpResult<View> {
    let members = state
        .services
        .member_queries
        .list_members()
        .await
        .into_http()?;
    Ok(View::new(views::SELECT_MEMBERS)
        .layout(layouts::SELECT)
        .attr(attrs::MEMBERS, &members))
}
