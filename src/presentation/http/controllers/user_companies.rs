// src/presentation/http/controllers/user_companies.rs
use crate::application::messages;
use crate::presentation::http::{
    constants::{attrs, layouts, views},
    error::{HttpError, HttpResult, IntoHttpResult},
    state::HttpState,
    view::View,
};
use axum::{Extension, extract::Path};

pub async fn company_sub_page() -> View {
    View::new(views::USER_COMPANY_SUB).layout(layouts::BASIC)
}

/// Digits select a lookup by code, anything else a lookup by name.
pub async fn company_lookup(
    Extension(state): Extension<HttpState>,
    Path(name_or_code): Path<String>,
) -> HttpResult<View> {
    let company = state
        .services
        .company_queries
        .find_by_name_or_code(&name_or_code)
        .await
        .into_http()?
        .ok_or_else(|| HttpError::not_found(messages::NOT_FOUND_COMPANY))?;
    Ok(View::new(views::USER_COMPANY_SHOW)
        .layout(layouts::BASIC)
        .attr(attrs::COMPANY, &company))
}
