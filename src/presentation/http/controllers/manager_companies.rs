// src/presentation/http/controllers/manager_companies.rs
use super::{NameParams, form_failure};
use crate::application::dto::CompanyDto;
use crate::presentation::http::{
    constants::{attrs, layouts, urls, views},
    error::{HttpResult, IntoHttpResult},
    redirect::{encode_value, see_other},
    state::HttpState,
    view::View,
};
use axum::{
    Extension, Form,
    extract::Query,
    response::{IntoResponse, Response},
};
use serde::Deserialize;

const DATA_TYPE_KOREAN: &str = "기업";
const DATA_TYPE_ENGLISH: &str = "company";
const KEY_VALUE: &str = "기업명";

#[derive(Debug, Deserialize)]
pub struct CodeForm {
    #[serde(default)]
    pub code: String,
}

fn add_view() -> View {
    View::new(views::ADD_COMPANY_PROCESS)
        .layout(layouts::ADD_PROCESS)
        .attr(attrs::DATA_TYPE_KOREAN, DATA_TYPE_KOREAN)
}

fn remove_view() -> View {
    View::new(views::REMOVE_PROCESS)
        .layout(layouts::REMOVE_PROCESS)
        .attr(attrs::DATA_TYPE_KOREAN, DATA_TYPE_KOREAN)
        .attr(attrs::DATA_TYPE_ENGLISH, DATA_TYPE_ENGLISH)
        .attr(attrs::KEY, "code")
}

fn finish_view(view: &'static str, layout: &'static str, params: &NameParams) -> HttpResult<View> {
    Ok(View::new(view)
        .layout(layout)
        .attr(attrs::DATA_TYPE_KOREAN, DATA_TYPE_KOREAN)
        .attr(attrs::KEY, KEY_VALUE)
        .attr(attrs::VALUE, &params.decoded()?))
}

pub async fn process_add() -> View {
    add_view().attr(attrs::COMPANY, &CompanyDto::default())
}

pub async fn submit_add(
    Extension(state): Extension<HttpState>,
    Form(dto): Form<CompanyDto>,
) -> HttpResult<Response> {
    match state.services.company_commands.register_company(&dto).await {
        Ok(company) => Ok(see_other(
            urls::ADD_COMPANY_FINISH,
            &[("name", encode_value(&company.name))],
        )
        .into_response()),
        Err(err) => form_failure(add_view().attr(attrs::COMPANY, &dto), err),
    }
}

pub async fn finish_add(Query(params): Query<NameParams>) -> HttpResult<View> {
    finish_view(views::ADD_SINGLE_FINISH, layouts::ADD_FINISH, &params)
}

pub async fn select_companies(Extension(state): Extension<HttpState>) -> HttpResult<View> {
    let companies = state
        .services
        .company_queries
        .list_companies()
        .await
        .into_http()?;
    Ok(View::new(views::SELECT_COMPANIES)
        .layout(layouts::SELECT)
        .attr(attrs::COMPANIES, &companies))
}

pub async fn process_remove() -> View {
    remove_view()
}

pub async fn submit_remove(
    Extension(state): Extension<HttpState>,
    Form(form): Form<CodeForm>,
) -> HttpResult<Response> {
    match state.services.company_commands.remove_company(&form.code).await {
        Ok(name) => Ok(
            see_other(urls::REMOVE_COMPANY_FINISH, &[("name", encode_value(&name))])
                .into_response(),
        ),
        Err(err) => form_failure(remove_view(), err),
    }
}

pub async fn finish_remove(Query(params): Query<NameParams>) -> HttpResult<View> {
    finish_view(views::REMOVE_FINISH, layouts::REMOVE_FINISH, &params)
}
