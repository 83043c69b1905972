// src/presentation/http/controllers/manager_articles.rs
use super::{NameParams, form_failure};
use crate::application::{
    commands::articles::RemoveArticleCommand,
    dto::{ArticleBatchDto, CompanyArticleDto},
    error::ApplicationError,
    messages,
};
use crate::presentation::http::{
    constants::{attrs, layouts, urls, views},
    error::{HttpError, HttpResult, IntoHttpResult},
    redirect::{decode_list, encode_list, encode_value, see_other},
    state::HttpState,
    view::View,
};
use axum::{
    Extension, Form,
    extract::Query,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

const DATA_TYPE_KOREAN: &str = "기사";
const DATA_TYPE_ENGLISH: &str = "article";
const KEY_VALUE: &str = "제목";

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NumberOrNameForm {
    #[serde(default)]
    pub number_or_name: String,
}

#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BatchFinishParams {
    pub name_list: String,
    pub is_bean_validation_error: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_single: Option<String>,
}

fn finish_redirect(path: &str, name: &str) -> Response {
    see_other(path, &[("name", encode_value(name))]).into_response()
}

fn finish_view(view: &'static str, layout: &'static str, params: &NameParams) -> HttpResult<View> {
    Ok(View::new(view)
        .layout(layout)
        .attr(attrs::DATA_TYPE_KOREAN, DATA_TYPE_KOREAN)
        .attr(attrs::KEY, KEY_VALUE)
        .attr(attrs::VALUE, &params.decoded()?))
}

fn add_single_view() -> View {
    View::new(views::ADD_ARTICLE_SINGLE_PROCESS)
        .layout(layouts::ADD_PROCESS)
        .attr(attrs::DATA_TYPE_KOREAN, DATA_TYPE_KOREAN)
}

pub async fn process_add_single() -> View {
    add_single_view().attr(attrs::ARTICLE, &CompanyArticleDto::default())
}

pub async fn submit_add_single(
    Extension(state): Extension<HttpState>,
    Form(dto): Form<CompanyArticleDto>,
) -> HttpResult<Response> {
    match state.services.article_commands.register_article(&dto).await {
        Ok(article) => Ok(finish_redirect(urls::ADD_SINGLE_ARTICLE_FINISH, &article.name)),
        Err(err) => form_failure(add_single_view().attr(attrs::ARTICLE, &dto), err),
    }
}

pub async fn finish_add_single(Query(params): Query<NameParams>) -> HttpResult<View> {
    finish_view(views::ADD_SINGLE_FINISH, layouts::ADD_FINISH, &params)
}

pub async fn process_add_with_string() -> View {
    View::new(views::ADD_ARTICLE_MULTIPLE_PROCESS)
        .layout(layouts::ADD_PROCESS)
        .attr(attrs::DATA_TYPE_KOREAN, DATA_TYPE_KOREAN)
}

/// The batch flow always lands on its finish page; failures travel in the
/// redirect query instead of re-rendering the form.
pub async fn submit_add_with_string(
    Extension(state): Extension<HttpState>,
    Form(batch): Form<ArticleBatchDto>,
) -> HttpResult<Response> {
    let params = match state
        .services
        .article_commands
        .register_articles_from_text(&batch)
        .await
    {
        Ok(articles) => {
            let names: Vec<&str> = articles.iter().map(|article| article.name.as_str()).collect();
            BatchFinishParams {
                name_list: encode_list(&names),
                ..BatchFinishParams::default()
            }
        }
        Err(ApplicationError::Invalid(errors)) => BatchFinishParams {
            is_bean_validation_error: true,
            error_single: errors.first_key().map(str::to_string),
            ..BatchFinishParams::default()
        },
        Err(err) => match err.business_message() {
            Some(key) => BatchFinishParams {
                error_single: Some(key.to_string()),
                ..BatchFinishParams::default()
            },
            None => return Err(HttpError::from_error(err)),
        },
    };
    Ok(see_other(urls::ADD_ARTICLES_WITH_STRING_FINISH, &params).into_response())
}

pub async fn finish_add_with_string(Query(params): Query<BatchFinishParams>) -> HttpResult<View> {
    let names = decode_list(&params.name_list)
        .ok_or_else(|| HttpError::bad_request("malformed nameList parameter"))?;
    let mut view = View::new(views::ADD_MULTIPLE_FINISH)
        .layout(layouts::ADD_FINISH)
        .attr(attrs::DATA_TYPE_KOREAN, DATA_TYPE_KOREAN)
        .attr(attrs::KEY, KEY_VALUE)
        .attr(attrs::NAME_LIST, &names)
        .attr(attrs::IS_BEAN_VALIDATION_ERROR, &params.is_bean_validation_error);
    if let Some(error) = &params.error_single {
        view = view.attr(attrs::ERROR_SINGLE, error);
    }
    Ok(view)
}

pub async fn select_articles(Extension(state): Extension<HttpState>) -> HttpResult<View> {
    let articles = state
        .services
        .article_queries
        .list_articles()
        .await
        .into_http()?;
    Ok(View::new(views::SELECT_ARTICLES)
        .layout(layouts::SELECT)
        .attr(attrs::ARTICLES, &articles))
}

fn update_before_view() -> View {
    View::new(views::UPDATE_ARTICLE_BEFORE_PROCESS)
        .layout(layouts::UPDATE_PROCESS)
        .attr(attrs::DATA_TYPE_KOREAN, DATA_TYPE_KOREAN)
}

fn update_after_view(article: &CompanyArticleDto) -> View {
    View::new(views::UPDATE_ARTICLE_AFTER_PROCESS)
        .layout(layouts::UPDATE_PROCESS)
        .attr(attrs::DATA_TYPE_KOREAN, DATA_TYPE_KOREAN)
        .attr(attrs::UPDATE_URL, urls::UPDATE_ARTICLE_FINISH)
        .attr(attrs::ARTICLE, article)
}

pub async fn initiate_update() -> View {
    update_before_view()
}

/// Looks up the article to edit and shows it in the update form.
pub async fn process_update(
    Extension(state): Extension<HttpState>,
    Form(form): Form<NumberOrNameForm>,
) -> HttpResult<View> {
    let found = state
        .services
        .article_queries
        .find_by_number_or_name(&form.number_or_name)
        .await
        .into_http()?;
    Ok(match found {
        Some(article) => update_after_view(&CompanyArticleDto::from(&article)),
        None => update_before_view().attr(attrs::ERROR, messages::NOT_FOUND_ARTICLE),
    })
}

pub async fn submit_update(
    Extension(state): Extension<HttpState>,
    Form(dto): Form<CompanyArticleDto>,
) -> HttpResult<Response> {
    match state.services.article_commands.update_article(&dto).await {
        Ok(article) => Ok(finish_redirect(urls::UPDATE_ARTICLE_FINISH, &article.name)),
        Err(err) => form_failure(update_after_view(&dto), err),
    }
}

pub async fn finish_update(Query(params): Query<NameParams>) -> HttpResult<View> {
    finish_view(views::UPDATE_FINISH, layouts::UPDATE_FINISH, &params)
}

fn remove_view() -> View {
    View::new(views::REMOVE_PROCESS)
        .layout(layouts::REMOVE_PROCESS)
        .attr(attrs::DATA_TYPE_KOREAN, DATA_TYPE_KOREAN)
        .attr(attrs::DATA_TYPE_ENGLISH, DATA_TYPE_ENGLISH)
        .attr(attrs::KEY, "numberOrName")
}

pub async fn process_remove() -> View {
    remove_view()
}

pub async fn submit_remove(
    Extension(state): Extension<HttpState>,
    Form(form): Form<NumberOrNameForm>,
) -> HttpResult<Response> {
    let command = RemoveArticleCommand::parse(&form.number_or_name);
    match state.services.article_commands.remove_article(command).await {
        Ok(name) => Ok(finish_redirect(urls::REMOVE_ARTICLE_FINISH, &name)),
        Err(err) => form_failure(remove_view(), err),
    }
}

pub async fn finish_remove(Query(params): Query<NameParams>) -> HttpResult<View> {
    finish_view(views::REMOVE_FINISH, layouts::REMOVE_FINISH, &params)
}
