// src/presentation/http/controllers/user_articles.rs
use super::form_failure;
use crate::application::queries::articles::ArticlesByDateQuery;
use crate::presentation::http::{
    constants::{attrs, layouts, views},
    error::{HttpError, HttpResult},
    state::HttpState,
    view::View,
};
use axum::{
    Extension,
    extract::Query,
    response::{IntoResponse, Response},
};
use chrono::NaiveDate;
use serde::Deserialize;

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ArticleDateParams {
    pub date: Option<NaiveDate>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
}

impl ArticleDateParams {
    fn query(&self) -> HttpResult<Option<ArticlesByDateQuery>> {
        match (self.date, self.start_date, self.end_date) {
            (Some(date), None, None) => Ok(Some(ArticlesByDateQuery::On(date))),
            (None, Some(start), Some(end)) => Ok(Some(ArticlesByDateQuery::Between(start, end))),
            (None, None, None) => Ok(None),
            _ => Err(HttpError::bad_request(
                "use either date or both startDate and endDate",
            )),
        }
    }
}

/// Articles published on one day or inside an inclusive period.
pub async fn articles_by_date(
    Extension(state): Extension<HttpState>,
    Query(params): Query<ArticleDateParams>,
) -> HttpResult<Response> {
    let view = View::new(views::USER_ARTICLES).layout(layouts::BASIC);
    let Some(query) = params.query()? else {
        return Ok(view.into_response());
    };

    match state.services.article_queries.articles_by_date(query).await {
        Ok(articles) => Ok(view.attr(attrs::ARTICLES, &articles).into_response()),
        Err(err) => form_failure(view, err),
    }
}
