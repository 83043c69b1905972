// src/presentation/http/routes.rs
use crate::presentation::http::constants::urls;
use crate::presentation::http::controllers::{
    manager_articles, manager_companies, manager_members, membership, user_articles,
    user_companies,
};
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Json, Router,
    http::{HeaderValue, Method},
    routing::get,
};
use serde::Serialize;
use std::time::Duration;
use tower_http::{
    compression::CompressionLayer,
    cors::{AllowOrigin, CorsLayer},
    trace::TraceLayer,
};

pub fn build_router(state: HttpState, allowed_origins: &[String]) -> Router {
    let origins: Vec<HeaderValue> = allowed_origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(origin = %origin, "ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    let cors = CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .max_age(Duration::from_secs(3600));

    Router::new()
        .route("/health", get(health))
        .route(
            urls::ADD_SINGLE_ARTICLE,
            get(manager_articles::process_add_single).post(manager_articles::submit_add_single),
        )
        .route(
            urls::ADD_SINGLE_ARTICLE_FINISH,
            get(manager_articles::finish_add_single),
        )
        .route(
            urls::ADD_ARTICLES_WITH_STRING,
            get(manager_articles::process_add_with_string)
                .post(manager_articles::submit_add_with_string),
        )
        .route(
            urls::ADD_ARTICLES_WITH_STRING_FINISH,
            get(manager_articles::finish_add_with_string),
        )
        .route(urls::SELECT_ARTICLES, get(manager_articles::select_articles))
        .route(
            urls::UPDATE_ARTICLE,
            get(manager_articles::initiate_update).post(manager_articles::process_update),
        )
        .route(
            urls::UPDATE_ARTICLE_FINISH,
            get(manager_articles::finish_update).post(manager_articles::submit_update),
        )
        .route(
            urls::REMOVE_ARTICLE,
            get(manager_articles::process_remove).post(manager_articles::submit_remove),
        )
        .route(urls::REMOVE_ARTICLE_FINISH, get(manager_articles::finish_remove))
        .route(
            urls::ADD_COMPANY,
            get(manager_companies::process_add).post(manager_companies::submit_add),
        )
        .route(urls::ADD_COMPANY_FINISH, get(manager_companies::finish_add))
        .route(urls::SELECT_COMPANIES, get(manager_companies::select_companies))
        .route(
            urls::REMOVE_COMPANY,
            get(manager_companies::process_remove).post(manager_companies::submit_remove),
        )
        .route(urls::REMOVE_COMPANY_FINISH, get(manager_companies::finish_remove))
        .route(urls::SELECT_MEMBERS, get(manager_members::select_members))
        .route(urls::USER_COMPANY, get(user_companies::company_sub_page))
        .route(urls::USER_COMPANY_LOOKUP, get(user_companies::company_lookup))
        .route(urls::USER_ARTICLES, get(user_articles::articles_by_date))
        .route(
            urls::MEMBERSHIP,
            get(membership::process_membership).post(membership::submit_membership),
        )
        .route(urls::MEMBERSHIP_FINISH, get(membership::finish_membership))
        .layer(TraceLayer::new_for_http())
        .layer(CompressionLayer::new())
        .layer(cors)
        .layer(Extension(state))
}

#[derive(Serialize)]
pub struct StatusResponse {
    pub status: String,
}

pub async fn health() -> Json<StatusResponse> {
    Json(StatusResponse {
        status: "ok".into(),
    })
}
