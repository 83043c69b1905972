// tests/support/helpers.rs
use std::sync::Arc;

use super::mocks::{
    FixedClock, InMemoryArticleRepo, InMemoryCompanyRepo, InMemoryMemberRepo,
    PrefixPasswordHasher,
};
use axum::Router;
use axum::body::{self, Body};
use axum::http::{Request, StatusCode, header};
use axum::response::Response;
use corpnews::application::services::ApplicationServices;
use corpnews::domain::company::Company;
use corpnews::presentation::http::{routes::build_router, state::HttpState};
use serde::Serialize;
use serde_json::Value;
use tower::util::ServiceExt as _;

/// Router plus handles on the in-memory stores behind it.
pub struct TestApp {
    pub router: Router,
    pub services: Arc<ApplicationServices>,
    pub companies: Arc<InMemoryCompanyRepo>,
    pub articles: Arc<InMemoryArticleRepo>,
    pub members: Arc<InMemoryMemberRepo>,
}

pub fn build_services(
    companies: Arc<InMemoryCompanyRepo>,
    articles: Arc<InMemoryArticleRepo>,
    members: Arc<InMemoryMemberRepo>,
) -> Arc<ApplicationServices> {
    Arc::new(ApplicationServices::new(
        companies,
        articles.clone(),
        articles,
        members,
        Arc::new(PrefixPasswordHasher),
        Arc::new(FixedClock),
    ))
}

pub fn make_test_app(companies: impl IntoIterator<Item = Company>) -> TestApp {
    let companies = Arc::new(InMemoryCompanyRepo::with(companies));
    let articles = Arc::new(InMemoryArticleRepo::default());
    let members = Arc::new(InMemoryMemberRepo::default());
    let services = build_services(companies.clone(), articles.clone(), members.clone());

    let state = HttpState {
        services: Arc::clone(&services),
    };
    TestApp {
        router: build_router(state, &[]),
        services,
        companies,
        articles,
        members,
    }
}

impl TestApp {
    pub async fn send(&self, request: Request<Body>) -> Response {
        self.router
            .clone()
            .oneshot(request)
            .await
            .expect("router is infallible")
    }

    pub async fn get(&self, uri: &str) -> Response {
        self.send(get_request(uri)).await
    }

    pub async fn post_form<T: Serialize>(&self, uri: &str, form: &T) -> Response {
        let body = serde_urlencoded::to_string(form).expect("form serializes");
        self.send(form_request(uri, body)).await
    }

    /// Follows a See Other redirect and returns the target's response.
    pub async fn follow(&self, response: Response) -> Response {
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        let target = location(&response);
        self.get(&target).await
    }
}

pub fn get_request(uri: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub fn form_request(uri: &str, body: String) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body))
        .unwrap()
}

pub fn location(response: &Response) -> String {
    response
        .headers()
        .get(header::LOCATION)
        .and_then(|v| v.to_str().ok())
        .expect("location header")
        .to_string()
}

pub async fn body_json(response: Response) -> Value {
    let bytes = body::to_bytes(response.into_body(), 1024 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&bytes).expect("json body")
}

/// Reads a view response and returns `(view name, model)`.
pub async fn view_of(response: Response) -> (String, Value) {
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    let name = json["view"].as_str().expect("view name").to_string();
    (name, json["model"].clone())
}

/// Assert that a response is an ErrorResponse JSON with the expected status and message.
pub async fn assert_error_response(response: Response, expected_status: StatusCode, expected_message: &str) {
    assert_eq!(response.status(), expected_status);
    let ct = response
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("")
        .to_string();
    assert!(ct.starts_with("application/json"), "unexpected content-type: {ct}");
    let json = body_json(response).await;
    assert_eq!(
        json["error"].as_str(),
        expected_status.canonical_reason(),
        "unexpected error field: {json}"
    );
    assert_eq!(json["message"].as_str(), Some(expected_message));
}
