// tests/e2e_manager_companies.rs
mod support;

use axum::http::StatusCode;
use serde_json::json;
use support::{HYNIX, HYNIX_CODE, SAMSUNG_CODE, company_form, make_test_app, samsung, view_of};

const ADD: &str = "/manager/company/add";
const SELECT: &str = "/manager/company/select";
const REMOVE: &str = "/manager/company/remove";

const MEMORY: &str = r#"{"secondCategory":["MEMORY_SEMICONDUCTOR","FOUNDRY"]}"#;

#[tokio::test]
async fn add_then_select_lists_company_with_categories() {
    let app = make_test_app([]);
    let res = app.post_form(ADD, &company_form(HYNIX_CODE, HYNIX, MEMORY)).await;
    assert_eq!(res.status(), StatusCode::SEE_OTHER);

    let (view, model) = view_of(app.follow(res).await).await;
    assert_eq!(view, "manager/add/singleFinishPage");
    assert_eq!(model["value"], json!(HYNIX));
    assert_eq!(model["dataTypeKorean"], json!("기업"));

    let (view, model) = view_of(app.get(SELECT).await).await;
    assert_eq!(view, "manager/select/companiesPage");
    let companies = model["companies"].as_array().unwrap();
    assert_eq!(companies.len(), 1);
    assert_eq!(companies[0]["code"], json!(HYNIX_CODE));
    assert_eq!(
        companies[0]["secondCategory"],
        json!(["MEMORY_SEMICONDUCTOR", "FOUNDRY"])
    );
}

#[tokio::test]
async fn duplicate_code_and_name_are_business_errors() {
    let app = make_test_app([samsung()]);

    let (_, model) = view_of(app.post_form(ADD, &company_form(SAMSUNG_CODE, "다른 이름", MEMORY)).await).await;
    assert_eq!(model["error"], json!("Exist.company.code"));
    assert_eq!(model["company"]["name"], json!("다른 이름"));

    let (_, model) = view_of(app.post_form(ADD, &company_form("123456", "삼성전자", MEMORY)).await).await;
    assert_eq!(model["error"], json!("Exist.company.name"));
    assert_eq!(app.companies.snapshot().len(), 1);
}

#[tokio::test]
async fn bad_code_and_empty_categories_are_field_errors() {
    let app = make_test_app([]);
    let form = company_form("12AB", HYNIX, r#"{"secondCategory":[]}"#);

    let (view, model) = view_of(app.post_form(ADD, &form).await).await;
    assert_eq!(view, "manager/add/company/singleProcessPage");
    assert_eq!(model["isBeanValidationError"], json!(true));
    assert_eq!(model["errors"]["code"], json!("Pattern.company.code"));
    assert_eq!(model["errors"]["secondCategory"], json!("NotBlank.company.secondCategory"));
    assert!(app.companies.snapshot().is_empty());
}

#[tokio::test]
async fn remove_by_code_reports_company_name() {
    let app = make_test_app([samsung()]);
    let res = app.post_form(REMOVE, &[("code", SAMSUNG_CODE)]).await;
    assert_eq!(res.status(), StatusCode::SEE_OTHER);

    let (view, model) = view_of(app.follow(res).await).await;
    assert_eq!(view, "manager/remove/finishPage");
    assert_eq!(model["value"], json!("삼성전자"));
    assert!(app.companies.snapshot().is_empty());
}

#[tokio::test]
async fn remove_unknown_code_stays_on_form() {
    let app = make_test_app([samsung()]);
    let (view, model) = view_of(app.post_form(REMOVE, &[("code", "999999")]).await).await;
    assert_eq!(view, "manager/remove/processPage");
    assert_eq!(model["key"], json!("code"));
    assert_eq!(model["error"], json!("NotFound.company"));
}

#[tokio::test]
async fn padded_company_name_is_stored_trimmed_and_blocks_duplicates() {
    let app = make_test_app([]);
    let res = app
        .post_form(ADD, &company_form(HYNIX_CODE, "  SK하이닉스 ", MEMORY))
        .await;
    let (_, model) = view_of(app.follow(res).await).await;
    assert_eq!(model["value"], json!(HYNIX));
    assert_eq!(app.companies.snapshot()[0].name.as_str(), HYNIX);

    let (_, model) = view_of(app.post_form(ADD, &company_form("123456", HYNIX, MEMORY)).await).await;
    assert_eq!(model["error"], json!("Exist.company.name"));

    let (_, model) = view_of(app.get("/company/%20SK%ED%95%98%EC%9D%B4%EB%8B%89%EC%8A%A4%20").await).await;
    assert_eq!(model["company"]["code"], json!(HYNIX_CODE));
}
