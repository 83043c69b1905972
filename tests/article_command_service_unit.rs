// tests/article_command_service_unit.rs
mod support;

use std::sync::Arc;

use corpnews::application::commands::articles::{ArticleCommandService, RemoveArticleCommand};
use corpnews::application::dto::ArticleBatchDto;
use corpnews::application::error::ApplicationError;
use corpnews::application::queries::articles::{ArticleQueryService, ArticlesByDateQuery};
use support::{
    ArticleFormBuilder, FixedClock, HYNIX, InMemoryArticleRepo, InMemoryCompanyRepo, SAMSUNG,
    date, hynix, samsung,
};

fn service() -> (ArticleCommandService, ArticleQueryService, Arc<InMemoryArticleRepo>) {
    let articles = Arc::new(InMemoryArticleRepo::default());
    let companies = Arc::new(InMemoryCompanyRepo::with([samsung(), hynix()]));
    let commands = ArticleCommandService::new(
        articles.clone(),
        articles.clone(),
        companies,
        Arc::new(FixedClock),
    );
    let queries = ArticleQueryService::new(articles.clone());
    (commands, queries, articles)
}

#[tokio::test]
async fn registered_article_gets_increasing_numbers() {
    let (commands, _, _) = service();
    let first = commands
        .register_article(&ArticleFormBuilder::new("하나").build())
        .await
        .unwrap();
    let second = commands
        .register_article(&ArticleFormBuilder::new("둘").build())
        .await
        .unwrap();
    assert!(second.number > first.number);
    assert_eq!(first.press_label, "매일경제");
}

#[tokio::test]
async fn future_date_relative_to_clock_is_rejected() {
    let (commands, _, articles) = service();
    let dto = ArticleFormBuilder::new("내일 기사").date(2024, 1, 2).build();

    let err = commands.register_article(&dto).await.unwrap_err();
    match err {
        ApplicationError::Invalid(errors) => {
            assert_eq!(errors.get("date"), Some("Range.article.date"));
        }
        other => panic!("unexpected error: {other:?}"),
    }
    assert!(articles.snapshot().is_empty());

    let today = ArticleFormBuilder::new("오늘 기사").date(2024, 1, 1).build();
    assert!(commands.register_article(&today).await.is_ok());
}

#[tokio::test]
async fn batch_rejects_duplicate_links_inside_the_batch() {
    let (commands, _, articles) = service();
    let batch = ArticleBatchDto {
        name_date_press_string: "가\n(YONHAP, 2023-1-1)\n나\n(YONHAP, 2023-1-2)".into(),
        subject_company: HYNIX.into(),
        link_string: "https://news.example.com/same\nhttps://news.example.com/same".into(),
    };

    let err = commands.register_articles_from_text(&batch).await.unwrap_err();
    assert_eq!(err.business_message(), Some("Exist.article.link"));
    assert!(articles.snapshot().is_empty());
}

#[tokio::test]
async fn batch_with_mismatched_blocks_is_a_business_error() {
    let (commands, _, _) = service();
    let batch = ArticleBatchDto {
        name_date_press_string: "가\n(YONHAP, 2023-1-1)".into(),
        subject_company: SAMSUNG.into(),
        link_string: String::new(),
    };
    let err = commands.register_articles_from_text(&batch).await.unwrap_err();
    assert_eq!(err.business_message(), Some("Mismatch.article.count"));
}

#[tokio::test]
async fn update_of_missing_article_is_not_found() {
    let (commands, _, _) = service();
    let err = commands
        .update_article(&ArticleFormBuilder::new("없음").build())
        .await
        .unwrap_err();
    assert!(matches!(err, ApplicationError::NotFound(key) if key == "NotFound.article.name"));
}

#[tokio::test]
async fn remove_by_name_returns_removed_name() {
    let (commands, queries, _) = service();
    commands
        .register_article(&ArticleFormBuilder::new("42번째 기사").build())
        .await
        .unwrap();

    let removed = commands
        .remove_article(RemoveArticleCommand::parse("42번째 기사"))
        .await
        .unwrap();
    assert_eq!(removed, "42번째 기사");
    assert!(queries.find_by_name("42번째 기사").await.unwrap().is_none());
}

#[tokio::test]
async fn date_queries_are_inclusive() {
    let (commands, queries, _) = service();
    for (name, day) in [("a", 1), ("b", 15), ("c", 30)] {
        commands
            .register_article(&ArticleFormBuilder::new(name).date(2023, 11, day).build())
            .await
            .unwrap();
    }

    let found = queries
        .articles_by_date(ArticlesByDateQuery::Between(date(2023, 11, 1), date(2023, 11, 15)))
        .await
        .unwrap();
    let names: Vec<_> = found.iter().map(|a| a.name.as_str()).collect();
    assert_eq!(names, ["a", "b"]);

    let err = queries
        .find_by_date_range(date(2023, 11, 30), date(2023, 11, 1))
        .await
        .unwrap_err();
    assert_eq!(err.business_message(), Some("Range.article.period"));
}

#[tokio::test]
async fn padded_name_is_stored_trimmed_and_removable_as_submitted() {
    let (commands, queries, articles) = service();
    let dto = ArticleFormBuilder::new(" 패딩 기사 ")
        .company(" 삼성전자 ")
        .link("https://news.example.com/padded ")
        .build();

    let created = commands.register_article(&dto).await.unwrap();
    assert_eq!(created.name, "패딩 기사");
    assert_eq!(created.subject_company, SAMSUNG);
    assert_eq!(created.link, "https://news.example.com/padded");

    let removed = commands
        .remove_article(RemoveArticleCommand::parse(" 패딩 기사 "))
        .await
        .unwrap();
    assert_eq!(removed, "패딩 기사");
    assert!(queries.list_articles().await.unwrap().is_empty());
    assert!(articles.snapshot().is_empty());
}

#[tokio::test]
async fn padded_name_is_found_for_update() {
    let (commands, queries, _) = service();
    commands
        .register_article(&ArticleFormBuilder::new("수정할 기사 ").build())
        .await
        .unwrap();

    let found = queries.find_by_number_or_name(" 수정할 기사 ").await.unwrap();
    assert_eq!(found.map(|a| a.name).as_deref(), Some("수정할 기사"));

    let edited = ArticleFormBuilder::new(" 수정할 기사").importance(2).build();
    let updated = commands.update_article(&edited).await.unwrap();
    assert_eq!(updated.importance, 2);
}

#[tokio::test]
async fn padded_link_is_accepted_not_leaked_as_domain_error() {
    let (commands, _, articles) = service();
    let dto = ArticleFormBuilder::new("링크 공백")
        .link("https://news.example.com/trailing   ")
        .build();

    commands.register_article(&dto).await.unwrap();
    assert_eq!(
        articles.snapshot()[0].link.as_str(),
        "https://news.example.com/trailing"
    );

    let same_link = ArticleFormBuilder::new("다른 기사")
        .link(" https://news.example.com/trailing")
        .build();
    let err = commands.register_article(&same_link).await.unwrap_err();
    assert_eq!(err.business_message(), Some("Exist.article.link"));
}
