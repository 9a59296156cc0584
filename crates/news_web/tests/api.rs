use std::sync::Arc;

use axum::body::{to_bytes, Body};
use axum::http::{header, Request, StatusCode};
use axum::Router;
use chrono::{Duration, TimeZone, Utc};
use news_core::upstream::StatusCode as UpstreamStatus;
use news_core::{NewsApiConfig, NewsApiResponse, UpstreamArticle, UpstreamSource};
use news_fetch::{NewsService, StaticNewsClient};
use news_storage::InMemoryStore;
use news_web::{create_app, AppState};
use serde_json::Value;
use tower::ServiceExt;

fn record(n: i64) -> UpstreamArticle {
    UpstreamArticle {
        source: Some(UpstreamSource {
            id: Some(format!("s{}", n)),
            name: Some(format!("Source Name {}", n)),
        }),
        author: Some(format!("Author {}", n)),
        title: format!("Title {}", n),
        description: Some(format!("Description {}", n)),
        url: Some("http://test.com/".to_string()),
        published_at: Utc.with_ymd_and_hms(2024, 2, 1, 10, 0, 0).unwrap() + Duration::minutes(n),
    }
}

fn app_with(client: StaticNewsClient, config: NewsApiConfig) -> Router {
    let service = NewsService::new(config, Arc::new(client), Arc::new(InMemoryStore::new()));
    create_app(AppState::new(service))
}

fn app(records: Vec<UpstreamArticle>) -> Router {
    let client = StaticNewsClient::ok(NewsApiResponse {
        status: "ok".to_string(),
        articles: records,
    });
    app_with(client, NewsApiConfig::new("http://news.test/v2/", "test-key"))
}

async fn get(app: &Router, uri: &str) -> (StatusCode, Vec<u8>) {
    let response = app
        .clone()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, body.to_vec())
}

#[tokio::test]
async fn test_fetch_news_returns_list() {
    let app = app(vec![record(1)]);
    let response = app
        .clone()
        .oneshot(Request::builder().uri("/api/news").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers()[header::CONTENT_TYPE],
        "application/json"
    );
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json: Value = serde_json::from_slice(&body).unwrap();
    let articles = json.as_array().unwrap();
    assert_eq!(articles.len(), 1);
    assert_eq!(articles[0]["id"], 1);
    assert_eq!(articles[0]["author"], "Author 1");
    assert_eq!(articles[0]["source"], "Source Name 1");
    assert_eq!(articles[0]["publishedAt"], "2024-02-01T10:01:00Z");
}

#[tokio::test]
async fn test_fetch_news_no_content_when_upstream_fails() {
    let app = app_with(
        StaticNewsClient::failing(UpstreamStatus::BAD_REQUEST),
        NewsApiConfig::new("http://news.test/v2/", "test-key"),
    );
    let (status, body) = get(&app, "/api/news").await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    assert!(body.is_empty());
}

#[tokio::test]
async fn test_fetch_news_server_error_without_api_key() {
    let app = app_with(
        StaticNewsClient::ok(NewsApiResponse {
            status: "ok".to_string(),
            articles: vec![record(1)],
        }),
        NewsApiConfig::new("http://news.test/v2/", ""),
    );
    let (status, _) = get(&app, "/api/news").await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn test_paginated_returns_newest_first() {
    let app = app((1..=8).map(record).collect());
    let (status, _) = get(&app, "/api/news").await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = get(&app, "/api/news/paginated?page=0&size=5").await;
    assert_eq!(status, StatusCode::OK);
    let json: Value = serde_json::from_slice(&body).unwrap();
    let titles: Vec<_> = json
        .as_array()
        .unwrap()
        .iter()
        .map(|a| a["title"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(titles, vec!["Title 8", "Title 7", "Title 6", "Title 5", "Title 4"]);

    let (status, body) = get(&app, "/api/news/paginated?page=1&size=5").await;
    assert_eq!(status, StatusCode::OK);
    let json: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json.as_array().unwrap().len(), 3);

    let (status, body) = get(&app, "/api/news/paginated").await;
    assert_eq!(status, StatusCode::OK);
    let json: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json.as_array().unwrap().len(), 8);
}

#[tokio::test]
async fn test_paginated_empty_store_is_no_content() {
    let app = app(vec![]);
    let (status, _) = get(&app, "/api/news/paginated?page=0&size=5").await;
    assert_eq!(status, StatusCode::NO_CONTENT);
}

#[tokio::test]
async fn test_paginated_invalid_parameters() {
    let app = app(vec![record(1)]);
    for uri in [
        "/api/news/paginated?page=-1&size=5",
        "/api/news/paginated?page=0&size=0",
        "/api/news/paginated?page=0&size=-2",
        "/api/news/paginated?page=abc",
    ] {
        let (status, body) = get(&app, uri).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{}", uri);
        assert!(String::from_utf8(body)
            .unwrap()
            .contains("Invalid request parameters"));
    }
}

#[tokio::test]
async fn test_custom_path() {
    let app = app(vec![record(1), record(2)]);
    let (status, body) = get(&app, "/api/news/custom?path=everything%3Fq%3Drust").await;
    assert_eq!(status, StatusCode::OK);
    let json: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json.as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn test_custom_path_requires_path() {
    let app = app(vec![record(1)]);
    for uri in ["/api/news/custom", "/api/news/custom?path="] {
        let (status, body) = get(&app, uri).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{}", uri);
        assert_eq!(body, b"Invalid request parameters");
    }
}
