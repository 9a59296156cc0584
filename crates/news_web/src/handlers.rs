use axum::{
    extract::{rejection::QueryRejection, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use news_core::types::{DEFAULT_PAGE, DEFAULT_PAGE_SIZE};
use news_core::{Article, Error};
use serde::Deserialize;
use std::sync::Arc;

use crate::{ApiError, AppState};

#[derive(Debug, Deserialize)]
pub struct PageParams {
    #[serde(default = "default_page")]
    pub page: i64,
    #[serde(default = "default_size")]
    pub size: i64,
}

fn default_page() -> i64 {
    DEFAULT_PAGE
}

fn default_size() -> i64 {
    DEFAULT_PAGE_SIZE
}

#[derive(Debug, Deserialize)]
pub struct CustomPathParams {
    pub path: String,
}

fn articles_response(articles: Vec<Article>) -> Response {
    if articles.is_empty() {
        return StatusCode::NO_CONTENT.into_response();
    }
    Json(articles).into_response()
}

fn bad_query(rejection: QueryRejection) -> ApiError {
    ApiError(Error::InvalidArgument(rejection.body_text()))
}

pub async fn fetch_news(State(state): State<Arc<AppState>>) -> Result<Response, ApiError> {
    let articles = state.service.fetch_articles().await?;
    Ok(articles_response(articles))
}

pub async fn fetch_news_paginated(
    State(state): State<Arc<AppState>>,
    params: Result<Query<PageParams>, QueryRejection>,
) -> Result<Response, ApiError> {
    let Query(params) = params.map_err(bad_query)?;
    let articles = state
        .service
        .find_paginated(params.page, params.size)
        .await?;
    Ok(articles_response(articles))
}

pub async fn fetch_news_with_custom_path(
    State(state): State<Arc<AppState>>,
    params: Result<Query<CustomPathParams>, QueryRejection>,
) -> Result<Response, ApiError> {
    let Query(params) = params.map_err(bad_query)?;
    let articles = state.service.fetch_articles_with_path(&params.path).await?;
    Ok(articles_response(articles))
}
