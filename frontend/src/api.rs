use gloo_net::http::{Request, RequestBuilder};
use opslearn_shared::{
    endpoints::{ArticleQuery, Endpoints},
    response::{collection_or_empty_with, decode_entity, decode_list, entity_or_none_with},
    ApiError, Article, ArticlePage, Author, AuthorDetails, BanDetails, BanStatus, Category,
    Comment, ImpersonationGrant, NewComment, Tag, TokenExchange,
};
use serde::{de::DeserializeOwned, Serialize};

use crate::config::API_BASE_URL;

fn endpoints() -> Endpoints {
    Endpoints::new(API_BASE_URL)
}

fn with_auth(request: RequestBuilder, authorization: Option<&str>) -> RequestBuilder {
    match authorization {
        Some(value) => request.header("Authorization", value),
        None => request,
    }
}

async fn read_body(request: Request) -> Result<String, ApiError> {
    let response = request
        .send()
        .await
        .map_err(|e| ApiError::Network(format!("{:?}", e)))?;

    if !response.ok() {
        return Err(ApiError::from_status(response.status()));
    }

    response
        .text()
        .await
        .map_err(|e| ApiError::Network(format!("{:?}", e)))
}

async fn get_list<T: DeserializeOwned>(
    url: &str,
    authorization: Option<&str>,
) -> Result<Vec<T>, ApiError> {
    let request = with_auth(Request::get(url), authorization)
        .build()
        .map_err(|e| ApiError::Network(format!("{:?}", e)))?;
    decode_list(&read_body(request).await?)
}

async fn get_entity<T: DeserializeOwned>(
    url: &str,
    authorization: Option<&str>,
) -> Result<T, ApiError> {
    let request = with_auth(Request::get(url), authorization)
        .build()
        .map_err(|e| ApiError::Network(format!("{:?}", e)))?;
    decode_entity(&read_body(request).await?)
}

async fn post_json<B: Serialize, T: DeserializeOwned>(
    url: &str,
    body: &B,
    authorization: Option<&str>,
) -> Result<T, ApiError> {
    let request = with_auth(Request::post(url), authorization)
        .json(body)
        .map_err(|e| ApiError::Decode(format!("Serialize error: {:?}", e)))?;
    decode_entity(&read_body(request).await?)
}

fn log_failure(what: &str, err: &ApiError) {
    web_sys::console::error_1(&format!("Failed to fetch {}: {}", what, err).into());
}

/// Collection endpoints never fail towards the page: any error is logged
/// and becomes an empty list.
fn or_empty<T>(what: &str, result: Result<Vec<T>, ApiError>) -> Vec<T> {
    collection_or_empty_with(what, result, log_failure)
}

/// Entity endpoints collapse every error into `None`; a plain 404 is not
/// worth a console entry.
fn or_none<T>(what: &str, result: Result<T, ApiError>) -> Option<T> {
    entity_or_none_with(what, result, log_failure)
}

/// 获取文章列表，支持按分类和关键字过滤
pub async fn fetch_articles(query: &ArticleQuery) -> Vec<Article> {
    or_empty("articles", get_list(&endpoints().articles(query), None).await)
}

/// 获取文章详情（id 或 slug）
pub async fn fetch_article(key: &str) -> Option<Article> {
    or_none("article", get_entity(&endpoints().article(key), None).await)
}

/// The authors page offers a retry button, so it needs to know about
/// failures instead of receiving an empty list.
pub async fn fetch_authors() -> Result<Vec<Author>, ApiError> {
    get_list(&endpoints().authors(), None)
        .await
        .inspect_err(|err| log_failure("authors", err))
}

pub async fn fetch_author_details(slug: &str) -> Option<AuthorDetails> {
    or_none("author details", get_entity(&endpoints().author_details(slug), None).await)
}

pub async fn fetch_tags() -> Vec<Tag> {
    or_empty("tags", get_list(&endpoints().tags(), None).await)
}

pub async fn fetch_categories(count_posts: bool) -> Vec<Category> {
    or_empty("categories", get_list(&endpoints().categories(count_posts), None).await)
}

pub async fn fetch_comments(article_id: u64) -> Vec<Comment> {
    or_empty("comments", get_list(&endpoints().comments(article_id), None).await)
}

pub async fn submit_comment(
    article_id: u64,
    comment: NewComment,
    authorization: Option<&str>,
) -> Result<Comment, ApiError> {
    let comment = comment.validated()?;
    post_json(&endpoints().comments(article_id), &comment, authorization).await
}

pub async fn impersonate(
    author_slug: &str,
    authorization: Option<&str>,
) -> Result<ImpersonationGrant, ApiError> {
    post_json(&endpoints().impersonate(author_slug), &serde_json::json!({}), authorization).await
}

pub async fn check_ban_status(authorization: Option<&str>) -> Option<BanStatus> {
    or_none("ban status", get_entity(&endpoints().check_ban_status(), authorization).await)
}

pub async fn fetch_ban_details(authorization: Option<&str>) -> Option<BanDetails> {
    or_none("ban details", get_entity(&endpoints().ban_details(), authorization).await)
}

pub async fn exchange_github_code(code: &str) -> Result<TokenExchange, ApiError> {
    post_json(&endpoints().github_exchange(), &serde_json::json!({ "code": code }), None).await
}

/// Everything the article page renders. All five requests run
/// concurrently; the author is joined from the authors list by id.
pub async fn fetch_article_page(key: &str) -> Option<ArticlePage> {
    let query = ArticleQuery::default();
    let (article, authors, all_articles, tags, categories) = futures::join!(
        fetch_article(key),
        fetch_authors(),
        fetch_articles(&query),
        fetch_tags(),
        fetch_categories(false),
    );
    let authors = collection_or_empty_with("authors", authors, |_, _| ());

    Some(ArticlePage::compose(article?, &authors, &all_articles, &tags, &categories))
}
