//! Native client for the content API.
//!
//! Collection calls never fail: transport errors, bad statuses and
//! malformed bodies all come back as an empty list. Entity calls come back
//! as `None`. Only the write/admin calls surface an [`ApiError`].

use std::time::Duration;

use anyhow::{Context, Result};
use opslearn_shared::{
    endpoints::{ArticleQuery, Endpoints},
    response::{collection_or_empty, decode_entity, decode_list, entity_or_none},
    ApiError, Article, ArticlePage, Author, AuthorDetails, BanDetails, BanStatus, Category,
    Comment, ImpersonationGrant, NewComment, Tag, TokenExchange,
};
use serde::{de::DeserializeOwned, Serialize};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(15);

pub struct ApiClient {
    http: reqwest::Client,
    endpoints: Endpoints,
    token: Option<String>,
}

fn network(err: reqwest::Error) -> ApiError {
    ApiError::Network(err.to_string())
}

impl ApiClient {
    pub fn new(base: &str, token: Option<String>) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .user_agent(concat!("ol-cli/", env!("CARGO_PKG_VERSION")))
            .build()
            .context("failed to build HTTP client")?;
        Ok(Self {
            http,
            endpoints: Endpoints::new(base),
            token: token.filter(|t| !t.trim().is_empty()),
        })
    }

    pub fn endpoints(&self) -> &Endpoints {
        &self.endpoints
    }

    fn authorize(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match &self.token {
            Some(token) => request.header(reqwest::header::AUTHORIZATION, format!("Token {token}")),
            None => request,
        }
    }

    async fn send(&self, request: reqwest::RequestBuilder) -> Result<String, ApiError> {
        let response = self.authorize(request).send().await.map_err(network)?;
        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::from_status(status.as_u16()));
        }
        response.text().await.map_err(network)
    }

    async fn get_list<T: DeserializeOwned>(&self, url: &str) -> Result<Vec<T>, ApiError> {
        tracing::debug!("GET {url}");
        let body = self.send(self.http.get(url)).await?;
        decode_list(&body)
    }

    async fn get_entity<T: DeserializeOwned>(&self, url: &str) -> Result<T, ApiError> {
        tracing::debug!("GET {url}");
        let body = self.send(self.http.get(url)).await?;
        decode_entity(&body)
    }

    async fn post_json<B: Serialize, T: DeserializeOwned>(
        &self,
        url: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        tracing::debug!("POST {url}");
        let body = self.send(self.http.post(url).json(body)).await?;
        decode_entity(&body)
    }

    pub async fn articles(&self, query: &ArticleQuery) -> Vec<Article> {
        let url = self.endpoints.articles(query);
        collection_or_empty("articles", self.get_list(&url).await)
    }

    pub async fn article(&self, key: &str) -> Option<Article> {
        let url = self.endpoints.article(key);
        entity_or_none("article", self.get_entity(&url).await)
    }

    pub async fn authors(&self) -> Vec<Author> {
        collection_or_empty("authors", self.get_list(&self.endpoints.authors()).await)
    }

    pub async fn author(&self, key: &str) -> Option<Author> {
        entity_or_none("author", self.get_entity(&self.endpoints.author(key)).await)
    }

    pub async fn author_details(&self, slug: &str) -> Option<AuthorDetails> {
        let url = self.endpoints.author_details(slug);
        entity_or_none("author details", self.get_entity(&url).await)
    }

    pub async fn tags(&self) -> Vec<Tag> {
        collection_or_empty("tags", self.get_list(&self.endpoints.tags()).await)
    }

    pub async fn categories(&self, count_posts: bool) -> Vec<Category> {
        let url = self.endpoints.categories(count_posts);
        collection_or_empty("categories", self.get_list(&url).await)
    }

    pub async fn comments(&self, article_id: u64) -> Vec<Comment> {
        let url = self.endpoints.comments(article_id);
        collection_or_empty("comments", self.get_list(&url).await)
    }

    /// Validates locally first; nothing is sent for a rejected form.
    pub async fn post_comment(&self, article_id: u64, comment: NewComment) -> Result<Comment, ApiError> {
        let comment = comment.validated()?;
        self.post_json(&self.endpoints.comments(article_id), &comment)
            .await
    }

    pub async fn impersonate(&self, author_slug: &str) -> Result<ImpersonationGrant, ApiError> {
        let url = self.endpoints.impersonate(author_slug);
        self.post_json(&url, &serde_json::json!({})).await
    }

    pub async fn ban_status(&self) -> Option<BanStatus> {
        let url = self.endpoints.check_ban_status();
        entity_or_none("ban status", self.get_entity(&url).await)
    }

    pub async fn ban_details(&self) -> Option<BanDetails> {
        let url = self.endpoints.ban_details();
        entity_or_none("ban details", self.get_entity(&url).await)
    }

    pub async fn exchange_github_code(&self, code: &str) -> Result<TokenExchange, ApiError> {
        let url = self.endpoints.github_exchange();
        self.post_json(&url, &serde_json::json!({ "code": code }))
            .await
    }

    /// Fetch everything an article page needs concurrently and join it.
    ///
    /// The author comes from the authors list, joined on the article's
    /// author id like tags and categories.
    pub async fn article_page(&self, key: &str) -> Option<ArticlePage> {
        let all_query = ArticleQuery::default();
        let (article, authors, all_articles, tags, categories) = tokio::join!(
            self.article(key),
            self.authors(),
            self.articles(&all_query),
            self.tags(),
            self.categories(false),
        );

        Some(ArticlePage::compose(article?, &authors, &all_articles, &tags, &categories))
    }
}
