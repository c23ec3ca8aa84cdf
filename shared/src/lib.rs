//! Data model and view logic shared by the OpsLearn frontend and CLI.
//!
//! Everything in here is pure and synchronous over already-fetched data, so
//! it compiles for `wasm32` as well as native targets.

pub mod article_page;
pub mod endpoints;
pub mod error;
pub mod filter;
pub mod generation;
pub mod headings;
pub mod models;
pub mod pagination;
pub mod relations;
pub mod response;
pub mod session;
pub mod taxonomy;

pub use article_page::ArticlePage;
pub use error::ApiError;
pub use headings::{extract_headings, Heading, TableOfContents};
pub use models::{
    Article, Author, AuthorDetails, BanDetails, BanStatus, Category, Comment,
    ImpersonationGrant, NewComment, Tag, TokenExchange,
};
pub use pagination::Paginator;
pub use relations::ArticleRelations;
