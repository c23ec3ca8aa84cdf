use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Default address of the content API during local development.
pub const DEFAULT_API_BASE: &str = "http://localhost:8000/api";

#[derive(Parser)]
#[command(name = "ol-cli", version, about = "OpsLearn content API CLI")]
pub struct Cli {
    /// Base URL of the content API.
    #[arg(long, global = true, env = "API_BASE_URL", default_value = DEFAULT_API_BASE)]
    pub api_base: String,
    /// Auth token sent as `Authorization: Token <token>`.
    #[arg(long, global = true, env = "OPSLEARN_TOKEN", hide_env_values = true)]
    pub token: Option<String>,
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// GET /articles/ with optional filters, one page at a time.
    Articles {
        /// Full-text search term.
        #[arg(long)]
        search: Option<String>,
        /// Category slug filter.
        #[arg(long)]
        category: Option<String>,
        /// Only featured articles.
        #[arg(long)]
        featured: bool,
        /// 1-based page number.
        #[arg(long, default_value_t = 1)]
        page: usize,
        /// Articles per page.
        #[arg(long, default_value_t = 6)]
        page_size: usize,
    },
    /// Show one article with its table of contents and related articles.
    Article {
        /// Numeric id or slug.
        key: String,
    },
    /// Print the table of contents of a local markdown file.
    Toc {
        /// Markdown file path.
        file: PathBuf,
        /// Print the flat list with anchor ids instead of the tree.
        #[arg(long)]
        flat: bool,
    },
    /// GET /authors/
    Authors,
    /// GET /authors/{slug}/details
    Author {
        /// Author slug.
        slug: String,
    },
    /// GET /categories/
    Categories {
        /// Include post counts.
        #[arg(long)]
        counts: bool,
    },
    /// GET /tags/
    Tags,
    /// GET /articles/{id}/comments/
    Comments {
        /// Article id.
        article_id: u64,
    },
    /// POST /articles/{id}/comments/
    Comment {
        /// Article id.
        article_id: u64,
        /// Display name.
        #[arg(long)]
        name: String,
        /// Comment text.
        #[arg(long)]
        content: String,
        /// Star rating from 1 to 5.
        #[arg(long)]
        rating: Option<u8>,
    },
    /// GET /check-ban-status/ and, when banned, /ban-details/
    BanStatus,
    /// POST /super/impersonate/{slug}/ (administrators only).
    Impersonate {
        /// Slug of the author to act as.
        slug: String,
    },
    /// POST /auth/github/exchange-token
    GithubExchange {
        /// OAuth code from the GitHub redirect.
        code: String,
    },
}
