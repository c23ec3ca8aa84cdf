//! Entities as consumed from the content API.
//!
//! Nothing here is persisted by this layer; every struct mirrors a JSON shape
//! served by the backend and tolerates missing optional fields.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use thiserror::Error;

/// Treat an explicit JSON `null` the same as a missing field.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// A published article.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Article {
    /// Numeric primary key.
    pub id: u64,
    /// URL slug, when the backend assigned one.
    #[serde(default)]
    pub slug: Option<String>,
    /// Display title.
    pub title: String,
    /// Markdown body.
    #[serde(default, deserialize_with = "null_as_default")]
    pub content: String,
    /// Raw publication timestamp, RFC 3339 or `YYYY-MM-DD`.
    #[serde(default, deserialize_with = "null_as_default")]
    pub published_at: String,
    /// Creation timestamp, used when `published_at` is absent.
    #[serde(default)]
    pub created_at: Option<String>,
    /// Category foreign key.
    #[serde(default)]
    pub category: Option<u64>,
    /// Tag foreign keys.
    #[serde(default, deserialize_with = "null_as_default")]
    pub tags: Vec<u64>,
    /// Author foreign key.
    #[serde(default)]
    pub author: Option<u64>,
    /// Whether the article is pinned on the home page.
    #[serde(default, alias = "featured")]
    pub is_featured: bool,
    /// View counter maintained by the backend.
    #[serde(default, alias = "views")]
    pub read_count: Option<u64>,
    /// Short teaser shown on cards.
    #[serde(default, alias = "excerpt")]
    pub summary: Option<String>,
    /// Cover image URL.
    #[serde(default, alias = "featured_image")]
    pub image: Option<String>,
}

impl Article {
    /// Parsed publication time, `None` when the timestamp is malformed.
    pub fn published(&self) -> Option<DateTime<Utc>> {
        parse_timestamp(&self.published_at)
            .or_else(|| self.created_at.as_deref().and_then(parse_timestamp))
    }

    /// Path segment used to address this article: the slug when present,
    /// otherwise the numeric id.
    pub fn route_key(&self) -> String {
        match self.slug.as_deref().map(str::trim) {
            Some(slug) if !slug.is_empty() => slug.to_string(),
            _ => self.id.to_string(),
        }
    }

    /// Publication date formatted as `YYYY-MM-DD`, falling back to the raw
    /// value when it cannot be parsed.
    pub fn display_date(&self) -> String {
        self.published()
            .map(|ts| ts.format("%Y-%m-%d").to_string())
            .unwrap_or_else(|| self.published_at.clone())
    }
}

/// Parse the timestamp formats the backend emits.
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
        return Some(ts.with_timezone(&Utc));
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(naive.and_utc());
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

/// Article author.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Author {
    pub id: u64,
    #[serde(default)]
    pub slug: Option<String>,
    pub name: String,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    pub avatar: Option<String>,
    #[serde(default)]
    pub linkedin: Option<String>,
}

impl Author {
    /// Path segment for the author detail page.
    pub fn route_key(&self) -> String {
        match self.slug.as_deref().map(str::trim) {
            Some(slug) if !slug.is_empty() => slug.to_string(),
            _ => self.id.to_string(),
        }
    }
}

/// Aggregate served by `/authors/{slug}/details`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthorDetails {
    pub author: Author,
    #[serde(default, deserialize_with = "null_as_default")]
    pub articles: Vec<Article>,
    #[serde(default)]
    pub article_count: Option<u64>,
    #[serde(default)]
    pub total_reads: Option<u64>,
}

impl AuthorDetails {
    /// Number of articles, preferring the backend's count over the list.
    pub fn article_total(&self) -> u64 {
        self.article_count
            .unwrap_or(self.articles.len() as u64)
    }
}

/// Article tag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tag {
    pub id: u64,
    pub name: String,
}

/// Article category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub slug: Option<String>,
    /// Present when the list was requested with `count_posts=true`.
    #[serde(default, alias = "posts_count", alias = "count")]
    pub post_count: Option<u64>,
}

impl Category {
    /// Path segment for the category page.
    pub fn route_key(&self) -> String {
        match self.slug.as_deref().map(str::trim) {
            Some(slug) if !slug.is_empty() => slug.to_string(),
            _ => self.id.to_string(),
        }
    }
}

/// Reader comment on an article.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comment {
    pub name: String,
    pub content: String,
    #[serde(default)]
    pub rating: Option<u8>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub created_at: String,
}

/// Highest star rating a comment can carry.
pub const MAX_RATING: u8 = 5;

/// Why a comment form was not submitted.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommentRejected {
    #[error("name is required")]
    EmptyName,
    #[error("comment is empty")]
    EmptyContent,
    #[error("rating must be between 1 and 5, got {0}")]
    RatingOutOfRange(u8),
}

/// Payload for `POST /articles/{id}/comments/`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NewComment {
    pub name: String,
    pub content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating: Option<u8>,
}

impl NewComment {
    /// Trim the text fields and check them before anything goes on the wire.
    pub fn validated(self) -> Result<Self, CommentRejected> {
        let name = self.name.trim().to_string();
        let content = self.content.trim().to_string();
        if name.is_empty() {
            return Err(CommentRejected::EmptyName);
        }
        if content.is_empty() {
            return Err(CommentRejected::EmptyContent);
        }
        if let Some(rating) = self.rating {
            if !(1..=MAX_RATING).contains(&rating) {
                return Err(CommentRejected::RatingOutOfRange(rating));
            }
        }
        Ok(Self {
            name,
            content,
            rating: self.rating,
        })
    }
}

/// Full record of a restriction placed on the current session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BanDetails {
    pub id: u64,
    #[serde(default)]
    pub reason: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub expires_at: Option<String>,
}

/// Answer of `/check-ban-status/`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BanStatus {
    #[serde(default, alias = "banned")]
    pub is_banned: bool,
    #[serde(default)]
    pub ban_id: Option<u64>,
    #[serde(default)]
    pub reason: Option<String>,
    #[serde(default)]
    pub expires_at: Option<String>,
}

/// Substitute credential returned by `/super/impersonate/{slug}/`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImpersonationGrant {
    pub token: String,
    /// Slug of the author now being acted as.
    #[serde(default, alias = "author_slug")]
    pub author: Option<String>,
    #[serde(default)]
    pub author_name: Option<String>,
}

/// Result of exchanging a GitHub OAuth code.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TokenExchange {
    #[serde(alias = "access_token", alias = "key")]
    pub token: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn article_tolerates_sparse_payload() {
        let article: Article = serde_json::from_str(
            r#"{"id": 7, "title": "Helm basics", "content": null, "tags": null,
                "created_at": "2024-03-01", "featured": true}"#,
        )
        .expect("decode article");

        assert_eq!(article.id, 7);
        assert!(article.content.is_empty());
        assert!(article.tags.is_empty());
        assert!(article.is_featured);
        assert!(article.published_at.is_empty());
        assert_eq!(article.display_date(), "2024-03-01");
        assert_eq!(article.route_key(), "7");
    }

    #[test]
    fn parses_backend_timestamp_formats() {
        let rfc = parse_timestamp("2024-05-02T10:00:00+02:00").expect("rfc3339");
        assert_eq!(rfc.to_rfc3339(), "2024-05-02T08:00:00+00:00");

        let naive = parse_timestamp("2024-05-02T10:00:00.123456").expect("naive");
        assert_eq!(naive.format("%H:%M").to_string(), "10:00");

        let date = parse_timestamp("2024-05-02").expect("date");
        assert_eq!(date.format("%Y-%m-%d %H:%M").to_string(), "2024-05-02 00:00");

        assert!(parse_timestamp("yesterday").is_none());
        assert!(parse_timestamp("  ").is_none());
    }

    #[test]
    fn new_comment_validation_trims_and_checks_rating() {
        let ok = NewComment {
            name: "  Ana ".to_string(),
            content: " Great lab ".to_string(),
            rating: Some(5),
        }
        .validated()
        .expect("valid comment");
        assert_eq!(ok.name, "Ana");
        assert_eq!(ok.content, "Great lab");

        let blank = NewComment {
            name: " ".to_string(),
            content: "x".to_string(),
            rating: None,
        };
        assert_eq!(blank.validated(), Err(CommentRejected::EmptyName));

        let zero = NewComment {
            name: "Ana".to_string(),
            content: "x".to_string(),
            rating: Some(0),
        };
        assert_eq!(zero.validated(), Err(CommentRejected::RatingOutOfRange(0)));
    }
}
