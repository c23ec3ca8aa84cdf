//! URLs of the content API.

/// Filters accepted by `GET /articles/`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArticleQuery {
    pub category: Option<u64>,
    pub category_slug: Option<String>,
    pub search: Option<String>,
}

impl ArticleQuery {
    pub fn by_category_slug(slug: impl Into<String>) -> Self {
        Self {
            category_slug: Some(slug.into()),
            ..Self::default()
        }
    }

    pub fn search(term: impl Into<String>) -> Self {
        Self {
            search: Some(term.into()),
            ..Self::default()
        }
    }

    fn params(&self) -> Vec<(&'static str, String)> {
        let mut params = Vec::new();
        if let Some(category) = self.category {
            params.push(("category", category.to_string()));
        }
        if let Some(slug) = non_blank(self.category_slug.as_deref()) {
            params.push(("category__slug", slug.to_string()));
        }
        if let Some(term) = non_blank(self.search.as_deref()) {
            params.push(("search", term.to_string()));
        }
        params
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

fn with_query(mut url: String, params: &[(&str, String)]) -> String {
    if params.is_empty() {
        return url;
    }
    url.push('?');
    let encoded: Vec<String> = params
        .iter()
        .map(|(key, value)| format!("{key}={}", urlencoding::encode(value)))
        .collect();
    url.push_str(&encoded.join("&"));
    url
}

/// Builds collaborator URLs under one base such as
/// `https://api.example.com/api`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    base: String,
}

impl Endpoints {
    /// A trailing slash on `base` is ignored.
    pub fn new(base: impl Into<String>) -> Self {
        let base = base.into();
        Self {
            base: base.trim_end_matches('/').to_string(),
        }
    }

    pub fn base(&self) -> &str {
        &self.base
    }

    fn path(&self, path: &str) -> String {
        format!("{}/{}", self.base, path)
    }

    fn segment(value: &str) -> String {
        urlencoding::encode(value.trim()).into_owned()
    }

    pub fn articles(&self, query: &ArticleQuery) -> String {
        with_query(self.path("articles/"), &query.params())
    }

    /// Article detail addressed by numeric id or slug.
    pub fn article(&self, key: &str) -> String {
        self.path(&format!("articles/{}/", Self::segment(key)))
    }

    pub fn comments(&self, article_id: u64) -> String {
        self.path(&format!("articles/{article_id}/comments/"))
    }

    pub fn authors(&self) -> String {
        self.path("authors/")
    }

    pub fn author(&self, key: &str) -> String {
        self.path(&format!("authors/{}/", Self::segment(key)))
    }

    pub fn author_details(&self, slug: &str) -> String {
        self.path(&format!("authors/{}/details", Self::segment(slug)))
    }

    pub fn tags(&self) -> String {
        self.path("tags/")
    }

    /// Category list; `count_posts` asks the backend to attach post counts.
    pub fn categories(&self, count_posts: bool) -> String {
        let url = self.path("categories/");
        if count_posts {
            with_query(url, &[("count_posts", "true".to_string())])
        } else {
            url
        }
    }

    pub fn impersonate(&self, author_slug: &str) -> String {
        self.path(&format!("super/impersonate/{}/", Self::segment(author_slug)))
    }

    pub fn ban_details(&self) -> String {
        self.path("ban-details/")
    }

    pub fn check_ban_status(&self) -> String {
        self.path("check-ban-status/")
    }

    pub fn github_exchange(&self) -> String {
        self.path("auth/github/exchange-token")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_article_urls_with_encoded_filters() {
        let api = Endpoints::new("https://api.example.com/api/");
        assert_eq!(api.articles(&ArticleQuery::default()), "https://api.example.com/api/articles/");
        assert_eq!(
            api.articles(&ArticleQuery::search("ci cd & gitops")),
            "https://api.example.com/api/articles/?search=ci%20cd%20%26%20gitops"
        );
        let query = ArticleQuery {
            category: Some(4),
            category_slug: Some("  ".to_string()),
            search: None,
        };
        assert_eq!(api.articles(&query), "https://api.example.com/api/articles/?category=4");
        assert_eq!(
            api.articles(&ArticleQuery::by_category_slug("devops")),
            "https://api.example.com/api/articles/?category__slug=devops"
        );
    }

    #[test]
    fn builds_entity_and_admin_urls() {
        let api = Endpoints::new("http://localhost:8000/api");
        assert_eq!(api.article("intro-to-k8s"), "http://localhost:8000/api/articles/intro-to-k8s/");
        assert_eq!(api.comments(12), "http://localhost:8000/api/articles/12/comments/");
        assert_eq!(api.author_details("ana"), "http://localhost:8000/api/authors/ana/details");
        assert_eq!(
            api.categories(true),
            "http://localhost:8000/api/categories/?count_posts=true"
        );
        assert_eq!(api.impersonate("ana"), "http://localhost:8000/api/super/impersonate/ana/");
        assert_eq!(api.check_ban_status(), "http://localhost:8000/api/check-ban-status/");
        assert_eq!(
            api.github_exchange(),
            "http://localhost:8000/api/auth/github/exchange-token"
        );
    }
}
