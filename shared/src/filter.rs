//! Client-side filtering over fetched article lists and the static course
//! and lab directories.

use crate::models::Article;

/// Case-insensitive substring match of `query` against any of `fields`.
/// A blank query matches everything.
pub fn matches_query(query: &str, fields: &[&str]) -> bool {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return true;
    }
    fields
        .iter()
        .any(|field| field.to_lowercase().contains(&needle))
}

/// Narrowing applied to an already fetched article list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArticleFilter {
    pub search: String,
    pub category: Option<u64>,
    pub featured_only: bool,
}

impl ArticleFilter {
    pub fn is_empty(&self) -> bool {
        self.search.trim().is_empty() && self.category.is_none() && !self.featured_only
    }

    pub fn matches(&self, article: &Article) -> bool {
        if self.featured_only && !article.is_featured {
            return false;
        }
        if let Some(category) = self.category {
            if article.category != Some(category) {
                return false;
            }
        }
        matches_query(&self.search, &[
            article.title.as_str(),
            article.summary.as_deref().unwrap_or_default(),
        ])
    }

    /// Matching articles, input order kept.
    pub fn apply<'a>(&self, articles: &'a [Article]) -> Vec<&'a Article> {
        articles.iter().filter(|a| self.matches(a)).collect()
    }
}

/// Difficulty of a course or lab.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Level {
    Beginner,
    Intermediate,
    Advanced,
}

impl Level {
    pub const ALL: [Level; 3] = [Level::Beginner, Level::Intermediate, Level::Advanced];

    pub fn label(self) -> &'static str {
        match self {
            Level::Beginner => "Beginner",
            Level::Intermediate => "Intermediate",
            Level::Advanced => "Advanced",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|level| level.label().eq_ignore_ascii_case(raw.trim()))
    }
}

/// One card of the course or lab directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryEntry {
    pub title: &'static str,
    pub description: &'static str,
    pub level: Level,
    pub duration: &'static str,
    pub tags: &'static [&'static str],
    pub link: &'static str,
}

impl DirectoryEntry {
    pub fn matches(&self, query: &str, level: Option<Level>) -> bool {
        if level.is_some_and(|level| level != self.level) {
            return false;
        }
        let mut fields = vec![self.title, self.description];
        fields.extend_from_slice(self.tags);
        matches_query(query, &fields)
    }
}

/// Entries of `directory` matching `query` and `level`.
pub fn filter_directory<'a>(
    directory: &'a [DirectoryEntry],
    query: &str,
    level: Option<Level>,
) -> Vec<&'a DirectoryEntry> {
    directory
        .iter()
        .filter(|entry| entry.matches(query, level))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::relations::tests::article;

    #[test]
    fn search_is_case_insensitive_over_title_and_summary() {
        let mut docker = article(1, "2024-01-01", Some(1));
        docker.title = "Docker in Production".to_string();
        let mut helm = article(2, "2024-01-02", Some(2));
        helm.summary = Some("Packaging apps for Kubernetes".to_string());
        helm.is_featured = true;
        let articles = vec![docker, helm];

        let by_title = ArticleFilter {
            search: "  docker ".to_string(),
            ..ArticleFilter::default()
        };
        assert_eq!(by_title.apply(&articles).len(), 1);

        let by_summary = ArticleFilter {
            search: "KUBERNETES".to_string(),
            ..ArticleFilter::default()
        };
        assert_eq!(by_summary.apply(&articles)[0].id, 2);

        let featured_in_cat_one = ArticleFilter {
            category: Some(1),
            featured_only: true,
            ..ArticleFilter::default()
        };
        assert!(featured_in_cat_one.apply(&articles).is_empty());
        assert_eq!(ArticleFilter::default().apply(&articles).len(), 2);
        assert!(ArticleFilter::default().is_empty());
    }

    #[test]
    fn directory_filters_by_text_tags_and_level() {
        let directory = [
            DirectoryEntry {
                title: "Linux Foundations",
                description: "Shell, permissions and processes",
                level: Level::Beginner,
                duration: "4 weeks",
                tags: &["linux", "bash"],
                link: "/courses/linux",
            },
            DirectoryEntry {
                title: "GitOps with Argo CD",
                description: "Declarative delivery",
                level: Level::Advanced,
                duration: "2 weeks",
                tags: &["kubernetes", "argocd"],
                link: "/courses/gitops",
            },
        ];

        assert_eq!(filter_directory(&directory, "BASH", None).len(), 1);
        assert_eq!(filter_directory(&directory, "", Some(Level::Advanced))[0].title, "GitOps with Argo CD");
        assert!(filter_directory(&directory, "linux", Some(Level::Advanced)).is_empty());
        assert_eq!(Level::parse(" intermediate"), Some(Level::Intermediate));
        assert_eq!(Level::parse("expert"), None);
    }
}
