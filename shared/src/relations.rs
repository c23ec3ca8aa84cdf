//! Chronological neighbours and related lists for an article page.

use std::cmp::Ordering;

use chrono::{DateTime, Utc};

use crate::models::Article;

/// Cap for the "recent" and "same category" lists.
pub const RELATED_LIMIT: usize = 5;

/// Where one article sits in the full collection.
///
/// `prev` is the next older article and `next` the next newer one. Both are
/// `None` at the matching end of the list, and both are `None` when the
/// current article is missing from the collection.
#[derive(Debug, Clone, PartialEq)]
pub struct ArticleRelations<'a> {
    /// Whole collection, newest first.
    pub sorted: Vec<&'a Article>,
    /// Index of the current article in `sorted`.
    pub position: Option<usize>,
    pub prev: Option<&'a Article>,
    pub next: Option<&'a Article>,
    /// Newest other articles, at most [`RELATED_LIMIT`].
    pub recent: Vec<&'a Article>,
    /// Newest other articles in the same category, at most
    /// [`RELATED_LIMIT`].
    pub same_category: Vec<&'a Article>,
}

fn newest_first(a: Option<DateTime<Utc>>, b: Option<DateTime<Utc>>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => b.cmp(&a),
        // Unparseable timestamps go after everything dated.
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Stable sort of `articles` by publication time, newest first.
pub fn sort_newest_first(articles: &[Article]) -> Vec<&Article> {
    let mut keyed: Vec<(Option<DateTime<Utc>>, &Article)> =
        articles.iter().map(|a| (a.published(), a)).collect();
    keyed.sort_by(|(a, _), (b, _)| newest_first(*a, *b));
    keyed.into_iter().map(|(_, a)| a).collect()
}

impl<'a> ArticleRelations<'a> {
    /// Relations of the article `current_id` (whose category is `category`)
    /// within `articles`.
    pub fn resolve(articles: &'a [Article], current_id: u64, category: Option<u64>) -> Self {
        let sorted = sort_newest_first(articles);
        let position = sorted.iter().position(|a| a.id == current_id);

        let prev = position.and_then(|i| sorted.get(i + 1)).copied();
        let next = position
            .and_then(|i| i.checked_sub(1))
            .and_then(|i| sorted.get(i))
            .copied();

        let recent = sorted
            .iter()
            .filter(|a| a.id != current_id)
            .take(RELATED_LIMIT)
            .copied()
            .collect();

        let same_category = match category {
            Some(category) => sorted
                .iter()
                .filter(|a| a.id != current_id && a.category == Some(category))
                .take(RELATED_LIMIT)
                .copied()
                .collect(),
            None => Vec::new(),
        };

        Self {
            sorted,
            position,
            prev,
            next,
            recent,
            same_category,
        }
    }

    /// Shorthand for [`ArticleRelations::resolve`] with the article itself.
    pub fn for_article(articles: &'a [Article], current: &Article) -> Self {
        Self::resolve(articles, current.id, current.category)
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    pub(crate) fn article(id: u64, date: &str, category: Option<u64>) -> Article {
        Article {
            id,
            slug: Some(format!("post-{id}")),
            title: format!("Post {id}"),
            content: String::new(),
            published_at: date.to_string(),
            created_at: None,
            category,
            tags: Vec::new(),
            author: None,
            is_featured: false,
            read_count: None,
            summary: None,
            image: None,
        }
    }

    fn ids(list: &[&Article]) -> Vec<u64> {
        list.iter().map(|a| a.id).collect()
    }

    fn sample() -> Vec<Article> {
        vec![
            article(1, "2024-01-10", Some(1)),
            article(2, "2024-03-05", Some(2)),
            article(3, "2024-02-20", Some(1)),
            article(4, "2024-04-01T08:00:00Z", Some(1)),
        ]
    }

    #[test]
    fn prev_is_older_and_next_is_newer() {
        let articles = sample();
        let rel = ArticleRelations::resolve(&articles, 3, Some(1));

        assert_eq!(ids(&rel.sorted), vec![4, 2, 3, 1]);
        assert_eq!(rel.position, Some(2));
        assert_eq!(rel.prev.map(|a| a.id), Some(1));
        assert_eq!(rel.next.map(|a| a.id), Some(2));
    }

    #[test]
    fn neighbours_are_none_at_the_boundaries() {
        let articles = sample();

        let newest = ArticleRelations::resolve(&articles, 4, Some(1));
        assert_eq!(newest.next, None);
        assert_eq!(newest.prev.map(|a| a.id), Some(2));

        let oldest = ArticleRelations::resolve(&articles, 1, Some(1));
        assert_eq!(oldest.prev, None);
        assert_eq!(oldest.next.map(|a| a.id), Some(3));
    }

    #[test]
    fn missing_current_article_still_yields_lists() {
        let articles = sample();
        let rel = ArticleRelations::resolve(&articles, 42, Some(1));

        assert_eq!(rel.position, None);
        assert_eq!(rel.prev, None);
        assert_eq!(rel.next, None);
        assert_eq!(ids(&rel.recent), vec![4, 2, 3, 1]);
        assert_eq!(ids(&rel.same_category), vec![4, 3, 1]);
    }

    #[test]
    fn related_lists_exclude_current_and_cap_at_five() {
        let articles: Vec<Article> = (1..=9)
            .map(|id| article(id, &format!("2024-01-{id:02}"), Some(id % 2)))
            .collect();
        let rel = ArticleRelations::resolve(&articles, 9, Some(1));

        assert_eq!(ids(&rel.recent), vec![8, 7, 6, 5, 4]);
        assert_eq!(ids(&rel.same_category), vec![7, 5, 3, 1]);
        assert!(rel.recent.len() <= RELATED_LIMIT);
    }

    #[test]
    fn ties_keep_input_order_and_bad_dates_sort_last() {
        let articles = vec![
            article(1, "not a date", None),
            article(2, "2024-06-01", None),
            article(3, "2024-06-01", None),
            article(4, "2023-01-01", None),
        ];
        let sorted = sort_newest_first(&articles);
        assert_eq!(ids(&sorted), vec![2, 3, 4, 1]);

        let rel = ArticleRelations::resolve(&articles, 3, None);
        assert_eq!(rel.next.map(|a| a.id), Some(2));
        assert_eq!(rel.prev.map(|a| a.id), Some(4));
        assert!(rel.same_category.is_empty());
    }

    #[test]
    fn empty_collection_is_tolerated() {
        let rel = ArticleRelations::resolve(&[], 1, Some(1));
        assert!(rel.sorted.is_empty());
        assert_eq!(rel.prev, None);
        assert!(rel.recent.is_empty());
    }
}
