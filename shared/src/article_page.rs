//! Everything the article page renders, joined from the five fetches it
//! issues concurrently (article, authors, all articles, tags, categories).

use crate::{
    headings::{extract_headings, TableOfContents},
    models::{Article, Author, Category, Tag},
    relations::ArticleRelations,
    taxonomy::{find_author, find_category, resolve_category_name, resolve_tag_names},
};

/// Reading speed used for the time estimate.
pub const WORDS_PER_MINUTE: usize = 200;

/// Estimated minutes to read `markdown`, never below one.
pub fn reading_minutes(markdown: &str) -> usize {
    let words = markdown.split_whitespace().count();
    words.div_ceil(WORDS_PER_MINUTE).max(1)
}

/// View model of one article page.
#[derive(Debug, Clone, PartialEq)]
pub struct ArticlePage {
    pub article: Article,
    pub author: Option<Author>,
    pub category: Option<Category>,
    /// Category label, `General` when the id did not resolve.
    pub category_name: String,
    /// Resolved tag names; unknown ids are omitted.
    pub tag_names: Vec<String>,
    pub headings: TableOfContents,
    /// Next older article.
    pub prev: Option<Article>,
    /// Next newer article.
    pub next: Option<Article>,
    pub recent: Vec<Article>,
    pub same_category: Vec<Article>,
    pub reading_minutes: usize,
}

impl ArticlePage {
    /// Join the fetched inputs. Any of the lists may be empty.
    pub fn compose(
        article: Article,
        authors: &[Author],
        all_articles: &[Article],
        tags: &[Tag],
        categories: &[Category],
    ) -> Self {
        let relations = ArticleRelations::for_article(all_articles, &article);
        let owned = |list: &[&Article]| list.iter().map(|a| (*a).clone()).collect::<Vec<_>>();

        Self {
            category: find_category(article.category, categories).cloned(),
            category_name: resolve_category_name(article.category, categories),
            tag_names: resolve_tag_names(&article.tags, tags),
            headings: extract_headings(&article.content),
            prev: relations.prev.cloned(),
            next: relations.next.cloned(),
            recent: owned(&relations.recent),
            same_category: owned(&relations.same_category),
            reading_minutes: reading_minutes(&article.content),
            author: find_author(article.author, authors).cloned(),
            article,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{relations::tests::article, taxonomy::FALLBACK_CATEGORY};

    #[test]
    fn unresolved_category_and_tags_degrade_gracefully() {
        let mut current = article(2, "2024-02-01", Some(77));
        current.tags = vec![1, 99];
        current.content = "# Intro\n## Intro\nbody".to_string();
        let all = vec![
            article(1, "2024-01-01", Some(77)),
            current.clone(),
            article(3, "2024-03-01", Some(5)),
        ];
        let tags = vec![Tag {
            id: 1,
            name: "Docker".to_string(),
        }];
        let categories = vec![Category {
            id: 5,
            name: "Cloud".to_string(),
            slug: None,
            post_count: None,
        }];

        let authors: Vec<Author> =
            serde_json::from_value(serde_json::json!([{"id": 9, "name": "Ana Ops"}]))
                .expect("authors");
        current.author = Some(9);

        let page = ArticlePage::compose(current, &authors, &all, &tags, &categories);

        assert_eq!(page.category_name, FALLBACK_CATEGORY);
        assert_eq!(page.category, None);
        assert_eq!(page.author.map(|a| a.name).as_deref(), Some("Ana Ops"));
        assert_eq!(page.tag_names, vec!["Docker"]);
        let ids: Vec<&str> = page.headings.iter().map(|h| h.id.as_str()).collect();
        assert_eq!(ids, vec!["intro", "intro-2"]);
        assert_eq!(page.prev.map(|a| a.id), Some(1));
        assert_eq!(page.next.map(|a| a.id), Some(3));
        assert_eq!(page.same_category.iter().map(|a| a.id).collect::<Vec<_>>(), vec![1]);
        assert_eq!(page.reading_minutes, 1);
    }

    #[test]
    fn composes_from_empty_lists() {
        let current = article(4, "2024-02-01", Some(1));
        let page = ArticlePage::compose(current, &[], &[], &[], &[]);

        assert_eq!(page.category_name, "General");
        assert!(page.tag_names.is_empty());
        assert_eq!(page.prev, None);
        assert_eq!(page.next, None);
        assert!(page.recent.is_empty());
        assert!(page.headings.is_empty());
        assert_eq!(page.author, None);
    }

    #[test]
    fn reading_time_rounds_up() {
        assert_eq!(reading_minutes(""), 1);
        assert_eq!(reading_minutes(&"word ".repeat(200)), 1);
        assert_eq!(reading_minutes(&"word ".repeat(201)), 2);
    }
}
