//! Resolve author, tag and category foreign keys against separately
//! fetched lists.

use crate::models::{Author, Category, Tag};

/// Label rendered when an article's category cannot be resolved.
pub const FALLBACK_CATEGORY: &str = "General";

/// Names for `ids`, in the same order. Ids without a matching tag are
/// dropped.
pub fn resolve_tag_names(ids: &[u64], tags: &[Tag]) -> Vec<String> {
    ids.iter()
        .filter_map(|id| tags.iter().find(|tag| tag.id == *id))
        .map(|tag| tag.name.clone())
        .collect()
}

/// The category for `id`, if it is in `categories`.
pub fn find_category(id: Option<u64>, categories: &[Category]) -> Option<&Category> {
    let id = id?;
    categories.iter().find(|category| category.id == id)
}

/// The author for `id`, if it is in `authors`.
pub fn find_author(id: Option<u64>, authors: &[Author]) -> Option<&Author> {
    let id = id?;
    authors.iter().find(|author| author.id == id)
}

/// Display name of the category `id`, or [`FALLBACK_CATEGORY`].
pub fn resolve_category_name(id: Option<u64>, categories: &[Category]) -> String {
    find_category(id, categories)
        .map(|category| category.name.clone())
        .unwrap_or_else(|| FALLBACK_CATEGORY.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tag(id: u64, name: &str) -> Tag {
        Tag {
            id,
            name: name.to_string(),
        }
    }

    fn category(id: u64, name: &str) -> Category {
        Category {
            id,
            name: name.to_string(),
            slug: None,
            post_count: None,
        }
    }

    #[test]
    fn unknown_tag_ids_are_dropped() {
        let tags = vec![tag(1, "Docker"), tag(2, "Kubernetes")];
        assert_eq!(resolve_tag_names(&[1, 2, 99], &tags), vec!["Docker", "Kubernetes"]);
        assert_eq!(resolve_tag_names(&[2, 1], &tags), vec!["Kubernetes", "Docker"]);
        assert!(resolve_tag_names(&[1], &[]).is_empty());
    }

    #[test]
    fn unknown_category_falls_back_to_general() {
        let categories = vec![category(3, "CI/CD")];
        assert_eq!(resolve_category_name(Some(3), &categories), "CI/CD");
        assert_eq!(resolve_category_name(Some(4), &categories), FALLBACK_CATEGORY);
        assert_eq!(resolve_category_name(None, &categories), "General");
        assert_eq!(resolve_category_name(Some(3), &[]), "General");
    }

    #[test]
    fn author_is_joined_by_id() {
        let authors: Vec<Author> = serde_json::from_value(serde_json::json!([
            {"id": 4, "name": "Bo Builds"},
            {"id": 5, "name": "Ana Ops"}
        ]))
        .expect("authors");
        assert_eq!(find_author(Some(5), &authors).map(|a| a.name.as_str()), Some("Ana Ops"));
        assert_eq!(find_author(Some(6), &authors), None);
        assert_eq!(find_author(None, &authors), None);
    }
}
