//! Plain-text rendering of API data for the terminal.

use std::fmt::Write;

use opslearn_shared::{
    headings::TocNode, taxonomy::resolve_category_name, Article, ArticlePage, Category,
    Paginator, TableOfContents,
};

/// Indented outline, two spaces per nesting step.
pub fn toc_tree(toc: &TableOfContents) -> String {
    fn walk(out: &mut String, nodes: &[TocNode], depth: usize) {
        for node in nodes {
            let _ = writeln!(out, "{}- {}", "  ".repeat(depth), node.heading.text);
            walk(out, &node.children, depth + 1);
        }
    }

    let mut out = String::new();
    walk(&mut out, &toc.tree(), 0);
    out
}

/// One `#anchor  text` line per heading, indented by level.
pub fn toc_flat(toc: &TableOfContents) -> String {
    let base = toc.min_level().unwrap_or(1);
    let mut out = String::new();
    for heading in toc {
        let indent = "  ".repeat(usize::from(heading.level - base));
        let _ = writeln!(out, "{indent}#{}  {}", heading.id, heading.text);
    }
    out
}

/// Footer under a listing page, with the flags that reach its neighbours.
pub fn page_summary(pager: &Paginator, page: usize, len: usize) -> String {
    let mut out = format!("page {page}/{} ({len} articles)", pager.total_pages(len));
    if pager.has_prev(page) {
        let _ = write!(out, "  prev: --page {}", page - 1);
    }
    if pager.has_next(page, len) {
        let _ = write!(out, "  next: --page {}", page + 1);
    }
    out
}

pub fn article_line(article: &Article, categories: &[Category]) -> String {
    let featured = if article.is_featured { " *" } else { "" };
    format!(
        "{:>5}  {}  [{}] {}{}",
        article.id,
        article.display_date(),
        resolve_category_name(article.category, categories),
        article.title,
        featured
    )
}

fn neighbour(label: &str, article: Option<&Article>) -> String {
    match article {
        Some(article) => format!("{label}: {} ({})", article.title, article.route_key()),
        None => format!("{label}: -"),
    }
}

pub fn article_page(page: &ArticlePage) -> String {
    let mut out = String::new();
    let article = &page.article;
    let _ = writeln!(out, "{}", article.title);
    let _ = writeln!(
        out,
        "{} | {} | {} min read",
        article.display_date(),
        page.category_name,
        page.reading_minutes
    );
    if let Some(author) = &page.author {
        let _ = writeln!(out, "by {}", author.name);
    }
    if !page.tag_names.is_empty() {
        let _ = writeln!(out, "tags: {}", page.tag_names.join(", "));
    }

    if !page.headings.is_empty() {
        let _ = writeln!(out, "\nContents");
        out.push_str(&toc_tree(&page.headings));
    }

    let _ = writeln!(out);
    let _ = writeln!(out, "{}", neighbour("previous", page.prev.as_ref()));
    let _ = writeln!(out, "{}", neighbour("next", page.next.as_ref()));

    for (title, list) in [("Recent", &page.recent), ("Same category", &page.same_category)] {
        if list.is_empty() {
            continue;
        }
        let _ = writeln!(out, "\n{title}");
        for item in list {
            let _ = writeln!(out, "- {} ({})", item.title, item.route_key());
        }
    }
    out
}
