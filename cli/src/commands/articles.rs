use anyhow::{bail, Result};
use opslearn_shared::{
    endpoints::ArticleQuery, filter::ArticleFilter, relations::sort_newest_first, Paginator,
};

use crate::{client::ApiClient, render};

pub async fn list(
    client: &ApiClient,
    search: Option<String>,
    category: Option<String>,
    featured: bool,
    page: usize,
    page_size: usize,
) -> Result<()> {
    let query = ArticleQuery {
        category: None,
        category_slug: category,
        search,
    };
    let (articles, categories) = tokio::join!(client.articles(&query), client.categories(false));

    let filter = ArticleFilter {
        featured_only: featured,
        ..ArticleFilter::default()
    };
    let sorted: Vec<_> = sort_newest_first(&articles)
        .into_iter()
        .filter(|article| filter.matches(article))
        .collect();

    let pager = Paginator::new(page_size);
    let total_pages = pager.total_pages(sorted.len());
    if sorted.is_empty() {
        println!("No articles found.");
        return Ok(());
    }
    let Ok(visible) = pager.page(&sorted, page) else {
        bail!("page {page} does not exist, there are {total_pages} page(s)");
    };

    for article in visible {
        println!("{}", render::article_line(article, &categories));
    }
    println!("\n{}", render::page_summary(&pager, page, sorted.len()));
    Ok(())
}

pub async fn show(client: &ApiClient, key: &str) -> Result<()> {
    match client.article_page(key).await {
        Some(page) => {
            print!("{}", render::article_page(&page));
            Ok(())
        },
        None => bail!("article not found: {key}"),
    }
}
