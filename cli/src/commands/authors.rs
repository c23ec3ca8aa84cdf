use anyhow::{bail, Result};

use crate::client::ApiClient;

pub async fn list(client: &ApiClient) -> Result<()> {
    let authors = client.authors().await;
    if authors.is_empty() {
        println!("No authors found.");
    }
    for author in authors {
        println!("{:>5}  {:<24} {}", author.id, author.route_key(), author.name);
    }
    Ok(())
}

pub async fn show(client: &ApiClient, slug: &str) -> Result<()> {
    let Some(details) = client.author_details(slug).await else {
        // No aggregate for this author: fall back to the plain record.
        let Some(author) = client.author(slug).await else {
            bail!("author not found: {slug}");
        };
        println!("{}", author.name);
        println!("(no article statistics available)");
        return Ok(());
    };
    let author = &details.author;
    println!("{}", author.name);
    if let Some(bio) = author.bio.as_deref().filter(|b| !b.trim().is_empty()) {
        println!("{bio}");
    }
    if let Some(linkedin) = &author.linkedin {
        println!("LinkedIn: {linkedin}");
    }
    println!(
        "{} article(s), {} read(s)",
        details.article_total(),
        details.total_reads.unwrap_or_default()
    );
    for article in &details.articles {
        println!("- {} ({})", article.title, article.display_date());
    }
    Ok(())
}
