use anyhow::{Context, Result};
use opslearn_shared::NewComment;

use super::print_json;
use crate::client::ApiClient;

pub async fn list(client: &ApiClient, article_id: u64) -> Result<()> {
    let comments = client.comments(article_id).await;
    if comments.is_empty() {
        println!("No comments yet.");
    }
    for comment in comments {
        let stars = comment
            .rating
            .map(|r| format!(" {}", "*".repeat(usize::from(r))))
            .unwrap_or_default();
        println!("{} ({}){stars}\n  {}", comment.name, comment.created_at, comment.content);
    }
    Ok(())
}

pub async fn post(
    client: &ApiClient,
    article_id: u64,
    name: String,
    content: String,
    rating: Option<u8>,
) -> Result<()> {
    let created = client
        .post_comment(article_id, NewComment {
            name,
            content,
            rating,
        })
        .await
        .context("comment was not posted")?;
    print_json(&created)
}
