use anyhow::Result;

use crate::client::ApiClient;

pub async fn categories(client: &ApiClient, counts: bool) -> Result<()> {
    for category in client.categories(counts).await {
        match category.post_count {
            Some(count) if counts => println!("{:>5}  {} ({count})", category.id, category.name),
            _ => println!("{:>5}  {}", category.id, category.name),
        }
    }
    Ok(())
}

pub async fn tags(client: &ApiClient) -> Result<()> {
    for tag in client.tags().await {
        println!("{:>5}  {}", tag.id, tag.name);
    }
    Ok(())
}
