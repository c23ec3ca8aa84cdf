use anyhow::{Context, Result};

use super::print_json;
use crate::client::ApiClient;

pub async fn ban_status(client: &ApiClient) -> Result<()> {
    let status = client.ban_status().await.unwrap_or_default();
    if !status.is_banned {
        println!("not banned");
        return Ok(());
    }
    match client.ban_details().await {
        Some(details) => print_json(&details),
        None => print_json(&status),
    }
}

pub async fn impersonate(client: &ApiClient, slug: &str) -> Result<()> {
    let grant = client
        .impersonate(slug)
        .await
        .with_context(|| format!("impersonating {slug} failed"))?;
    tracing::info!("now acting as {}", grant.author.as_deref().unwrap_or(slug));
    println!("{}", grant.token);
    Ok(())
}

pub async fn github_exchange(client: &ApiClient, code: &str) -> Result<()> {
    let exchange = client
        .exchange_github_code(code)
        .await
        .context("GitHub code exchange failed")?;
    println!("{}", exchange.token);
    Ok(())
}
