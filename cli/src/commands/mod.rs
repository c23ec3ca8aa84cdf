pub mod admin;
pub mod articles;
pub mod authors;
pub mod comments;
pub mod taxonomy;
pub mod toc;

use anyhow::Result;
use serde::Serialize;

use crate::{
    cli::{Cli, Commands},
    client::ApiClient,
};

pub async fn run(cli: Cli) -> Result<()> {
    let client = ApiClient::new(&cli.api_base, cli.token)?;
    tracing::debug!("using API at {}", client.endpoints().base());

    match cli.command {
        Commands::Articles {
            search,
            category,
            featured,
            page,
            page_size,
        } => articles::list(&client, search, category, featured, page, page_size).await,
        Commands::Article {
            key,
        } => articles::show(&client, &key).await,
        Commands::Toc {
            file,
            flat,
        } => toc::run(&file, flat),
        Commands::Authors => authors::list(&client).await,
        Commands::Author {
            slug,
        } => authors::show(&client, &slug).await,
        Commands::Categories {
            counts,
        } => taxonomy::categories(&client, counts).await,
        Commands::Tags => taxonomy::tags(&client).await,
        Commands::Comments {
            article_id,
        } => comments::list(&client, article_id).await,
        Commands::Comment {
            article_id,
            name,
            content,
            rating,
        } => comments::post(&client, article_id, name, content, rating).await,
        Commands::BanStatus => admin::ban_status(&client).await,
        Commands::Impersonate {
            slug,
        } => admin::impersonate(&client, &slug).await,
        Commands::GithubExchange {
            code,
        } => admin::github_exchange(&client, &code).await,
    }
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
