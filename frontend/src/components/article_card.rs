use opslearn_shared::Article;
use yew::prelude::*;
use yew_router::prelude::Link;

use crate::router::Route;

#[derive(Properties, PartialEq, Clone)]
pub struct ArticleCardProps {
    pub article: Article,
    /// Resolved category label; the meta row omits the category when unset.
    #[prop_or_default]
    pub category_name: Option<String>,
}

#[function_component(ArticleCard)]
pub fn article_card(props: &ArticleCardProps) -> Html {
    let article = &props.article;
    let detail_route = Route::ArticleDetail {
        key: article.route_key(),
    };

    html! {
        <article class="article-card">
            {
                if let Some(image) = article.image.as_ref() {
                    html! {
                        <Link<Route> to={detail_route.clone()} classes={classes!("featured-image")}>
                            <img src={image.clone()} alt={article.title.clone()} loading="lazy" />
                        </Link<Route>>
                    }
                } else {
                    html! {}
                }
            }
            <h3 class="article-title">
                <Link<Route> to={detail_route.clone()} classes={classes!("article-title-link")}>
                    { &article.title }
                </Link<Route>>
                if article.is_featured {
                    <span class="featured-badge">{"Featured"}</span>
                }
            </h3>
            <div class="post-meta">
                <span class="post-meta-item">
                    <i class="far fa-calendar-alt" aria-hidden="true"></i>
                    { article.display_date() }
                </span>
                if let Some(name) = props.category_name.as_ref() {
                    <span class="post-meta-item post-category">
                        <i class="far fa-folder" aria-hidden="true"></i>
                        { name }
                    </span>
                }
                if let Some(reads) = article.read_count {
                    <span class="post-meta-item">
                        <i class="far fa-eye" aria-hidden="true"></i>
                        { format!("{reads} reads") }
                    </span>
                }
            </div>
            if let Some(summary) = article.summary.as_ref() {
                <p class="article-excerpt">{ summary }</p>
            }
        </article>
    }
}
