use opslearn_shared::{endpoints::ArticleQuery, relations::sort_newest_first, Article, Category};
use yew::prelude::*;
use yew_router::prelude::Link;

use crate::{
    api,
    components::{
        article_card::ArticleCard, loading_spinner::LoadingSpinner, pagination::Pagination,
    },
    config::{ARTICLES_PER_PAGE, LIST_TOP_ANCHOR},
    hooks::{use_load_generation, use_pagination},
    router::Route,
};

#[derive(Properties, Clone, PartialEq)]
pub struct CategoryDetailProps {
    pub slug: String,
}

#[function_component(CategoryDetailPage)]
pub fn category_detail_page(props: &CategoryDetailProps) -> Html {
    let articles = use_state(Vec::<Article>::new);
    let category = use_state(|| None::<Category>);
    let loading = use_state(|| true);
    let loads = use_load_generation();

    {
        let articles = articles.clone();
        let category = category.clone();
        let loading = loading.clone();
        use_effect_with(props.slug.clone(), move |slug| {
            let slug = slug.clone();
            let ticket = loads.begin();
            loading.set(true);
            wasm_bindgen_futures::spawn_local(async move {
                let query = ArticleQuery::by_category_slug(slug.clone());
                let (fetched, categories) = futures::join!(
                    api::fetch_articles(&query),
                    api::fetch_categories(false),
                );
                if !ticket.is_current() {
                    return;
                }
                category.set(
                    categories
                        .into_iter()
                        .find(|c| c.route_key() == slug),
                );
                articles.set(fetched);
                loading.set(false);
            });
            move || loads.invalidate()
        });
    }

    let sorted: Vec<Article> = sort_newest_first(&articles)
        .into_iter()
        .cloned()
        .collect();
    let (visible, current_page, total_pages, go_to_page) =
        use_pagination(sorted, ARTICLES_PER_PAGE, LIST_TOP_ANCHOR);

    let title = category
        .as_ref()
        .map(|c| c.name.clone())
        .unwrap_or_else(|| props.slug.clone());

    let body = if *loading {
        html! { <LoadingSpinner /> }
    } else if visible.is_empty() {
        html! {
            <div class="space-y-3">
                <p class="text-[var(--muted)]">{"No articles in this category yet."}</p>
                <Link<Route> to={Route::Categories}>{"Browse other categories"}</Link<Route>>
            </div>
        }
    } else {
        html! {
            <div class="grid gap-6 md:grid-cols-2 lg:grid-cols-3">
                { for visible.iter().map(|article| html! {
                    <ArticleCard
                        key={article.id.to_string()}
                        article={article.clone()}
                        category_name={Some(title.clone())}
                    />
                }) }
            </div>
        }
    };

    html! {
        <main class="container py-10 space-y-6">
            <h1 id={LIST_TOP_ANCHOR} class="text-3xl font-bold scroll-mt-24">{ title.clone() }</h1>
            { body }
            <div class="flex justify-center">
                <Pagination
                    current_page={current_page}
                    total_pages={total_pages}
                    on_page_change={go_to_page}
                />
            </div>
        </main>
    }
}
