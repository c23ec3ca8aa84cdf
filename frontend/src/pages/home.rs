use opslearn_shared::{
    endpoints::ArticleQuery, relations::sort_newest_first, taxonomy::resolve_category_name,
    Article, Category,
};
use yew::prelude::*;
use yew_router::prelude::Link;

use crate::{
    api,
    components::{article_card::ArticleCard, loading_spinner::LoadingSpinner},
    config::HOME_LATEST_COUNT,
    router::Route,
};

#[function_component(HomePage)]
pub fn home_page() -> Html {
    let articles = use_state(Vec::<Article>::new);
    let categories = use_state(Vec::<Category>::new);
    let loading = use_state(|| true);

    {
        let articles = articles.clone();
        let categories = categories.clone();
        let loading = loading.clone();
        use_effect_with((), move |_| {
            wasm_bindgen_futures::spawn_local(async move {
                let query = ArticleQuery::default();
                let (fetched, cats) = futures::join!(
                    api::fetch_articles(&query),
                    api::fetch_categories(false),
                );
                articles.set(fetched);
                categories.set(cats);
                loading.set(false);
            });
            || ()
        });
    }

    let newest = sort_newest_first(&articles);
    let featured: Vec<&Article> = newest
        .iter()
        .copied()
        .filter(|a| a.is_featured)
        .take(HOME_LATEST_COUNT)
        .collect();
    let latest: Vec<&Article> = newest.iter().copied().take(HOME_LATEST_COUNT).collect();

    let card = |article: &Article| {
        html! {
            <ArticleCard
                key={article.id.to_string()}
                article={article.clone()}
                category_name={Some(resolve_category_name(article.category, &categories))}
            />
        }
    };

    html! {
        <main class="container space-y-16 py-10">
            <section class="text-center space-y-4">
                <h1 class="text-4xl font-bold">{"Learn DevOps by doing"}</h1>
                <p class="text-lg text-[var(--muted)]">
                    {"Practical articles, guided courses and hands-on labs for containers, pipelines and cloud infrastructure."}
                </p>
                <div class="flex justify-center gap-4">
                    <Link<Route> to={Route::Courses} classes={classes!("btn-primary")}>{"Browse courses"}</Link<Route>>
                    <Link<Route> to={Route::Labs} classes={classes!("btn-secondary")}>{"Try a lab"}</Link<Route>>
                </div>
            </section>

            if *loading {
                <LoadingSpinner />
            } else {
                if !featured.is_empty() {
                    <section class="space-y-6">
                        <h2 class="text-2xl font-bold">{"Featured"}</h2>
                        <div class="grid gap-6 md:grid-cols-3">
                            { for featured.iter().map(|a| card(*a)) }
                        </div>
                    </section>
                }
                <section class="space-y-6">
                    <div class="flex items-center justify-between">
                        <h2 class="text-2xl font-bold">{"Latest articles"}</h2>
                        <Link<Route> to={Route::Articles}>{"All articles →"}</Link<Route>>
                    </div>
                    if latest.is_empty() {
                        <p class="text-[var(--muted)]">{"No articles published yet."}</p>
                    } else {
                        <div class="grid gap-6 md:grid-cols-3">
                            { for latest.iter().map(|a| card(*a)) }
                        </div>
                    }
                </section>
            }
        </main>
    }
}
