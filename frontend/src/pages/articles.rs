use opslearn_shared::{
    endpoints::ArticleQuery, filter::ArticleFilter, relations::sort_newest_first,
    taxonomy::resolve_category_name, Article, Category,
};
use serde::Deserialize;
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;
use yew_router::prelude::use_location;

use crate::{
    api,
    components::{
        article_card::ArticleCard, loading_spinner::LoadingSpinner, pagination::Pagination,
    },
    config::{ARTICLES_PER_PAGE, LIST_TOP_ANCHOR},
    hooks::use_pagination,
};

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
struct ArticlesQuery {
    #[serde(default)]
    search: Option<String>,
    #[serde(default)]
    category: Option<u64>,
}

#[function_component(ArticlesPage)]
pub fn articles_page() -> Html {
    let location = use_location();
    let initial = location
        .as_ref()
        .and_then(|loc| loc.query::<ArticlesQuery>().ok())
        .unwrap_or_default();

    let articles = use_state(Vec::<Article>::new);
    let categories = use_state(Vec::<Category>::new);
    let loading = use_state(|| true);
    let filter = use_state(|| ArticleFilter {
        search: initial.search.clone().unwrap_or_default(),
        category: initial.category,
        featured_only: false,
    });

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

    let matching: Vec<Article> = sort_newest_first(&articles)
        .into_iter()
        .filter(|article| filter.matches(article))
        .cloned()
        .collect();
    let match_count = matching.len();
    let (visible, current_page, total_pages, go_to_page) =
        use_pagination(matching, ARTICLES_PER_PAGE, LIST_TOP_ANCHOR);

    let on_search_input = {
        let filter = filter.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(target) = event.target_dyn_into::<HtmlInputElement>() {
                filter.set(ArticleFilter {
                    search: target.value(),
                    ..(*filter).clone()
                });
            }
        })
    };

    let on_category_change = {
        let filter = filter.clone();
        Callback::from(move |event: Event| {
            if let Some(target) = event.target_dyn_into::<HtmlSelectElement>() {
                filter.set(ArticleFilter {
                    category: target.value().parse().ok(),
                    ..(*filter).clone()
                });
            }
        })
    };

    let on_featured_toggle = {
        let filter = filter.clone();
        Callback::from(move |_: Event| {
            filter.set(ArticleFilter {
                featured_only: !filter.featured_only,
                ..(*filter).clone()
            });
        })
    };

    let results = if *loading {
        html! { <LoadingSpinner /> }
    } else if visible.is_empty() {
        let message = if filter.is_empty() {
            "No articles published yet."
        } else {
            "No articles match your filters."
        };
        html! { <p class="text-[var(--muted)]">{ message }</p> }
    } else {
        html! {
            <div class="grid gap-6 md:grid-cols-2 lg:grid-cols-3">
                { for visible.iter().map(|article| html! {
                    <ArticleCard
                        key={article.id.to_string()}
                        article={article.clone()}
                        category_name={Some(resolve_category_name(article.category, &categories))}
                    />
                }) }
            </div>
        }
    };

    html! {
        <main class="container py-10 space-y-6">
            <h1 id={LIST_TOP_ANCHOR} class="text-3xl font-bold scroll-mt-24">{"Articles"}</h1>
            <div class="flex flex-wrap items-center gap-3">
                <input
                    type="search"
                    class="flex-1 min-w-[12rem] rounded-lg border border-[var(--border)] px-3 py-2"
                    placeholder="Search articles"
                    value={filter.search.clone()}
                    oninput={on_search_input}
                />
                <select
                    class="rounded-lg border border-[var(--border)] px-3 py-2"
                    aria-label="Category"
                    onchange={on_category_change}
                >
                    <option value="" selected={filter.category.is_none()}>{"All categories"}</option>
                    { for categories.iter().map(|category| html! {
                        <option
                            key={category.id.to_string()}
                            value={category.id.to_string()}
                            selected={filter.category == Some(category.id)}
                        >
                            { &category.name }
                        </option>
                    }) }
                </select>
                <label class="flex items-center gap-2 text-sm">
                    <input type="checkbox" checked={filter.featured_only} onchange={on_featured_toggle} />
                    {"Featured only"}
                </label>
            </div>
            if !*loading {
                <p class="text-sm text-[var(--muted)]">{ format!("{match_count} articles") }</p>
            }
            { results }
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
