use opslearn_shared::{Article, ArticlePage};
use yew::{prelude::*, virtual_dom::AttrValue};
use yew_router::prelude::Link;

use crate::{
    api,
    components::{
        comments::CommentsSection,
        loading_spinner::{LoadingSpinner, SpinnerSize},
        toc::TableOfContentsPanel,
    },
    hooks::use_load_generation,
    router::Route,
    utils::markdown_to_html,
};

#[derive(Properties, Clone, PartialEq)]
pub struct ArticleDetailProps {
    pub article_key: String,
}

fn related_list(title: &'static str, articles: &[Article]) -> Html {
    if articles.is_empty() {
        return Html::default();
    }
    html! {
        <section class="space-y-2">
            <h3 class="font-semibold">{ title }</h3>
            <ul class="space-y-1 text-sm">
                { for articles.iter().map(|article| html! {
                    <li key={article.id.to_string()}>
                        <Link<Route> to={Route::ArticleDetail { key: article.route_key() }}>
                            { &article.title }
                        </Link<Route>>
                    </li>
                }) }
            </ul>
        </section>
    }
}

fn neighbour_link(label: &'static str, article: Option<&Article>) -> Html {
    match article {
        Some(article) => html! {
            <Link<Route>
                to={Route::ArticleDetail { key: article.route_key() }}
                classes={classes!("neighbour-link", "flex", "flex-col", "rounded-xl", "border", "border-[var(--border)]", "p-4")}
            >
                <span class="text-xs uppercase text-[var(--muted)]">{ label }</span>
                <span class="font-semibold">{ &article.title }</span>
            </Link<Route>>
        },
        None => html! { <span /> },
    }
}

#[function_component(ArticleDetailPage)]
pub fn article_detail_page(props: &ArticleDetailProps) -> Html {
    let page = use_state(|| None::<ArticlePage>);
    let loading = use_state(|| true);
    let loads = use_load_generation();

    {
        let page = page.clone();
        let loading = loading.clone();
        use_effect_with(props.article_key.clone(), move |key| {
            let key = key.clone();
            let ticket = loads.begin();
            loading.set(true);
            wasm_bindgen_futures::spawn_local(async move {
                let fetched = api::fetch_article_page(&key).await;
                if ticket.is_current() {
                    page.set(fetched);
                    loading.set(false);
                }
            });
            move || loads.invalidate()
        });
    }

    let rendered = use_memo((*page).clone(), |page| {
        page.as_ref()
            .map(|page| markdown_to_html(&page.article.content))
            .unwrap_or_default()
    });

    if *loading {
        return html! {
            <main class="container py-16">
                <LoadingSpinner size={SpinnerSize::Large} />
            </main>
        };
    }

    let Some(page) = (*page).clone() else {
        return html! {
            <main class="container py-16 text-center space-y-4">
                <h1 class="text-3xl font-bold">{"Article not found"}</h1>
                <p class="text-[var(--muted)]">{"This article does not exist or is no longer available."}</p>
                <Link<Route> to={Route::Articles}>{"Back to all articles"}</Link<Route>>
            </main>
        };
    };

    let article = &page.article;
    let content = Html::from_html_unchecked(AttrValue::from((*rendered).clone()));
    let author = page.author.as_ref().map(|author| {
        html! {
            <Link<Route> to={Route::AuthorDetail { slug: author.route_key() }}>
                { &author.name }
            </Link<Route>>
        }
    });
    let category = match page.category.as_ref() {
        Some(category) => html! {
            <Link<Route> to={Route::CategoryDetail { slug: category.route_key() }}>
                { &page.category_name }
            </Link<Route>>
        },
        None => html! { <span>{ &page.category_name }</span> },
    };

    html! {
        <main class="container py-10">
            <div class="grid gap-10 lg:grid-cols-[1fr_18rem]">
                <article class="min-w-0 space-y-6">
                    <header class="space-y-3">
                        <h1 class="text-4xl font-bold">{ &article.title }</h1>
                        <div class="flex flex-wrap gap-4 text-sm text-[var(--muted)]">
                            if let Some(author) = author {
                                <span>{"By "}{ author }</span>
                            }
                            <span>{ article.display_date() }</span>
                            { category }
                            <span>{ format!("{} min read", page.reading_minutes) }</span>
                        </div>
                        if !page.tag_names.is_empty() {
                            <ul class="flex flex-wrap gap-2">
                                { for page.tag_names.iter().map(|name| html! {
                                    <li key={name.clone()} class="tag-pill">{ format!("#{name}") }</li>
                                }) }
                            </ul>
                        }
                    </header>
                    if let Some(image) = article.image.as_ref() {
                        <img class="w-full rounded-2xl" src={image.clone()} alt={article.title.clone()} />
                    }
                    <div class="article-content prose max-w-none">{ content }</div>
                    <nav class="grid gap-4 md:grid-cols-2" aria-label="Article navigation">
                        { neighbour_link("Previous", page.prev.as_ref()) }
                        { neighbour_link("Next", page.next.as_ref()) }
                    </nav>
                    <CommentsSection article_id={article.id} />
                </article>
                <aside class="space-y-8 lg:sticky lg:top-24 self-start">
                    <TableOfContentsPanel headings={page.headings.clone()} />
                    { related_list("More in this category", &page.same_category) }
                    { related_list("Recent articles", &page.recent) }
                </aside>
            </div>
        </main>
    }
}
