use opslearn_shared::{relations::sort_newest_first, AuthorDetails};
use yew::prelude::*;
use yew_router::prelude::Link;

use crate::{
    api,
    components::{article_card::ArticleCard, loading_spinner::LoadingSpinner},
    hooks::use_load_generation,
    router::Route,
};

#[derive(Properties, Clone, PartialEq)]
pub struct AuthorDetailProps {
    pub slug: String,
}

#[function_component(AuthorDetailPage)]
pub fn author_detail_page(props: &AuthorDetailProps) -> Html {
    let details = use_state(|| None::<AuthorDetails>);
    let loading = use_state(|| true);
    let loads = use_load_generation();

    {
        let details = details.clone();
        let loading = loading.clone();
        use_effect_with(props.slug.clone(), move |slug| {
            let slug = slug.clone();
            let ticket = loads.begin();
            loading.set(true);
            wasm_bindgen_futures::spawn_local(async move {
                let fetched = api::fetch_author_details(&slug).await;
                if ticket.is_current() {
                    details.set(fetched);
                    loading.set(false);
                }
            });
            move || loads.invalidate()
        });
    }

    if *loading {
        return html! { <main class="container py-16"><LoadingSpinner /></main> };
    }

    let Some(details) = (*details).clone() else {
        return html! {
            <main class="container py-16 text-center space-y-4">
                <h1 class="text-3xl font-bold">{"Author not found"}</h1>
                <Link<Route> to={Route::Authors}>{"Back to all authors"}</Link<Route>>
            </main>
        };
    };

    let author = &details.author;
    let articles = sort_newest_first(&details.articles);

    html! {
        <main class="container py-10 space-y-10">
            <section class="flex flex-wrap items-center gap-6">
                if let Some(avatar) = author.avatar.as_ref() {
                    <img class="h-24 w-24 rounded-full object-cover" src={avatar.clone()} alt={author.name.clone()} />
                }
                <div class="space-y-2">
                    <h1 class="text-3xl font-bold">{ &author.name }</h1>
                    if let Some(bio) = author.bio.as_ref() {
                        <p class="text-[var(--muted)]">{ bio }</p>
                    }
                    <p class="text-sm">
                        { format!("{} articles", details.article_total()) }
                        if let Some(reads) = details.total_reads {
                            { format!(" · {reads} reads") }
                        }
                    </p>
                    if let Some(linkedin) = author.linkedin.as_ref() {
                        <a href={linkedin.clone()} target="_blank" rel="noopener noreferrer">{"LinkedIn"}</a>
                    }
                </div>
            </section>
            <section class="space-y-6">
                <h2 class="text-2xl font-bold">{"Articles"}</h2>
                if articles.is_empty() {
                    <p class="text-[var(--muted)]">{"This author has not published anything yet."}</p>
                } else {
                    <div class="grid gap-6 md:grid-cols-2 lg:grid-cols-3">
                        { for articles.into_iter().map(|article| html! {
                            <ArticleCard key={article.id.to_string()} article={article.clone()} />
                        }) }
                    </div>
                }
            </section>
        </main>
    }
}
