use opslearn_shared::{ApiError, Author};
use yew::prelude::*;
use yew_router::prelude::Link;

use crate::{
    api,
    components::{
        error_banner::ErrorBanner, loading_spinner::LoadingSpinner, pagination::Pagination,
    },
    config::{AUTHORS_PER_PAGE, LIST_TOP_ANCHOR},
    hooks::use_pagination,
    router::Route,
};

#[function_component(AuthorsPage)]
pub fn authors_page() -> Html {
    let authors = use_state(Vec::<Author>::new);
    let error = use_state(|| None::<ApiError>);
    let loading = use_state(|| true);
    // Bumped by the retry button to re-run the fetch effect.
    let attempt = use_state(|| 0u32);

    {
        let authors = authors.clone();
        let error = error.clone();
        let loading = loading.clone();
        use_effect_with(*attempt, move |_| {
            loading.set(true);
            wasm_bindgen_futures::spawn_local(async move {
                match api::fetch_authors().await {
                    Ok(data) => {
                        authors.set(data);
                        error.set(None);
                    },
                    Err(err) => error.set(Some(err)),
                }
                loading.set(false);
            });
            || ()
        });
    }

    let retry = {
        let attempt = attempt.clone();
        Callback::from(move |_: ()| attempt.set(*attempt + 1))
    };

    let (visible, current_page, total_pages, go_to_page) =
        use_pagination((*authors).clone(), AUTHORS_PER_PAGE, LIST_TOP_ANCHOR);

    let body = if *loading {
        html! { <LoadingSpinner /> }
    } else if let Some(err) = (*error).as_ref() {
        html! { <ErrorBanner message={err.user_message()} on_retry={retry} /> }
    } else if visible.is_empty() {
        html! { <p class="text-[var(--muted)]">{"No authors yet."}</p> }
    } else {
        html! {
            <div class="grid gap-6 md:grid-cols-2 lg:grid-cols-3">
                { for visible.iter().map(|author| html! {
                    <Link<Route>
                        key={author.id.to_string()}
                        to={Route::AuthorDetail { slug: author.route_key() }}
                        classes={classes!("author-card", "flex", "items-center", "gap-4", "rounded-2xl", "border", "border-[var(--border)]", "p-5")}
                    >
                        if let Some(avatar) = author.avatar.as_ref() {
                            <img class="h-14 w-14 rounded-full object-cover" src={avatar.clone()} alt={author.name.clone()} loading="lazy" />
                        }
                        <div>
                            <p class="font-semibold">{ &author.name }</p>
                            if let Some(bio) = author.bio.as_ref() {
                                <p class="text-sm text-[var(--muted)] line-clamp-2">{ bio }</p>
                            }
                        </div>
                    </Link<Route>>
                }) }
            </div>
        }
    };

    html! {
        <main class="container py-10 space-y-6">
            <h1 id={LIST_TOP_ANCHOR} class="text-3xl font-bold scroll-mt-24">{"Authors"}</h1>
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
