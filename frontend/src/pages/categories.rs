use opslearn_shared::Category;
use yew::prelude::*;
use yew_router::prelude::Link;

use crate::{api, components::loading_spinner::LoadingSpinner, router::Route};

#[function_component(CategoriesPage)]
pub fn categories_page() -> Html {
    let categories = use_state(Vec::<Category>::new);
    let loading = use_state(|| true);

    {
        let categories = categories.clone();
        let loading = loading.clone();
        use_effect_with((), move |_| {
            wasm_bindgen_futures::spawn_local(async move {
                categories.set(api::fetch_categories(true).await);
                loading.set(false);
            });
            || ()
        });
    }

    let body = if *loading {
        html! { <LoadingSpinner /> }
    } else if categories.is_empty() {
        html! { <p class="text-[var(--muted)]">{"No categories yet."}</p> }
    } else {
        html! {
            <div class="grid gap-4 md:grid-cols-2 lg:grid-cols-3">
                { for categories.iter().map(|category| html! {
                    <Link<Route>
                        key={category.id.to_string()}
                        to={Route::CategoryDetail { slug: category.route_key() }}
                        classes={classes!("flex", "items-center", "justify-between", "rounded-2xl", "border", "border-[var(--border)]", "p-5", "hover:border-[var(--primary)]")}
                    >
                        <span class="font-semibold">{ &category.name }</span>
                        if let Some(count) = category.post_count {
                            <span class="text-sm text-[var(--muted)]">
                                { format!("{count} {}", if count == 1 { "post" } else { "posts" }) }
                            </span>
                        }
                    </Link<Route>>
                }) }
            </div>
        }
    };

    html! {
        <main class="container py-10 space-y-6">
            <h1 class="text-3xl font-bold">{"Categories"}</h1>
            { body }
        </main>
    }
}
