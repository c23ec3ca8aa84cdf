use opslearn_shared::{ApiError, Author};
use yew::prelude::*;
use yew_router::prelude::use_navigator;

use crate::{
    api,
    components::{error_banner::ErrorBanner, loading_spinner::LoadingSpinner},
    router::Route,
    session::{use_session, SessionAction},
};

/// Impersonation panel: lists authors and swaps the session token for one
/// acting as the chosen author.
#[function_component(AdminPage)]
pub fn admin_page() -> Html {
    let session = use_session();
    let navigator = use_navigator();
    let authors = use_state(Vec::<Author>::new);
    let loading = use_state(|| true);
    let pending = use_state(|| None::<String>);
    let error = use_state(|| None::<String>);

    {
        let authors = authors.clone();
        let loading = loading.clone();
        let error = error.clone();
        use_effect_with((), move |_| {
            wasm_bindgen_futures::spawn_local(async move {
                match api::fetch_authors().await {
                    Ok(data) => authors.set(data),
                    Err(err) => error.set(Some(err.user_message().to_string())),
                }
                loading.set(false);
            });
            || ()
        });
    }

    if !session.session.is_authenticated() {
        return html! {
            <main class="container py-16 text-center space-y-3">
                <h1 class="text-3xl font-bold">{"Admin"}</h1>
                <p class="text-[var(--muted)]">{"Sign in to use the admin tools."}</p>
            </main>
        };
    }

    let impersonate = {
        let session = session.clone();
        let pending = pending.clone();
        let error = error.clone();
        let navigator = navigator.clone();
        Callback::from(move |slug: String| {
            if pending.is_some() {
                return;
            }
            pending.set(Some(slug.clone()));
            error.set(None);
            let session = session.clone();
            let pending = pending.clone();
            let error = error.clone();
            let navigator = navigator.clone();
            let authorization = session.session.authorization();
            wasm_bindgen_futures::spawn_local(async move {
                match api::impersonate(&slug, authorization.as_deref()).await {
                    Ok(grant) => {
                        session.dispatch(SessionAction::Impersonate {
                            grant,
                            author_slug: slug,
                        });
                        if let Some(navigator) = navigator.as_ref() {
                            navigator.push(&Route::Home);
                        }
                    },
                    Err(err) => {
                        web_sys::console::error_1(
                            &format!("Failed to impersonate {}: {}", slug, err).into(),
                        );
                        let message = match err {
                            ApiError::Status(403) | ApiError::Status(401) => {
                                "Only superusers can impersonate authors.".to_string()
                            },
                            other => other.user_message().to_string(),
                        };
                        error.set(Some(message));
                    },
                }
                pending.set(None);
            });
        })
    };

    let stop = {
        let session = session.clone();
        Callback::from(move |_: MouseEvent| session.dispatch(SessionAction::StopImpersonating))
    };

    let current = session.session.impersonation().map(|imp| imp.author.clone());

    let list = if *loading {
        html! { <LoadingSpinner /> }
    } else {
        html! {
            <table class="w-full text-left text-sm">
                <thead>
                    <tr><th class="py-2">{"Author"}</th><th class="py-2">{"Slug"}</th><th /></tr>
                </thead>
                <tbody>
                    { for authors.iter().map(|author| {
                        let slug = author.route_key();
                        let is_current = current.as_deref() == Some(slug.as_str());
                        let busy = pending.as_deref() == Some(slug.as_str());
                        let onclick = {
                            let impersonate = impersonate.clone();
                            let slug = slug.clone();
                            Callback::from(move |_: MouseEvent| impersonate.emit(slug.clone()))
                        };
                        html! {
                            <tr key={author.id.to_string()} class="border-t border-[var(--border)]">
                                <td class="py-2">{ &author.name }</td>
                                <td class="py-2 font-mono">{ slug.clone() }</td>
                                <td class="py-2 text-right">
                                    if is_current {
                                        <span class="text-[var(--muted)]">{"Active"}</span>
                                    } else {
                                        <button
                                            type="button"
                                            class="rounded-md border border-[var(--border)] px-3 py-1 disabled:opacity-50"
                                            disabled={pending.is_some()}
                                            onclick={onclick}
                                        >
                                            { if busy { "Switching..." } else { "Impersonate" } }
                                        </button>
                                    }
                                </td>
                            </tr>
                        }
                    }) }
                </tbody>
            </table>
        }
    };

    html! {
        <main class="container py-10 space-y-6">
            <h1 class="text-3xl font-bold">{"Admin"}</h1>
            if let Some(author) = current.clone() {
                <div class="flex items-center gap-4 rounded-xl border border-amber-400 p-4">
                    <span>{ format!("Currently acting as {author}") }</span>
                    <button type="button" class="rounded-md border px-3 py-1" onclick={stop}>
                        {"Stop impersonating"}
                    </button>
                </div>
            }
            if let Some(message) = (*error).clone() {
                <ErrorBanner message={message} />
            }
            { list }
        </main>
    }
}
