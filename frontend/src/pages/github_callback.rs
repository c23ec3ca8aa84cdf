use serde::Deserialize;
use yew::prelude::*;
use yew_router::prelude::{use_location, use_navigator, Link};

use crate::{
    api,
    components::loading_spinner::LoadingSpinner,
    router::Route,
    session::{use_session, SessionAction},
};

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
struct CallbackQuery {
    #[serde(default)]
    code: Option<String>,
    #[serde(default)]
    error: Option<String>,
}

/// Landing page of the GitHub OAuth redirect. Exchanges the one-time code
/// for an API token and signs the session in.
#[function_component(GithubCallbackPage)]
pub fn github_callback_page() -> Html {
    let location = use_location();
    let navigator = use_navigator();
    let session = use_session();
    let failure = use_state(|| None::<String>);

    let query = location
        .as_ref()
        .and_then(|loc| loc.query::<CallbackQuery>().ok())
        .unwrap_or_default();

    {
        let failure = failure.clone();
        use_effect_with(query.clone(), move |query| {
            match (query.code.clone(), query.error.clone()) {
                (_, Some(reason)) => failure.set(Some(format!("GitHub sign-in was cancelled ({reason})."))),
                (None, None) => failure.set(Some("No authorization code was provided.".to_string())),
                (Some(code), None) => {
                    wasm_bindgen_futures::spawn_local(async move {
                        match api::exchange_github_code(&code).await {
                            Ok(exchange) => {
                                session.dispatch(SessionAction::Login(exchange.token));
                                if let Some(navigator) = navigator.as_ref() {
                                    navigator.replace(&Route::Home);
                                }
                            },
                            Err(err) => {
                                web_sys::console::error_1(
                                    &format!("GitHub token exchange failed: {}", err).into(),
                                );
                                failure.set(Some(err.user_message().to_string()));
                            },
                        }
                    });
                },
            }
            || ()
        });
    }

    html! {
        <main class="container py-16 text-center space-y-4">
            if let Some(message) = (*failure).clone() {
                <h1 class="text-2xl font-bold">{"Sign-in failed"}</h1>
                <p class="text-[var(--muted)]">{ message }</p>
                <Link<Route> to={Route::Home}>{"Back to home"}</Link<Route>>
            } else {
                <LoadingSpinner label={AttrValue::from("Signing you in...")} />
            }
        </main>
    }
}
