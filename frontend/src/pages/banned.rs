use opslearn_shared::BanDetails;
use yew::prelude::*;

use crate::{api, components::loading_spinner::LoadingSpinner, session::use_session};

#[function_component(BannedPage)]
pub fn banned_page() -> Html {
    let session = use_session();
    let details = use_state(|| None::<BanDetails>);
    let loading = use_state(|| true);
    let authorization = session.session.authorization();

    {
        let details = details.clone();
        let loading = loading.clone();
        use_effect_with(authorization, move |authorization| {
            let authorization = authorization.clone();
            wasm_bindgen_futures::spawn_local(async move {
                details.set(api::fetch_ban_details(authorization.as_deref()).await);
                loading.set(false);
            });
            || ()
        });
    }

    let body = if *loading {
        html! { <LoadingSpinner /> }
    } else if let Some(ban) = (*details).clone() {
        html! {
            <dl class="grid grid-cols-[8rem_1fr] gap-2 text-left">
                <dt class="font-semibold">{"Reason"}</dt>
                <dd>{ ban.reason.unwrap_or_else(|| "No reason given".to_string()) }</dd>
                if let Some(created) = ban.created_at {
                    <dt class="font-semibold">{"Since"}</dt>
                    <dd>{ created }</dd>
                }
                <dt class="font-semibold">{"Until"}</dt>
                <dd>{ ban.expires_at.unwrap_or_else(|| "Permanent".to_string()) }</dd>
            </dl>
        }
    } else {
        html! { <p class="text-[var(--muted)]">{"There are no active restrictions on your account."}</p> }
    };

    html! {
        <main class="container max-w-xl py-16 space-y-6">
            <h1 class="text-3xl font-bold">{"Account restriction"}</h1>
            { body }
        </main>
    }
}
