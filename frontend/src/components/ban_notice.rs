use opslearn_shared::BanStatus;
use yew::prelude::*;
use yew_router::prelude::Link;

use crate::{
    api,
    hooks::use_load_generation,
    router::Route,
    session::{use_session, SessionAction},
};

/// Polls the ban status once per token and shows a dismissible notice while
/// the current session is restricted.
#[function_component(BanNotice)]
pub fn ban_notice() -> Html {
    let session = use_session();
    let status = use_state(|| None::<BanStatus>);
    let authorization = session.session.authorization();
    let loads = use_load_generation();

    {
        let status = status.clone();
        use_effect_with(authorization.clone(), move |authorization| {
            let authorization = authorization.clone();
            let ticket = loads.begin();
            if authorization.is_some() {
                wasm_bindgen_futures::spawn_local(async move {
                    let fetched = api::check_ban_status(authorization.as_deref()).await;
                    if ticket.is_current() {
                        status.set(fetched);
                    }
                });
            } else {
                status.set(None);
            }
            move || loads.invalidate()
        });
    }

    let Some(current) = (*status).clone().filter(|s| s.is_banned) else {
        return Html::default();
    };
    if current
        .ban_id
        .is_some_and(|id| session.session.is_ban_dismissed(id))
    {
        return Html::default();
    }

    let dismiss = current.ban_id.map(|id| {
        let session = session.clone();
        Callback::from(move |_: MouseEvent| session.dispatch(SessionAction::DismissBan(id)))
    });

    html! {
        <div class="container my-4">
            <div class={classes!("rounded-xl", "border", "border-red-400", "bg-red-50", "p-4", "text-sm")} role="alert">
                <p class="font-semibold">{"Your account is currently restricted."}</p>
                if let Some(reason) = current.reason.as_ref() {
                    <p>{ format!("Reason: {reason}") }</p>
                }
                if let Some(expires) = current.expires_at.as_ref() {
                    <p>{ format!("Until: {expires}") }</p>
                }
                <div class="mt-2 flex gap-4">
                    <Link<Route> to={Route::Banned}>{"View details"}</Link<Route>>
                    if let Some(dismiss) = dismiss {
                        <button type="button" onclick={dismiss}>{"Dismiss"}</button>
                    }
                </div>
            </div>
        </div>
    }
}
