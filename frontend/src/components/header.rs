use yew::prelude::*;
use yew_router::prelude::*;

use crate::{
    config::GITHUB_CLIENT_ID,
    router::Route,
    session::{use_session, SessionAction},
};

const NAV_ITEMS: [(&str, Route); 6] = [
    ("Home", Route::Home),
    ("Articles", Route::Articles),
    ("Authors", Route::Authors),
    ("Categories", Route::Categories),
    ("Courses", Route::Courses),
    ("Labs", Route::Labs),
];

fn github_authorize_url() -> Option<String> {
    if GITHUB_CLIENT_ID.is_empty() {
        return None;
    }
    let origin = web_sys::window()
        .and_then(|w| w.location().origin().ok())
        .unwrap_or_default();
    let redirect = format!("{origin}/auth/github/callback");
    Some(format!(
        "https://github.com/login/oauth/authorize?client_id={}&redirect_uri={}",
        GITHUB_CLIENT_ID,
        String::from(js_sys::encode_uri_component(&redirect))
    ))
}

#[function_component(Header)]
pub fn header() -> Html {
    let mobile_menu_open = use_state(|| false);
    let route = use_route::<Route>();
    let session = use_session();
    let navigator = use_navigator();

    let toggle_mobile_menu = {
        let mobile_menu_open = mobile_menu_open.clone();
        Callback::from(move |_| mobile_menu_open.set(!*mobile_menu_open))
    };

    let close_mobile_menu = {
        let mobile_menu_open = mobile_menu_open.clone();
        Callback::from(move |_| mobile_menu_open.set(false))
    };

    let stop_impersonating = {
        let session = session.clone();
        let navigator = navigator.clone();
        Callback::from(move |_: MouseEvent| {
            session.dispatch(SessionAction::StopImpersonating);
            if let Some(navigator) = navigator.as_ref() {
                navigator.push(&Route::Admin);
            }
        })
    };

    let logout = {
        let session = session.clone();
        let navigator = navigator.clone();
        Callback::from(move |_: MouseEvent| {
            session.dispatch(SessionAction::Logout);
            if let Some(navigator) = navigator.as_ref() {
                navigator.push(&Route::Home);
            }
        })
    };

    let impersonation_banner = session.session.impersonation().map(|imp| {
        html! {
            <div
                class={classes!(
                    "w-full",
                    "bg-amber-500",
                    "text-black",
                    "text-sm",
                    "font-semibold",
                    "py-2",
                    "px-4",
                    "flex",
                    "items-center",
                    "justify-center",
                    "gap-4"
                )}
                role="status"
            >
                <span>{ format!("Viewing the site as {}", imp.author) }</span>
                <button
                    type="button"
                    class="rounded-md border border-black/40 px-3 py-1 hover:bg-black/10"
                    onclick={stop_impersonating.clone()}
                >
                    {"Stop impersonating"}
                </button>
            </div>
        }
    });

    let account = if session.session.is_authenticated() {
        html! {
            <div class="flex items-center gap-3">
                <Link<Route> to={Route::Admin} classes={classes!("nav-link")}>{"Admin"}</Link<Route>>
                <button type="button" class="nav-link" onclick={logout}>{"Log out"}</button>
            </div>
        }
    } else if let Some(url) = github_authorize_url() {
        html! { <a class="nav-link" href={url}>{"Sign in with GitHub"}</a> }
    } else {
        Html::default()
    };

    let nav_links = |onclick: Option<Callback<MouseEvent>>| -> Html {
        NAV_ITEMS
            .iter()
            .map(|(label, target)| {
                let active = route.as_ref() == Some(target);
                html! {
                    <span onclick={onclick.clone()}>
                        <Link<Route>
                            to={target.clone()}
                            classes={classes!("nav-link", active.then_some("nav-link-active"))}
                        >
                            { *label }
                        </Link<Route>>
                    </span>
                }
            })
            .collect()
    };

    html! {
        <header class={classes!("sticky", "top-0", "z-[100]", "bg-[var(--header-bg)]", "backdrop-blur")}>
            { impersonation_banner.unwrap_or_default() }
            <div class="container flex items-center justify-between gap-4 py-3">
                <Link<Route> to={Route::Home} classes={classes!("text-xl", "font-bold", "text-[var(--text)]")}>
                    {"OpsLearn"}
                </Link<Route>>
                <nav class="hidden md:flex items-center gap-5" aria-label="Main">
                    { nav_links(None) }
                </nav>
                <div class="hidden md:block">{ account.clone() }</div>
                <button
                    type="button"
                    class="md:hidden text-2xl"
                    aria-label="Toggle menu"
                    aria-expanded={mobile_menu_open.to_string()}
                    onclick={toggle_mobile_menu}
                >
                    {"☰"}
                </button>
            </div>
            if *mobile_menu_open {
                <nav class="md:hidden flex flex-col gap-3 px-6 pb-4" aria-label="Mobile">
                    { nav_links(Some(close_mobile_menu)) }
                    { account }
                </nav>
            }
        </header>
    }
}
