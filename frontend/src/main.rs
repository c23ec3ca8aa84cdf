mod api;
mod components;
mod config;
mod directory;
pub mod hooks;
mod pages;
mod router;
mod session;
mod utils;

use yew::prelude::*;

#[function_component(App)]
fn app() -> Html {
    html! {
        <>
            <router::AppRouter />
        </>
    }
}

fn main() {
    yew::Renderer::<App>::new().render();
}
