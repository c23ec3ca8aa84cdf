use yew::prelude::*;
use yew_router::prelude::Link;

use crate::router::Route;

#[function_component(NotFoundPage)]
pub fn not_found_page() -> Html {
    html! {
        <main class="container py-16 text-center space-y-4">
            <h2 class="text-3xl font-bold">{"404 - Page not found"}</h2>
            <p>{"Sorry, the page you are looking for does not exist."}</p>
            <Link<Route> to={Route::Home}>{"Back to home"}</Link<Route>>
        </main>
    }
}
