use yew::prelude::*;
use yew_router::prelude::Link;

use crate::router::Route;

#[function_component(Footer)]
pub fn footer() -> Html {
    html! {
        <footer class={classes!(
            "mt-16",
            "border-t",
            "border-[var(--border)]",
            "py-8",
            "text-sm",
            "text-[var(--muted)]"
        )}>
            <div class="container flex flex-wrap items-center justify-between gap-4">
                <p>{"OpsLearn · hands-on DevOps articles, courses and labs"}</p>
                <nav class="flex gap-4" aria-label="Footer">
                    <Link<Route> to={Route::Articles}>{"Articles"}</Link<Route>>
                    <Link<Route> to={Route::Courses}>{"Courses"}</Link<Route>>
                    <Link<Route> to={Route::Labs}>{"Labs"}</Link<Route>>
                </nav>
            </div>
        </footer>
    }
}
