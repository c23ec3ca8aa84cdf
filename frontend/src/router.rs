use yew::prelude::*;
use yew_router::prelude::*;

use crate::{
    components::{ban_notice::BanNotice, footer::Footer, header::Header},
    hooks::use_scroll_to_top,
    pages,
    session::SessionProvider,
};

#[derive(Routable, Clone, PartialEq, Debug)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/articles")]
    Articles,
    #[at("/articles/:key")]
    ArticleDetail { key: String },
    #[at("/authors")]
    Authors,
    #[at("/authors/:slug")]
    AuthorDetail { slug: String },
    #[at("/categories")]
    Categories,
    #[at("/categories/:slug")]
    CategoryDetail { slug: String },
    #[at("/courses")]
    Courses,
    #[at("/labs")]
    Labs,
    #[at("/admin")]
    Admin,
    #[at("/auth/github/callback")]
    GithubCallback,
    #[at("/banned")]
    Banned,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(route: Route) -> Html {
    match route {
        Route::Home => html! { <pages::home::HomePage /> },
        Route::Articles => html! { <pages::articles::ArticlesPage /> },
        Route::ArticleDetail {
            key,
        } => {
            html! { <pages::article_detail::ArticleDetailPage article_key={key} /> }
        },
        Route::Authors => html! { <pages::authors::AuthorsPage /> },
        Route::AuthorDetail {
            slug,
        } => {
            html! { <pages::author_detail::AuthorDetailPage slug={slug} /> }
        },
        Route::Categories => html! { <pages::categories::CategoriesPage /> },
        Route::CategoryDetail {
            slug,
        } => {
            html! { <pages::category_detail::CategoryDetailPage slug={slug} /> }
        },
        Route::Courses => html! { <pages::directory::CoursesPage /> },
        Route::Labs => html! { <pages::directory::LabsPage /> },
        Route::Admin => html! { <pages::admin::AdminPage /> },
        Route::GithubCallback => html! { <pages::github_callback::GithubCallbackPage /> },
        Route::Banned => html! { <pages::banned::BannedPage /> },
        Route::NotFound => html! { <pages::not_found::NotFoundPage /> },
    }
}

#[function_component(ScrollToTop)]
fn scroll_to_top() -> Html {
    use_scroll_to_top();
    Html::default()
}

#[function_component(AppRouter)]
pub fn app_router() -> Html {
    html! {
        <BrowserRouter>
            <SessionProvider>
                <ScrollToTop />
                <div class="flex flex-col bg-[var(--bg)]" style="min-height: 100vh; min-height: 100svh;">
                    <Header />
                    <BanNotice />
                    <div class="flex-1 pt-[var(--space-sm)]">
                        <Switch<Route> render={switch} />
                    </div>
                    <Footer />
                </div>
            </SessionProvider>
        </BrowserRouter>
    }
}
