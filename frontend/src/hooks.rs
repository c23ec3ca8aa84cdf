use opslearn_shared::{generation::LoadGeneration, Paginator};
use web_sys::{ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition, ScrollToOptions};
use yew::prelude::*;
use yew_router::prelude::use_location;

/// Paginate arbitrary vectors inside a component.
///
/// Returns the visible slice, the current page, the page count and a
/// callback to switch pages. Switching pages scrolls the element with id
/// `anchor_id` into view. The page state is pulled back into range whenever
/// the list shrinks (e.g. after a filter change).
///
/// # Example
/// ```rust,ignore
/// use crate::hooks::use_pagination;
/// use crate::components::pagination::Pagination;
///
/// #[function_component(ArticlesPage)]
/// fn articles_page() -> Html {
///     let articles = use_state(Vec::<opslearn_shared::Article>::new);
///     let (visible, current_page, total_pages, go_to_page) =
///         use_pagination((*articles).clone(), 6, "list-top");
///
///     html! {
///         <>
///             <div id="list-top" />
///             { for visible.iter().map(|article| html! { <div>{ &article.title }</div> }) }
///             <Pagination
///                 current_page={current_page}
///                 total_pages={total_pages}
///                 on_page_change={go_to_page.clone()}
///             />
///         </>
///     }
/// }
/// ```
#[hook]
pub fn use_pagination<T>(
    items: Vec<T>,
    items_per_page: usize,
    anchor_id: &'static str,
) -> (Vec<T>, usize, usize, Callback<usize>)
where
    T: Clone + PartialEq + 'static,
{
    let pager = Paginator::new(items_per_page);
    let len = items.len();
    let total_pages = pager.total_pages(len);
    let current_page = use_state(|| 1usize);

    {
        let current_page = current_page.clone();
        use_effect_with(total_pages, move |_| {
            let safe_page = pager.clamp(*current_page, len);
            if safe_page != *current_page {
                current_page.set(safe_page);
            }
            || ()
        });
    }

    let memoized_slice = {
        let current_snapshot = pager.clamp(*current_page, len);
        use_memo((items, current_snapshot, pager), move |(items, page, pager)| {
            pager
                .page(items, *page)
                .map(<[T]>::to_vec)
                .unwrap_or_default()
        })
    };

    let visible_items = (*memoized_slice).clone();
    let visible_page = pager.clamp(*current_page, len);
    let go_to_page = {
        let current_page = current_page.clone();
        Callback::from(move |page: usize| {
            // Controls are disabled at the edges; anything else is ignored.
            if page < 1 || page > total_pages || page == *current_page {
                return;
            }
            current_page.set(page);
            scroll_anchor_into_view(anchor_id);
        })
    };

    (visible_items, visible_page, total_pages, go_to_page)
}

/// Load generation that lives as long as the component. Effects take a
/// ticket per fetch and drop the response when the ticket went stale.
#[hook]
pub fn use_load_generation() -> LoadGeneration {
    (*use_memo((), |_| LoadGeneration::new())).clone()
}

/// Automatically scroll the viewport to the top whenever the current route
/// changes.
#[hook]
pub fn use_scroll_to_top() {
    let location = use_location();

    use_effect_with(location, move |location| {
        if location.is_some() {
            scroll_window_to_top();
        }

        || ()
    });
}

fn scroll_window_to_top() {
    if let Some(window) = web_sys::window() {
        let options = ScrollToOptions::new();
        options.set_left(0.0);
        options.set_top(0.0);
        options.set_behavior(ScrollBehavior::Smooth);
        window.scroll_to_with_scroll_to_options(&options);
    }
}

pub fn scroll_anchor_into_view(anchor_id: &str) {
    let Some(element) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(anchor_id))
    else {
        return;
    };
    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    options.set_block(ScrollLogicalPosition::Start);
    element.scroll_into_view_with_scroll_into_view_options(&options);
}
