use opslearn_shared::pagination::{page_slots, PageSlot};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct PaginationProps {
    pub current_page: usize,
    pub total_pages: usize,
    pub on_page_change: Callback<usize>,
}

#[function_component(Pagination)]
pub fn pagination(props: &PaginationProps) -> Html {
    if props.total_pages <= 1 {
        return Html::default();
    }

    let total_pages = props.total_pages;
    let current_page = props.current_page.clamp(1, total_pages);
    let on_page_change = props.on_page_change.clone();

    // Out-of-range pages are never requested: the edge buttons disable
    // themselves instead.
    let prev_disabled = current_page <= 1;
    let next_disabled = current_page >= total_pages;

    let prev_onclick = {
        let on_page_change = on_page_change.clone();
        Callback::from(move |_| {
            if current_page > 1 {
                on_page_change.emit(current_page - 1);
            }
        })
    };

    let next_onclick = {
        let on_page_change = on_page_change.clone();
        Callback::from(move |_| {
            if current_page < total_pages {
                on_page_change.emit(current_page + 1);
            }
        })
    };

    let base_btn_classes = classes!(
        "inline-flex",
        "items-center",
        "justify-center",
        "min-w-[2.75rem]",
        "h-10",
        "px-3",
        "rounded-lg",
        "border",
        "border-[var(--border)]",
        "bg-[var(--surface)]",
        "text-[var(--text)]",
        "text-sm",
        "font-semibold",
        "transition-all",
        "duration-200",
        "hover:border-[var(--primary)]",
        "hover:text-[var(--primary)]",
        "disabled:opacity-50",
        "disabled:cursor-not-allowed"
    );

    html! {
        <nav class="flex flex-wrap items-center gap-3" aria-label="Pagination">
            <button
                type="button"
                class={base_btn_classes.clone()}
                disabled={prev_disabled}
                onclick={prev_onclick}
                aria-label="Previous page"
            >
                {"<"}
            </button>
            <div class={classes!("flex", "flex-wrap", "items-center", "gap-2")}>
                { for page_slots(current_page, total_pages).into_iter().map(|slot| match slot {
                    PageSlot::Page(page) => {
                        let page_classes = classes!(
                            base_btn_classes.clone(),
                            (page == current_page).then_some(
                                "bg-[var(--primary)] text-white border-transparent cursor-default"
                            )
                        );
                        let onclick = {
                            let on_page_change = on_page_change.clone();
                            Callback::from(move |_| on_page_change.emit(page))
                        };

                        html! {
                            <button
                                key={format!("page-{page}")}
                                type="button"
                                class={page_classes}
                                aria-label={format!("Go to page {page}")}
                                aria-current={(page == current_page).then(|| AttrValue::from("page"))}
                                disabled={page == current_page}
                                onclick={onclick}
                            >
                                { page }
                            </button>
                        }
                    }
                    PageSlot::Ellipsis(id) => html! {
                        <span
                            key={format!("ellipsis-{id}-{current_page}")}
                            class={classes!(base_btn_classes.clone(), "select-none", "opacity-60")}
                            aria-hidden="true"
                        >
                            {"..."}
                        </span>
                    },
                }) }
            </div>
            <button
                type="button"
                class={base_btn_classes.clone()}
                disabled={next_disabled}
                onclick={next_onclick}
                aria-label="Next page"
            >
                {">"}
            </button>
        </nav>
    }
}
