use opslearn_shared::filter::{filter_directory, DirectoryEntry, Level};
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct DirectoryGridProps {
    pub entries: &'static [DirectoryEntry],
    /// Noun used in the empty-state and count lines, e.g. "courses".
    pub noun: AttrValue,
}

/// Searchable card grid over a static course or lab directory.
#[function_component(DirectoryGrid)]
pub fn directory_grid(props: &DirectoryGridProps) -> Html {
    let query = use_state(String::new);
    let level = use_state(|| None::<Level>);

    let on_query_input = {
        let query = query.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(target) = event.target_dyn_into::<HtmlInputElement>() {
                query.set(target.value());
            }
        })
    };

    let on_level_change = {
        let level = level.clone();
        Callback::from(move |event: Event| {
            if let Some(target) = event.target_dyn_into::<HtmlSelectElement>() {
                level.set(Level::parse(&target.value()));
            }
        })
    };

    let visible = filter_directory(props.entries, &query, *level);

    html! {
        <div class="space-y-6">
            <div class="flex flex-wrap gap-3">
                <input
                    type="search"
                    class="flex-1 min-w-[12rem] rounded-lg border border-[var(--border)] px-3 py-2"
                    placeholder={format!("Search {}", props.noun)}
                    value={(*query).clone()}
                    oninput={on_query_input}
                />
                <select
                    class="rounded-lg border border-[var(--border)] px-3 py-2"
                    aria-label="Level"
                    onchange={on_level_change}
                >
                    <option value="" selected={level.is_none()}>{"All levels"}</option>
                    { for Level::ALL.into_iter().map(|option| html! {
                        <option value={option.label()} selected={*level == Some(option)}>
                            { option.label() }
                        </option>
                    }) }
                </select>
            </div>
            <p class="text-sm text-[var(--muted)]">
                { format!("{} of {} {}", visible.len(), props.entries.len(), props.noun) }
            </p>
            if visible.is_empty() {
                <p>{ format!("No {} match your search.", props.noun) }</p>
            } else {
                <div class="grid gap-6 md:grid-cols-2 lg:grid-cols-3">
                    { for visible.into_iter().map(|entry| html! {
                        <article key={entry.title} class="rounded-2xl border border-[var(--border)] p-5 space-y-3">
                            <div class="flex items-center justify-between text-xs uppercase tracking-wide">
                                <span>{ entry.level.label() }</span>
                                <span>{ entry.duration }</span>
                            </div>
                            <h3 class="text-lg font-semibold">{ entry.title }</h3>
                            <p class="text-sm">{ entry.description }</p>
                            <ul class="flex flex-wrap gap-2">
                                { for entry.tags.iter().map(|tag| html! {
                                    <li class="tag-pill">{ format!("#{tag}") }</li>
                                }) }
                            </ul>
                            <a class="inline-block font-semibold text-[var(--primary)]" href={entry.link}>
                                {"Start →"}
                            </a>
                        </article>
                    }) }
                </div>
            }
        </div>
    }
}
