use opslearn_shared::{models::MAX_RATING, ApiError, Comment, NewComment};
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::{api, hooks::use_load_generation, session::use_session, utils::rating_stars};

#[derive(Properties, PartialEq)]
pub struct CommentsProps {
    pub article_id: u64,
}

#[function_component(CommentsSection)]
pub fn comments_section(props: &CommentsProps) -> Html {
    let session = use_session();
    let comments = use_state(Vec::<Comment>::new);
    let loading = use_state(|| true);
    let name = use_state(String::new);
    let content = use_state(String::new);
    let rating = use_state(|| None::<u8>);
    let submitting = use_state(|| false);
    let form_error = use_state(|| None::<String>);
    let loads = use_load_generation();

    {
        let comments = comments.clone();
        let loading = loading.clone();
        use_effect_with(props.article_id, move |article_id| {
            let article_id = *article_id;
            let ticket = loads.begin();
            loading.set(true);
            wasm_bindgen_futures::spawn_local(async move {
                let fetched = api::fetch_comments(article_id).await;
                if ticket.is_current() {
                    comments.set(fetched);
                    loading.set(false);
                }
            });
            move || loads.invalidate()
        });
    }

    let on_name_input = {
        let name = name.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(target) = event.target_dyn_into::<HtmlInputElement>() {
                name.set(target.value());
            }
        })
    };

    let on_content_input = {
        let content = content.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(target) = event.target_dyn_into::<HtmlTextAreaElement>() {
                content.set(target.value());
            }
        })
    };

    let on_submit = {
        let comments = comments.clone();
        let name = name.clone();
        let content = content.clone();
        let rating = rating.clone();
        let submitting = submitting.clone();
        let form_error = form_error.clone();
        let article_id = props.article_id;
        let authorization = session.session.authorization();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            if *submitting {
                return;
            }

            let draft = NewComment {
                name: (*name).clone(),
                content: (*content).clone(),
                rating: *rating,
            };
            let draft = match draft.validated() {
                Ok(draft) => draft,
                Err(reason) => {
                    form_error.set(Some(reason.to_string()));
                    return;
                },
            };

            form_error.set(None);
            submitting.set(true);
            let comments = comments.clone();
            let name = name.clone();
            let content = content.clone();
            let rating = rating.clone();
            let submitting = submitting.clone();
            let form_error = form_error.clone();
            let authorization = authorization.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match api::submit_comment(article_id, draft, authorization.as_deref()).await {
                    Ok(saved) => {
                        let mut next = (*comments).clone();
                        next.push(saved);
                        comments.set(next);
                        name.set(String::new());
                        content.set(String::new());
                        rating.set(None);
                    },
                    Err(err) => {
                        web_sys::console::error_1(
                            &format!("Failed to post comment: {}", err).into(),
                        );
                        let message = match &err {
                            ApiError::Validation(detail) => detail.clone(),
                            other => other.user_message().to_string(),
                        };
                        form_error.set(Some(message));
                    },
                }
                submitting.set(false);
            });
        })
    };

    let star_buttons = (1..=MAX_RATING).map(|value| {
        let rating_state = rating.clone();
        let selected = (*rating).is_some_and(|current| value <= current);
        let onclick = Callback::from(move |_: MouseEvent| {
            // Clicking the selected value again clears the rating.
            if *rating_state == Some(value) {
                rating_state.set(None);
            } else {
                rating_state.set(Some(value));
            }
        });
        html! {
            <button
                type="button"
                key={value.to_string()}
                class={classes!("text-2xl", if selected { "text-amber-500" } else { "text-[var(--muted)]" })}
                aria-label={format!("Rate {value} out of {MAX_RATING}")}
                aria-pressed={selected.to_string()}
                onclick={onclick}
            >
                { if selected { "★" } else { "☆" } }
            </button>
        }
    });

    let list = if *loading {
        html! { <p class="text-[var(--muted)]">{"Loading comments..."}</p> }
    } else if comments.is_empty() {
        html! { <p class="text-[var(--muted)]">{"No comments yet. Be the first to share your thoughts."}</p> }
    } else {
        html! {
            <ul class="space-y-4">
                { for comments.iter().enumerate().map(|(idx, comment)| html! {
                    <li key={idx.to_string()} class="rounded-xl border border-[var(--border)] p-4">
                        <div class="flex items-center justify-between gap-2">
                            <span class="font-semibold">{ &comment.name }</span>
                            if let Some(stars) = comment.rating {
                                <span class="text-amber-500" aria-label={format!("{stars} out of {MAX_RATING}")}>
                                    { rating_stars(stars) }
                                </span>
                            }
                        </div>
                        if !comment.created_at.is_empty() {
                            <p class="text-xs text-[var(--muted)]">{ &comment.created_at }</p>
                        }
                        <p class="mt-2 whitespace-pre-line">{ &comment.content }</p>
                    </li>
                }) }
            </ul>
        }
    };

    html! {
        <section class="comments mt-12" aria-labelledby="comments-title">
            <h2 id="comments-title" class="text-2xl font-bold mb-4">
                { format!("Comments ({})", comments.len()) }
            </h2>
            { list }
            <form class="mt-8 space-y-3" onsubmit={on_submit}>
                <h3 class="text-lg font-semibold">{"Leave a comment"}</h3>
                <input
                    type="text"
                    class="w-full rounded-lg border border-[var(--border)] px-3 py-2"
                    placeholder="Your name"
                    value={(*name).clone()}
                    oninput={on_name_input}
                />
                <textarea
                    class="w-full rounded-lg border border-[var(--border)] px-3 py-2"
                    rows="4"
                    placeholder="What did you think?"
                    value={(*content).clone()}
                    oninput={on_content_input}
                />
                <div class="flex items-center gap-1" role="group" aria-label="Rating">
                    { for star_buttons }
                </div>
                if let Some(message) = (*form_error).clone() {
                    <p class="text-sm text-red-600" role="alert">{ message }</p>
                }
                <button
                    type="submit"
                    class="rounded-lg bg-[var(--primary)] px-4 py-2 font-semibold text-white disabled:opacity-50"
                    disabled={*submitting}
                >
                    { if *submitting { "Posting..." } else { "Post comment" } }
                </button>
            </form>
        </section>
    }
}
