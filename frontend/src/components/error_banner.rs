use yew::prelude::*;
use yew_hooks::prelude::use_timeout;

#[derive(Properties, PartialEq)]
pub struct ErrorBannerProps {
    pub message: AttrValue,
    /// Shows a retry button when set. Banners with a retry never auto-dismiss.
    #[prop_or_default]
    pub on_retry: Option<Callback<()>>,
    #[prop_or_default]
    pub on_close: Option<Callback<()>>,
    #[prop_or(false)]
    pub auto_dismiss: bool,
}

#[function_component(ErrorBanner)]
pub fn error_banner(props: &ErrorBannerProps) -> Html {
    let is_open = use_state(|| true);
    let auto_dismiss = props.auto_dismiss && props.on_retry.is_none();

    let dismiss = {
        let is_open = is_open.clone();
        let on_close = props.on_close.clone();
        Callback::from(move |_| {
            if !*is_open {
                return;
            }
            is_open.set(false);
            if let Some(cb) = on_close.as_ref() {
                cb.emit(());
            }
        })
    };

    let auto_timeout = {
        let dismiss = dismiss.clone();
        use_timeout(move || dismiss.emit(()), if auto_dismiss { 4000 } else { 0 })
    };

    {
        let is_open = is_open.clone();
        use_effect_with(props.message.clone(), move |_| {
            is_open.set(true);
        });
    }

    {
        let auto_timeout = auto_timeout.clone();
        use_effect_with((*is_open, auto_dismiss), move |(visible, auto_dismiss)| {
            if *auto_dismiss && *visible {
                auto_timeout.reset();
            } else {
                auto_timeout.cancel();
            }
        });
    }

    if props.message.trim().is_empty() || !*is_open {
        return Html::default();
    }

    let retry_button = props.on_retry.clone().map(|on_retry| {
        let onclick = Callback::from(move |_| on_retry.emit(()));
        html! {
            <button
                type="button"
                class={classes!(
                    "mt-2",
                    "inline-flex",
                    "items-center",
                    "rounded-lg",
                    "px-3",
                    "py-1.5",
                    "text-sm",
                    "font-semibold",
                    "bg-[var(--primary)]",
                    "text-white",
                    "hover:opacity-90"
                )}
                onclick={onclick}
            >
                {"Try again"}
            </button>
        }
    });

    let close_button = {
        let dismiss = dismiss.clone();
        Callback::from(move |_| dismiss.emit(()))
    };

    html! {
        <div
            class={classes!(
                "error-banner",
                "flex",
                "items-start",
                "gap-3",
                "rounded-2xl",
                "px-5",
                "py-4",
                "text-sm",
                "shadow-xl",
                "w-full",
                "max-w-2xl"
            )}
            role="alert"
            aria-live="assertive"
        >
            <span class="text-2xl" aria-hidden="true">{"⚠️"}</span>
            <div class="flex-1 space-y-1">
                <p class="font-semibold text-base">{"Something went wrong"}</p>
                <p>{ props.message.clone() }</p>
                { retry_button.unwrap_or_default() }
            </div>
            <button
                type="button"
                class={classes!(
                    "ml-4",
                    "inline-flex",
                    "h-8",
                    "w-8",
                    "items-center",
                    "justify-center",
                    "rounded-full",
                    "text-lg",
                    "hover:bg-black/10"
                )}
                aria-label="Dismiss error"
                onclick={close_button}
            >
                {"×"}
            </button>
        </div>
    }
}
