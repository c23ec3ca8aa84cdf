use opslearn_shared::headings::{TableOfContents, TocNode};
use yew::prelude::*;

use crate::hooks::scroll_anchor_into_view;

#[derive(Properties, PartialEq)]
pub struct TocProps {
    pub headings: TableOfContents,
}

fn render_nodes(nodes: &[TocNode]) -> Html {
    html! {
        <ul class="toc-list">
            { for nodes.iter().map(|node| {
                let anchor = node.heading.id.clone();
                let onclick = {
                    let anchor = anchor.clone();
                    Callback::from(move |event: MouseEvent| {
                        event.prevent_default();
                        scroll_anchor_into_view(&anchor);
                    })
                };
                html! {
                    <li key={anchor.clone()} class={format!("toc-level-{}", node.heading.level)}>
                        <a href={format!("#{anchor}")} onclick={onclick}>{ &node.heading.text }</a>
                        if !node.children.is_empty() {
                            { render_nodes(&node.children) }
                        }
                    </li>
                }
            }) }
        </ul>
    }
}

/// Nested table of contents for an article. Renders nothing for documents
/// without headings.
#[function_component(TableOfContentsPanel)]
pub fn table_of_contents_panel(props: &TocProps) -> Html {
    let tree = use_memo(props.headings.clone(), |headings| headings.tree());

    if props.headings.is_empty() {
        return Html::default();
    }

    html! {
        <nav class={classes!("toc", "rounded-xl", "border", "border-[var(--border)]", "p-4")} aria-label="Table of contents">
            <p class="font-semibold mb-2">{"On this page"}</p>
            { render_nodes(&tree) }
        </nav>
    }
}
