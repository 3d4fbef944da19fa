//! Table of contents shown when nothing is selected.

use leptos::prelude::*;
use leptos_icons::Icon;

use docshelf_core::{ManifestNode, ViewKind};

use crate::app::AppContext;
use crate::components::icons as ic;
use crate::components::sidebar::leaf_icon;
use crate::config::APP_TITLE;

stylance::import_crate_style!(css, "src/components/toc.module.css");

/// Full-tree listing rendered in the viewer area. Protected sections
/// appear as a lock marker until unlocked; their children stay hidden.
#[component]
pub fn TableOfContents() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    view! {
        <div class=css::toc>
            <h1 class=css::heading>{APP_TITLE}</h1>
            <ul class=css::list>
                {move || {
                    let unlocked = ctx.session.unlocked.get();
                    ctx.library.with(|root| toc_items(ctx, root.children(), unlocked))
                }}
            </ul>
        </div>
    }
}

/// Recursive renderer. Plain function rather than a component so it can
/// call itself for nested folders.
fn toc_items(
    ctx: AppContext,
    entries: &[(String, ManifestNode)],
    unlocked: bool,
) -> Vec<AnyView> {
    entries
        .iter()
        .map(|(name, node)| match node {
            ManifestNode::Folder { children } => view! {
                <li class=css::folder>
                    <span class=css::folderName>{name.clone()}</span>
                    <ul class=css::list>{toc_items(ctx, children, unlocked)}</ul>
                </li>
            }
            .into_any(),
            ManifestNode::ProtectedFolder { children } => {
                if unlocked {
                    view! {
                        <li class=css::folder>
                            <span class=css::folderName>{name.clone()}</span>
                            <ul class=css::list>{toc_items(ctx, children, unlocked)}</ul>
                        </li>
                    }
                    .into_any()
                } else {
                    view! {
                        <li class=css::folder>
                            <span class=css::protectedName>
                                <Icon icon=ic::LOCK />
                                {name.clone()}
                            </span>
                        </li>
                    }
                    .into_any()
                }
            }
            leaf => {
                let title = name.clone();
                let icon = leaf_icon(leaf);
                let node = leaf.clone();
                view! {
                    <li class=css::leaf>
                        <button
                            class=css::leafButton
                            on:click=move |_| ctx.select_leaf(&title, &node, ViewKind::Rendered)
                        >
                            <span class=css::leafIcon><Icon icon=icon /></span>
                            {name.clone()}
                        </button>
                    </li>
                }
                .into_any()
            }
        })
        .collect()
}
