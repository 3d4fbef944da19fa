//! Collapsible manifest tree.
//!
//! Renders the merged manifest as a nested folder hierarchy. Folder
//! expand/collapse state persists across reloads; protected folders
//! stay closed behind the password prompt until unlocked.

use icondata::Icon as IconData;
use leptos::prelude::*;
use leptos_icons::Icon;

use docshelf_core::{DualView, ManifestNode, MediaKind, ViewKind, classify};

use crate::app::AppContext;
use crate::components::icons as ic;
use crate::config::APP_TITLE;

stylance::import_crate_style!(css, "src/components/sidebar.module.css");

/// Pick a leaf icon from the media kind its primary address maps to.
pub fn leaf_icon(node: &ManifestNode) -> IconData {
    let Some(address) = node.primary_address() else {
        return ic::FILE;
    };
    match classify(address) {
        MediaKind::Pdf => ic::FILE_PDF,
        MediaKind::Docx | MediaKind::Doc | MediaKind::Html => ic::FILE_TEXT,
        MediaKind::YouTube { .. } => ic::VIDEO,
        MediaKind::SoundCloud => ic::AUDIO,
        MediaKind::Generic => ic::FILE,
    }
}

#[component]
pub fn Sidebar() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    view! {
        <nav class=css::sidebar aria-label="Document tree">
            <div class=css::header>
                <span class=css::headerTitle>{APP_TITLE}</span>
                <button
                    class=css::closeButton
                    aria-label="Close sidebar"
                    on:click=move |_| ctx.session.drawer_open.set(false)
                >
                    <Icon icon=ic::CLOSE />
                </button>
            </div>
            <div class=css::tree role="tree">
                {move || ctx.library.with(|root| tree_rows(ctx, root.children(), "", 0))}
            </div>
        </nav>
    }
}

/// Recursive row renderer. A plain function rather than a component so
/// it can call itself for nested folders; the enclosing closure in
/// [`Sidebar`] re-runs when the manifest or session signals change.
fn tree_rows(
    ctx: AppContext,
    entries: &[(String, ManifestNode)],
    prefix: &str,
    level: usize,
) -> Vec<AnyView> {
    entries
        .iter()
        .map(|(name, node)| {
            let path = if prefix.is_empty() {
                name.clone()
            } else {
                format!("{}/{}", prefix, name)
            };
            match node {
                ManifestNode::Folder { children } => {
                    folder_row(ctx, name, node_children(children), path, level, false)
                }
                ManifestNode::ProtectedFolder { children } => {
                    if ctx.session.unlocked.get() {
                        folder_row(ctx, name, node_children(children), path, level, true)
                    } else {
                        locked_row(ctx, name, path, level)
                    }
                }
                leaf => leaf_row(ctx, name, leaf, level),
            }
        })
        .collect()
}

// Clone out of the borrowed tree so rows can own their subtree.
fn node_children(children: &[(String, ManifestNode)]) -> Vec<(String, ManifestNode)> {
    children.to_vec()
}

fn folder_row(
    ctx: AppContext,
    name: &str,
    children: Vec<(String, ManifestNode)>,
    path: String,
    level: usize,
    protected: bool,
) -> AnyView {
    let open = ctx.session.open_folders.with(|set| set.contains(&path));
    let chevron = if open { ic::CHEVRON_DOWN } else { ic::CHEVRON_RIGHT };
    let folder = if open { ic::FOLDER_OPEN } else { ic::FOLDER };
    let toggle_path = path.clone();
    let nested = open.then(|| tree_rows(ctx, &children, &path, level + 1));

    view! {
        <div role="treeitem" aria-expanded=open.to_string()>
            <button
                class=css::row
                style=row_indent(level)
                on:click=move |_| ctx.toggle_folder(&toggle_path)
            >
                <span class=css::chevron><Icon icon=chevron /></span>
                <span class=css::rowIcon><Icon icon=folder /></span>
                <span class=css::rowName>{name.to_string()}</span>
                {protected.then(|| view! { <span class=css::lockMark><Icon icon=ic::LOCK /></span> })}
            </button>
            {nested}
        </div>
    }
    .into_any()
}

fn locked_row(ctx: AppContext, name: &str, path: String, level: usize) -> AnyView {
    view! {
        <button
            class=css::row
            style=row_indent(level)
            on:click=move |_| ctx.session.auth_prompt.set(Some(path.clone()))
        >
            <span class=css::chevron></span>
            <span class=css::rowIcon><Icon icon=ic::LOCK /></span>
            <span class=css::rowName>{name.to_string()}</span>
        </button>
    }
    .into_any()
}

fn leaf_row(ctx: AppContext, name: &str, node: &ManifestNode, level: usize) -> AnyView {
    let icon = leaf_icon(node);
    let selected = ctx.session.selection.with(|sel| {
        sel.as_ref()
            .is_some_and(|s| node_addresses(node).contains(&s.address.as_str()))
    });
    let row_class = if selected {
        format!("{} {}", css::row, css::selected)
    } else {
        css::row.to_string()
    };

    let title = name.to_string();
    let primary_node = node.clone();
    let primary = move |_| ctx.select_leaf(&title, &primary_node, ViewKind::Rendered);

    // Dual-view leaves get a trailing button for the original file.
    let original = matches!(node, ManifestNode::DualView(DualView { .. })).then(|| {
        let title = name.to_string();
        let node = node.clone();
        view! {
            <button
                class=css::originalButton
                aria-label="Open original file"
                on:click=move |ev: leptos::ev::MouseEvent| {
                    ev.stop_propagation();
                    ctx.select_leaf(&title, &node, ViewKind::Original);
                }
            >
                <Icon icon=ic::DOWNLOAD />
            </button>
        }
    });

    view! {
        <div class=css::leafRow role="treeitem" aria-selected=selected.to_string()>
            <button class=row_class style=row_indent(level) on:click=primary>
                <span class=css::chevron></span>
                <span class=css::rowIcon><Icon icon=icon /></span>
                <span class=css::rowName>{name.to_string()}</span>
            </button>
            {original}
        </div>
    }
    .into_any()
}

fn node_addresses(node: &ManifestNode) -> Vec<&str> {
    match node {
        ManifestNode::SingleView(address) => vec![address.as_str()],
        ManifestNode::DualView(DualView {
            rendered, original, ..
        }) => vec![rendered.as_str(), original.as_str()],
        _ => Vec::new(),
    }
}

fn row_indent(level: usize) -> String {
    format!("padding-left: {}rem;", 0.5 + level as f64 * 0.9)
}
