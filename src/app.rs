//! Root application module.
//!
//! Contains the main App component, AppContext definition, SessionState,
//! and application-level setup logic following Leptos conventions.

use std::collections::HashSet;

use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use docshelf_core::{DualView, ManifestNode, ViewKind, merge_manifests, resolve_from_address,
    resolve_to_address};

use crate::components::{AuthDialog, ContentViewer, Sidebar};
use crate::config::{APP_TITLE, DOCS_MANIFEST_URL, MEDIA_MANIFEST_URL, cache};
use crate::models::Selection;
use crate::models::session::{self, LocalSettings};
use crate::utils::{dom, fetch};

stylance::import_crate_style!(css, "src/app.module.css");

// ============================================================================
// SessionState
// ============================================================================

/// Per-tab UI state managed with Leptos signals.
///
/// The expanded-folder set and the unlock flag are mirrored to
/// localStorage so they survive reloads; everything else is ephemeral.
#[derive(Clone, Copy)]
pub struct SessionState {
    /// Currently selected document, if any.
    pub selection: RwSignal<Option<Selection>>,
    /// Paths of folders currently expanded in the sidebar.
    pub open_folders: RwSignal<HashSet<String>>,
    /// Whether protected sections have been unlocked.
    pub unlocked: RwSignal<bool>,
    /// Sidebar drawer visibility (mobile layout).
    pub drawer_open: RwSignal<bool>,
    /// Protected folder path awaiting a password, if a prompt is open.
    pub auth_prompt: RwSignal<Option<String>>,
}

impl SessionState {
    /// Restores persisted state from localStorage; malformed or missing
    /// entries fall back to defaults.
    pub fn restore() -> Self {
        Self {
            selection: RwSignal::new(None),
            open_folders: RwSignal::new(session::load_open_folders(&LocalSettings)),
            unlocked: RwSignal::new(session::load_unlocked(&LocalSettings)),
            drawer_open: RwSignal::new(!dom::is_mobile_or_tablet()),
            auth_prompt: RwSignal::new(None),
        }
    }
}

// ============================================================================
// AppContext
// ============================================================================

/// Application-wide reactive context.
///
/// Provided at the root of the component tree and accessed from any
/// child component using `use_context::<AppContext>()`.
#[derive(Clone, Copy)]
pub struct AppContext {
    /// The merged manifest tree (documents + media).
    pub library: RwSignal<ManifestNode>,
    /// Per-tab UI state.
    pub session: SessionState,
}

impl AppContext {
    pub fn new() -> Self {
        Self {
            library: RwSignal::new(ManifestNode::empty()),
            session: SessionState::restore(),
        }
    }

    /// Makes `selection` current: updates the viewer, the document
    /// title, and the address bar. On narrow viewports the drawer is
    /// closed so the document is immediately visible.
    pub fn select(&self, selection: Selection, slug: Option<&str>) {
        let path =
            resolve_to_address(&selection.title, &selection.address, slug, selection.view);
        dom::push_pathname(&path);
        dom::set_document_title(&format!("{} - {}", selection.title, APP_TITLE));
        self.session.selection.set(Some(selection));
        if dom::is_mobile_or_tablet() {
            self.session.drawer_open.set(false);
        }
    }

    /// Selects a leaf node from the tree. `view` picks the side of a
    /// dual-view entry; single-view entries infer theirs from the
    /// address prefix.
    pub fn select_leaf(&self, title: &str, node: &ManifestNode, view: ViewKind) {
        match node {
            ManifestNode::SingleView(address) => {
                let view = if address.contains("docs_raw/") {
                    ViewKind::Original
                } else {
                    ViewKind::Rendered
                };
                self.select(Selection::new(title, address.clone(), view), None);
            }
            ManifestNode::DualView(DualView {
                rendered,
                original,
                slug,
            }) => {
                let address = match view {
                    ViewKind::Rendered => rendered,
                    ViewKind::Original => original,
                };
                let slug = (!slug.is_empty()).then_some(slug.as_str());
                self.select(
                    Selection::new(title, address.clone(), view).with_dual(true),
                    slug,
                );
            }
            ManifestNode::Folder { .. } | ManifestNode::ProtectedFolder { .. } => {}
        }
    }

    /// Toggles a folder open or closed and persists the new set.
    pub fn toggle_folder(&self, path: &str) {
        self.session.open_folders.update(|open| {
            if !open.remove(path) {
                open.insert(path.to_string());
            }
        });
        self.session
            .open_folders
            .with_untracked(|open| session::save_open_folders(&LocalSettings, open));
    }

    /// Records a successful unlock and expands the folder that prompted
    /// the password dialog.
    pub fn unlock(&self) {
        self.session.unlocked.set(true);
        session::save_unlocked(&LocalSettings);
        if let Some(path) = self.session.auth_prompt.get_untracked() {
            self.toggle_folder(&path);
        }
        self.session.auth_prompt.set(None);
    }

    /// Restores the selection encoded in the current browser path, if
    /// it resolves against the loaded manifest. A path that matches
    /// nothing leaves the viewer on the table of contents.
    pub fn restore_from_location(&self) {
        let path = dom::current_pathname();
        if path.is_empty() || path == "/" {
            self.session.selection.set(None);
            return;
        }
        let resolved = self
            .library
            .with_untracked(|root| resolve_from_address(root, &path));
        match resolved {
            Some(hit) => {
                dom::set_document_title(&format!("{} - {}", hit.title, APP_TITLE));
                self.session.selection.set(Some(
                    Selection::new(hit.title, hit.address, hit.view).with_dual(true),
                ));
            }
            None => self.session.selection.set(None),
        }
    }
}

impl Default for AppContext {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// Manifest Loading
// ============================================================================

/// Fetches and merges both manifests, then restores any selection
/// encoded in the address bar.
///
/// Either fetch failing is logged to the console and treated as an
/// empty tree; the UI continues without retry.
async fn load_library(ctx: AppContext) {
    let docs = match fetch::fetch_json_cached(DOCS_MANIFEST_URL, cache::DOCS_MANIFEST_KEY).await {
        Ok(value) => value,
        Err(e) => {
            web_sys::console::error_1(&format!("Failed to load documents manifest: {}", e).into());
            serde_json::Value::Object(serde_json::Map::new())
        }
    };
    let media = match fetch::fetch_json_cached(MEDIA_MANIFEST_URL, cache::MEDIA_MANIFEST_KEY).await
    {
        Ok(value) => value,
        Err(e) => {
            web_sys::console::error_1(&format!("Failed to load media manifest: {}", e).into());
            serde_json::Value::Object(serde_json::Map::new())
        }
    };

    let merged = merge_manifests(docs, media);
    ctx.library.set(ManifestNode::from_value(&merged));
    ctx.restore_from_location();
}

/// Re-resolves the selection when the user navigates with the browser
/// back/forward buttons.
#[cfg(target_arch = "wasm32")]
fn listen_popstate(ctx: AppContext) {
    use wasm_bindgen::JsCast;
    use wasm_bindgen::closure::Closure;

    let Some(window) = dom::window() else {
        return;
    };
    let closure = Closure::<dyn FnMut(web_sys::Event)>::new(move |_| {
        ctx.restore_from_location();
    });
    let _ = window
        .add_event_listener_with_callback("popstate", closure.as_ref().unchecked_ref());
    // The listener lives for the page lifetime.
    closure.forget();
}

#[cfg(not(target_arch = "wasm32"))]
fn listen_popstate(_ctx: AppContext) {}

// ============================================================================
// App Component
// ============================================================================

/// Root application component with error boundary.
///
/// Creates and provides the global AppContext, kicks off the manifest
/// load, and renders the sidebar/viewer layout.
#[component]
pub fn App() -> impl IntoView {
    let ctx = AppContext::new();
    provide_context(ctx);

    // Guard so the load effect runs exactly once.
    let loaded = StoredValue::new(false);
    Effect::new(move |_| {
        if loaded.get_value() {
            return;
        }
        loaded.set_value(true);
        listen_popstate(ctx);
        spawn_local(load_library(ctx));
    });

    view! {
        <ErrorBoundary
            fallback=|errors| view! {
                <div style="
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    justify-content: center;
                    height: 100vh;
                    padding: 2rem;
                    font-family: Georgia, serif;
                ">
                    <h1 style="margin-bottom: 1rem;">"Something went wrong"</h1>
                    <p style="color: #777; margin-bottom: 2rem;">
                        "An unexpected error occurred. Please try reloading the page."
                    </p>
                    <ul style="color: #b00; font-size: 0.9rem;">
                        {move || errors.get()
                            .into_iter()
                            .map(|(_, e)| view! { <li>{e.to_string()}</li> })
                            .collect::<Vec<_>>()
                        }
                    </ul>
                </div>
            }
        >
            <Layout />
        </ErrorBoundary>
    }
}

#[component]
fn Layout() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    view! {
        <div class=css::shell>
            <Show when=move || ctx.session.drawer_open.get()>
                <Sidebar />
            </Show>
            <main class=css::content>
                <DrawerToggle />
                <ContentViewer />
            </main>
            <AuthDialog />
        </div>
    }
}

/// Hamburger button that shows/hides the sidebar drawer.
#[component]
fn DrawerToggle() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    view! {
        <button
            class=css::drawerToggle
            aria-label="Toggle sidebar"
            on:click=move |_| ctx.session.drawer_open.update(|open| *open = !*open)
        >
            <leptos_icons::Icon icon=crate::components::icons::MENU />
        </button>
    }
}
