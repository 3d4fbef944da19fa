//! Content viewer: classifies the selected address and dispatches to
//! the matching inline renderer.

use leptos::html;
use leptos::prelude::*;
use leptos_icons::Icon;
use wasm_bindgen_futures::spawn_local;

use docshelf_core::{MediaKind, ViewKind, classify, docx_to_html};

use crate::app::AppContext;
use crate::components::icons as ic;
use crate::components::toc::TableOfContents;
use crate::config::{HTML_DESIGN_WIDTH_PX, SOUNDCLOUD_PLAYER_URL, YOUTUBE_EMBED_PARAMS};
use crate::models::Selection;
use crate::utils::{dom, fetch};

stylance::import_crate_style!(css, "src/components/viewer.module.css");

#[component]
pub fn ContentViewer() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    view! {
        <div class=css::viewer>
            {move || match ctx.session.selection.get() {
                Some(selection) => view! { <DocumentView selection=selection /> }.into_any(),
                None => view! { <TableOfContents /> }.into_any(),
            }}
        </div>
    }
}

#[component]
fn DocumentView(selection: Selection) -> impl IntoView {
    let kind = classify(&selection.address);
    let heading = selection.display_title();

    view! {
        <article class=css::document>
            <h2 class=css::title>{heading}</h2>
            {dispatch(selection, kind)}
        </article>
    }
}

fn dispatch(selection: Selection, kind: MediaKind) -> AnyView {
    match kind {
        MediaKind::Pdf => pdf_frame(&selection),
        MediaKind::Docx => view! { <DocxView address=selection.address /> }.into_any(),
        MediaKind::Doc => download_only(&selection),
        MediaKind::Html => view! { <ScaledHtmlFrame address=selection.address /> }.into_any(),
        MediaKind::YouTube { video_id } => youtube_embed(video_id),
        MediaKind::SoundCloud => soundcloud_embed(&selection.address),
        MediaKind::Generic => view! {
            <iframe class=css::frame src=selection.address.clone() title="Document" />
        }
        .into_any(),
    }
}

/// Rendered view opens at page 1 fitted to the container width; the
/// original view embeds the file untouched.
fn pdf_frame(selection: &Selection) -> AnyView {
    match selection.view {
        ViewKind::Original => view! {
            <iframe class=css::frame src=selection.address.clone() title="PDF document" />
        }
        .into_any(),
        ViewKind::Rendered => {
            let src = format!("{}#page=1&zoom=page-width", selection.address);
            let class = if dom::is_mobile_or_tablet() {
                format!("{} {}", css::frame, css::frameCompact)
            } else {
                css::frame.to_string()
            };
            view! { <iframe class=class src=src title="PDF document" /> }.into_any()
        }
    }
}

/// Legacy .doc has no inline renderer; offer the file for download.
fn download_only(selection: &Selection) -> AnyView {
    view! {
        <div class=css::downloadBox>
            <p>"This document format cannot be previewed in the browser."</p>
            <a class=css::downloadLink href=selection.address.clone() download="">
                <Icon icon=ic::DOWNLOAD />
                "Download original file"
            </a>
        </div>
    }
    .into_any()
}

fn youtube_embed(video_id: Option<String>) -> AnyView {
    match video_id {
        Some(id) => {
            let src = format!("https://www.youtube.com/embed/{}?{}", id, YOUTUBE_EMBED_PARAMS);
            view! {
                <iframe
                    class=css::mediaFrame
                    src=src
                    title="YouTube video"
                    allow="accelerometer; autoplay; encrypted-media; gyroscope; picture-in-picture"
                    allowfullscreen=true
                />
            }
            .into_any()
        }
        None => view! {
            <p class=css::mediaError>"This video link could not be read."</p>
        }
        .into_any(),
    }
}

fn soundcloud_embed(address: &str) -> AnyView {
    let encoded = String::from(js_sys::encode_uri_component(address));
    let src = format!("{}?url={}&auto_play=false", SOUNDCLOUD_PLAYER_URL, encoded);
    view! {
        <iframe class=css::audioFrame src=src title="SoundCloud track" allow="autoplay" />
    }
    .into_any()
}

/// Fetches the document and converts it to markup client-side.
///
/// A fetch or conversion failure is logged to the console and leaves
/// the loading placeholder on screen; re-selection recovers.
#[component]
fn DocxView(address: String) -> impl IntoView {
    let markup = RwSignal::new(None::<String>);

    Effect::new(move |_| {
        let address = address.clone();
        spawn_local(async move {
            match fetch::fetch_bytes(&address).await {
                Ok(bytes) => match docx_to_html(&bytes) {
                    Ok(html) => markup.set(Some(html)),
                    Err(e) => web_sys::console::error_1(
                        &format!("DOCX conversion failed: {}", e).into(),
                    ),
                },
                Err(e) => {
                    web_sys::console::error_1(&format!("DOCX fetch failed: {}", e).into())
                }
            }
        });
    });

    view! {
        {move || match markup.get() {
            Some(html) => view! { <div class=css::docxBody inner_html=html /> }.into_any(),
            None => view! { <p class=css::placeholder>"Loading DOCX..."</p> }.into_any(),
        }}
    }
}

/// Embeds a pre-rendered HTML document at its fixed design width and
/// scales it uniformly down to the container.
#[component]
fn ScaledHtmlFrame(address: String) -> impl IntoView {
    let container = NodeRef::<html::Div>::new();
    let scale = RwSignal::new(1.0_f64);

    Effect::new(move |_| {
        if let Some(el) = container.get() {
            let width = el.client_width() as f64;
            if width > 0.0 {
                scale.set((width / HTML_DESIGN_WIDTH_PX).min(1.0));
            }
        }
    });

    view! {
        <div node_ref=container class=css::htmlContainer>
            <iframe
                class=css::htmlFrame
                src=address
                title="Document"
                style=move || {
                    format!(
                        "width: {}px; height: {}px; transform: scale({}); transform-origin: top left;",
                        HTML_DESIGN_WIDTH_PX,
                        HTML_DESIGN_WIDTH_PX * 1.4,
                        scale.get(),
                    )
                }
            />
        </div>
    }
}
