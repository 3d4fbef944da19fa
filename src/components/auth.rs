//! Password prompt for protected sections.
//!
//! The gate is a cosmetic client-side check, not an access-control
//! boundary; the protected content is already present in memory.

use leptos::prelude::*;
use leptos_icons::Icon;

use crate::app::AppContext;
use crate::components::icons as ic;
use crate::config::GATE_PASSWORD;
use crate::utils::dom;

stylance::import_crate_style!(css, "src/components/auth.module.css");

/// Modal dialog shown when a locked protected folder is clicked.
///
/// A wrong password shows a blocking alert; there is no lockout or
/// rate limiting.
#[component]
pub fn AuthDialog() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let password = RwSignal::new(String::new());

    let submit = move || {
        if password.get_untracked() == GATE_PASSWORD {
            ctx.unlock();
        } else {
            dom::alert("Incorrect password");
        }
        password.set(String::new());
    };

    let close = move |_| ctx.session.auth_prompt.set(None);

    view! {
        <Show when=move || ctx.session.auth_prompt.get().is_some()>
            <div class=css::backdrop on:click=close>
                <div class=css::dialog on:click=|ev: leptos::ev::MouseEvent| ev.stop_propagation()>
                    <div class=css::header>
                        <span class=css::lockIcon><Icon icon=ic::LOCK /></span>
                        <span class=css::headerTitle>"Protected section"</span>
                        <button class=css::closeButton aria-label="Close" on:click=close>
                            <Icon icon=ic::CLOSE />
                        </button>
                    </div>
                    <p class=css::hint>"Enter the password to view this section."</p>
                    <input
                        class=css::input
                        type="password"
                        autofocus=true
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                        on:keydown=move |ev: leptos::ev::KeyboardEvent| {
                            if ev.key() == "Enter" {
                                submit();
                            }
                        }
                    />
                    <button class=css::unlockButton on:click=move |_| submit()>
                        "Unlock"
                    </button>
                </div>
            </div>
        </Show>
    }
}
