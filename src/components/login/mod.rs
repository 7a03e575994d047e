//! Sign-in page.
//!
//! Credentials are not checked here; submitting continues to Home and
//! replaces the Login entry so Back does not return to the form.

use formdesk_core::{NavigationIntent, Params};
use leptos::{ev, prelude::*};

use crate::components::use_router;
use crate::config::{APP_NAME, route_names};

stylance::import_crate_style!(css, "src/components/page.module.css");

#[component]
pub fn Login() -> impl IntoView {
    let router = use_router();
    let (username, set_username) = signal(String::new());
    let is_blank = move || username.with(|u| u.trim().is_empty());

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        if is_blank() {
            return;
        }
        tracing::debug!("login submitted");
        router.navigate_to_route(route_names::HOME, &Params::new(), NavigationIntent::Replace);
    };

    view! {
        <main class=css::page>
            <h1 class=css::title>{APP_NAME}</h1>
            <p class=css::subtitle>"Sign in to continue"</p>
            <form class=css::card on:submit=on_submit>
                <label class=css::field>
                    "Username"
                    <input
                        class=css::input
                        type="text"
                        autocomplete="username"
                        prop:value=username
                        on:input=move |ev| set_username.set(event_target_value(&ev))
                    />
                </label>
                <button class=css::button type="submit" disabled=is_blank>
                    "Continue"
                </button>
            </form>
        </main>
    }
}
