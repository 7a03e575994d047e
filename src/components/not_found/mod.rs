//! Fallback for locations no route matches.

use leptos::prelude::*;

use crate::components::Link;

stylance::import_crate_style!(css, "src/components/page.module.css");

#[component]
pub fn NotFound(path: String) -> impl IntoView {
    view! {
        <main class=css::page>
            <h1 class=css::title>"Page not found"</h1>
            <p class=css::subtitle>
                "Nothing lives at " <span class=css::code>{path}</span>
            </p>
            <Link href="/" class=css::link>"Back to sign in"</Link>
        </main>
    }
}
