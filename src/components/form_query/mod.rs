//! Single form page.
//!
//! Shows the form selected by the `formName` path parameter and any query
//! parameters passed along. Loading the form's contents is not part of the
//! router.

use std::collections::BTreeMap;

use leptos::prelude::*;

use crate::components::{Link, use_router};

stylance::import_crate_style!(css, "src/components/page.module.css");

#[component]
pub fn FormQuery(form_name: String, query: BTreeMap<String, String>) -> impl IntoView {
    let router = use_router();
    let filters = if query.is_empty() {
        view! { <p class=css::muted>"No query parameters."</p> }.into_any()
    } else {
        let items = query
            .into_iter()
            .map(|(key, value)| {
                view! {
                    <li>
                        <span class=css::code>{key}</span>
                        " = "
                        <span class=css::code>{value}</span>
                    </li>
                }
            })
            .collect_view();
        view! { <ul class=css::list>{items}</ul> }.into_any()
    };

    view! {
        <main class=css::page>
            <nav class=css::nav>
                <Link href="/home" class=css::link>"← Forms"</Link>
                <button class=css::textButton on:click=move |_| router.back()>"Back"</button>
            </nav>
            <h1 class=css::title>{form_name}</h1>
            <p class=css::subtitle>"Form query"</p>
            <section class=css::card>{filters}</section>
        </main>
    }
}
