//! Landing page with shortcuts to the configured forms.

use formdesk_core::{NavigationIntent, Params};
use leptos::{ev, prelude::*};

use crate::components::{Link, use_router};
use crate::config::{APP_NAME, FORM_NAME_PARAM, LISTED_FORMS, route_names};

stylance::import_crate_style!(css, "src/components/page.module.css");

fn form_params(name: &str) -> Params {
    Params::from([(FORM_NAME_PARAM.to_string(), name.to_string())])
}

#[component]
pub fn Home() -> impl IntoView {
    let router = use_router();
    let (form_name, set_form_name) = signal(String::new());

    let open_form = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        let name = form_name.get_untracked().trim().to_string();
        if name.is_empty() {
            return;
        }
        router.navigate_to_route(
            route_names::FORM_QUERY,
            &form_params(&name),
            NavigationIntent::Push,
        );
    };

    let shortcuts = LISTED_FORMS
        .iter()
        .filter_map(|name| {
            let href = router.location_for(route_names::FORM_QUERY, &form_params(name))?;
            Some(view! {
                <li>
                    <Link href=href class=css::link>{*name}</Link>
                </li>
            })
        })
        .collect_view();

    view! {
        <main class=css::page>
            <nav class=css::nav>
                <span>{APP_NAME}</span>
                <Link href="/" replace=true class=css::link>"Sign out"</Link>
            </nav>
            <h1 class=css::title>"Forms"</h1>
            <section class=css::card>
                <ul class=css::list>{shortcuts}</ul>
            </section>
            <form class=css::card on:submit=open_form>
                <label class=css::field>
                    "Open a form by name"
                    <input
                        class=css::input
                        type="text"
                        placeholder="e.g. intake"
                        prop:value=form_name
                        on:input=move |ev| set_form_name.set(event_target_value(&ev))
                    />
                </label>
                <button class=css::button type="submit">"Open"</button>
            </form>
        </main>
    }
}
