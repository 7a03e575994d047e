//! Application router component.
//!
//! Handles URL-based routing in history mode (`/home`, `/forms/intake`).
//!
//! # Architecture
//!
//! - **The browser URL is the source of truth**: state is derived from
//!   `location.pathname` through [`Navigator`]
//! - **One state signal**: every navigation publishes a fresh
//!   [`NavigationState`] that [`RouterView`] renders from
//! - **popstate events**: browser back/forward re-sync the navigator
//! - **[`Link`]** turns plain clicks into pushState navigations

use formdesk_core::{NavigationIntent, NavigationState, Navigator, Params, RouterError};
use leptos::reactive::owner::LocalStorage;
use leptos::{ev, prelude::*};
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::Closure;

use crate::components::{FormQuery, Home, Login, NotFound};
use crate::config::{APP_NAME, FORM_NAME_PARAM, configured_routes};
use crate::models::View;
use crate::utils::dom;

#[cfg(target_arch = "wasm32")]
type AppHistory = formdesk_core::BrowserHistory;
#[cfg(not(target_arch = "wasm32"))]
type AppHistory = formdesk_core::MemoryHistory;

#[cfg(target_arch = "wasm32")]
fn app_history() -> Result<AppHistory, RouterError> {
    formdesk_core::BrowserHistory::new(crate::config::HISTORY_BASE)
}

#[cfg(not(target_arch = "wasm32"))]
fn app_history() -> Result<AppHistory, RouterError> {
    Ok(formdesk_core::MemoryHistory::default())
}

// ============================================================================
// RouterContext
// ============================================================================

/// Reactive handle to the navigator, provided at the root of the tree.
///
/// `Copy` because both fields are arena handles. The navigator itself holds
/// browser objects, so it lives in local (non-`Send`) storage.
#[derive(Clone, Copy)]
pub struct RouterContext {
    state: RwSignal<NavigationState<View>>,
    navigator: StoredValue<Navigator<View, AppHistory>, LocalStorage>,
}

impl RouterContext {
    fn new() -> Result<Self, RouterError> {
        let navigator = Navigator::new(configured_routes()?, app_history()?)?;
        Ok(Self {
            state: RwSignal::new(navigator.current_state().clone()),
            navigator: StoredValue::new_local(navigator),
        })
    }

    /// Current navigation state.
    pub fn state(&self) -> ReadSignal<NavigationState<View>> {
        self.state.read_only()
    }

    pub fn navigate(&self, target: &str, intent: NavigationIntent) {
        let result = self
            .navigator
            .try_update_value(|nav| nav.navigate(target, intent));
        self.apply(result);
    }

    /// Navigate to a named route.
    pub fn navigate_to_route(&self, name: &str, params: &Params, intent: NavigationIntent) {
        let result = self
            .navigator
            .try_update_value(|nav| nav.navigate_to_route(name, params, intent));
        self.apply(result);
    }

    /// Go back one entry. The new state arrives through `popstate`.
    pub fn back(&self) {
        match self.navigator.try_update_value(|nav| nav.back()) {
            Some(Ok(Some(state))) => self.state.set(state),
            Some(Err(e)) => tracing::warn!(error = %e, "history traversal failed"),
            _ => {}
        }
    }

    /// Re-read the browser location after `popstate`.
    #[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
    fn sync(&self) {
        let result = self.navigator.try_update_value(|nav| nav.sync());
        self.apply(result);
    }

    /// Href for an in-app location (adds the history base).
    pub fn href(&self, location: &str) -> String {
        self.navigator
            .try_with_value(|nav| nav.href(location))
            .unwrap_or_else(|| location.to_string())
    }

    /// In-app location of a named route, or `None` if it cannot be built.
    pub fn location_for(&self, name: &str, params: &Params) -> Option<String> {
        match self.navigator.try_with_value(|nav| nav.location_for(name, params))? {
            Ok(location) => Some(location),
            Err(e) => {
                tracing::warn!(route = name, error = %e, "cannot build route location");
                None
            }
        }
    }

    fn apply(&self, result: Option<Result<NavigationState<View>, RouterError>>) {
        match result {
            Some(Ok(state)) => self.state.set(state),
            Some(Err(e)) => tracing::warn!(error = %e, "navigation rejected"),
            None => tracing::error!("navigator disposed"),
        }
    }
}

/// Get the [`RouterContext`] provided by [`AppRouter`].
pub fn use_router() -> RouterContext {
    use_context::<RouterContext>().expect("RouterContext must be provided by AppRouter")
}

// ============================================================================
// Main Router
// ============================================================================

/// Main application router.
///
/// - `/` → Login
/// - `/home` → Home
/// - `/forms/:formName` → FormQuery
/// - anything else → NotFound
///
/// Fails (caught by the root `ErrorBoundary`) only if the route table or the
/// history backend cannot be set up.
#[component]
pub fn AppRouter() -> impl IntoView {
    RouterContext::new().map(|router| {
        provide_context(router);

        // Set up popstate listener (runs once on mount)
        #[cfg(target_arch = "wasm32")]
        {
            use wasm_bindgen::JsCast;
            let closure = Closure::wrap(Box::new(move || {
                router.sync();
            }) as Box<dyn Fn()>);

            if let Some(window) = dom::window() {
                let listening = window
                    .add_event_listener_with_callback("popstate", closure.as_ref().unchecked_ref());
                if let Err(e) = listening {
                    tracing::warn!(error = ?e, "cannot listen for popstate");
                }
            }

            // Keep the closure alive for the lifetime of the app
            closure.forget();
        }

        let state = router.state();

        Effect::new(move |_| {
            let title = state.with(|s| s.view().map_or("Not found", |v| v.title()));
            dom::set_title(title, APP_NAME);
        });

        // Scroll to top when the path changes, as a page load would
        Effect::new(move |prev_path: Option<String>| {
            let path = state.with(|s| s.path.clone());
            if prev_path.is_some_and(|prev| prev != path) {
                dom::scroll_to_top();
            }
            path
        });

        view! { <RouterView state=state /> }
    })
}

/// Renders the view of the current route.
#[component]
fn RouterView(state: ReadSignal<NavigationState<View>>) -> impl IntoView {
    move || {
        let current = state.get();
        match current.view() {
            Some(View::Login) => view! { <Login /> }.into_any(),
            Some(View::Home) => view! { <Home /> }.into_any(),
            Some(View::FormQuery) => {
                let form_name = current.param(FORM_NAME_PARAM).unwrap_or_default().to_string();
                view! { <FormQuery form_name=form_name query=current.query.clone() /> }.into_any()
            }
            None => view! { <NotFound path=current.full_path.clone() /> }.into_any(),
        }
    }
}

// ============================================================================
// Link
// ============================================================================

/// Anchor that navigates in-app.
///
/// Plain left clicks become a push (or replace) navigation; modified clicks
/// (new tab, download) are left to the browser.
#[component]
pub fn Link(
    /// In-app location, without the history base.
    #[prop(into)]
    href: String,
    #[prop(optional)] replace: bool,
    #[prop(optional)] class: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    let router = use_router();
    let resolved = router.href(&href);

    let on_click = move |ev: ev::MouseEvent| {
        if ev.default_prevented()
            || ev.button() != 0
            || ev.ctrl_key()
            || ev.meta_key()
            || ev.shift_key()
            || ev.alt_key()
        {
            return;
        }
        ev.prevent_default();
        let intent = if replace {
            NavigationIntent::Replace
        } else {
            NavigationIntent::Push
        };
        router.navigate(&href, intent);
    };

    view! {
        <a href=resolved class=class on:click=on_click>
            {children()}
        </a>
    }
}
