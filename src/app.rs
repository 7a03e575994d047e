//! Root application module.
//!
//! Contains the App component: error boundary plus the router.

use leptos::prelude::*;

use crate::components::AppRouter;

/// Root application component with error boundary.
///
/// This component:
/// - Wraps the app in an ErrorBoundary for graceful error handling
/// - Renders the [`AppRouter`], which provides the router context
#[component]
pub fn App() -> impl IntoView {
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
                    font-family: system-ui, sans-serif;
                    color: #1f2933;
                ">
                    <div style="max-width: 600px; text-align: center;">
                        <h1 style="color: #cf1124; margin-bottom: 1rem;">
                            "Something went wrong"
                        </h1>
                        <p style="color: #616e7c; margin-bottom: 2rem;">
                            "The application could not start. Please try reloading the page."
                        </p>
                        <ul style="text-align: left; color: #cf1124; font-size: 0.9rem;">
                            {move || errors.get()
                                .into_iter()
                                .map(|(_, e)| view! { <li>{e.to_string()}</li> })
                                .collect::<Vec<_>>()
                            }
                        </ul>
                        <button
                            on:click=move |_| {
                                if let Some(window) = web_sys::window() {
                                    if let Err(e) = window.location().reload() {
                                        tracing::warn!(error = ?e, "page reload failed");
                                    }
                                }
                            }
                            style="
                                background: #2f6fed;
                                color: white;
                                border: none;
                                padding: 0.75rem 2rem;
                                border-radius: 4px;
                                cursor: pointer;
                                font-size: 1rem;
                            "
                        >
                            "Reload Page"
                        </button>
                    </div>
                </div>
            }
        >
            <AppRouter />
        </ErrorBoundary>
    }
}
