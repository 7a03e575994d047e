//! UI components built with Leptos.
//!
//! - [`router`] - Application routing (main entry point) and [`Link`]
//! - [`login`] - Sign-in page
//! - [`home`] - Landing page with form shortcuts
//! - [`form_query`] - Single form page, keyed by the `formName` parameter
//! - [`not_found`] - Fallback for unmatched locations

pub mod form_query;
pub mod home;
pub mod login;
pub mod not_found;
pub mod router;

pub use form_query::FormQuery;
pub use home::Home;
pub use login::Login;
pub use not_found::NotFound;
pub use router::{AppRouter, Link, RouterContext, use_router};
