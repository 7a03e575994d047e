//! Data models and types for the application.
//!
//! - [`View`] - page-level views referenced by the route table

mod view;

pub use view::View;
