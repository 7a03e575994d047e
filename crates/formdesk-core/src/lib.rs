//! Client-side routing for the formdesk single-page application.
//!
//! This crate provides:
//! - [`PathPattern`] parsing and matching (`/forms/:formName`)
//! - [`RouteTable`] of named [`RouteDefinition`]s, first match wins
//! - [`Navigator`] producing a [`NavigationState`] per navigation
//! - [`HistoryBackend`] implementations: [`MemoryHistory`] and, on wasm32,
//!   `BrowserHistory` over the History API
//!
//! Nothing here renders; route views are opaque values handed back to the
//! caller.

pub mod error;
pub mod history;
pub mod location;
mod navigation;
mod navigator;
mod pattern;
mod route;

pub use error::RouterError;
#[cfg(target_arch = "wasm32")]
pub use history::BrowserHistory;
pub use history::{HistoryBackend, HistoryEntry, MemoryHistory, Traversal};
pub use location::Location;
pub use navigation::{NavigationIntent, NavigationState, Params};
pub use navigator::Navigator;
pub use pattern::{MatchOptions, PathPattern};
pub use route::{RouteDefinition, RouteTable};
