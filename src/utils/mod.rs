//! Browser and logging utilities.
//!
//! - [`dom`] - window/document access
//! - [`logging`] - `tracing` output to the browser console

pub mod dom;
pub mod logging;
