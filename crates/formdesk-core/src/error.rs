//! Error types for route declaration, location resolution, and history access.

use thiserror::Error;

/// Errors produced while building a route table or navigating.
///
/// An unmatched path is not an error: it resolves to the not-found
/// [`NavigationState`](crate::NavigationState).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouterError {
    /// Route pattern is malformed.
    #[error("invalid route pattern '{pattern}': {reason}")]
    InvalidPattern { pattern: String, reason: &'static str },

    /// Parameter segment name is not an identifier.
    #[error("invalid parameter name '{name}' in pattern '{pattern}'")]
    InvalidParamName { pattern: String, name: String },

    /// The same parameter name appears twice in one pattern.
    #[error("parameter '{name}' declared twice in pattern '{pattern}'")]
    DuplicateParam { pattern: String, name: String },

    /// Two routes share a name.
    #[error("route name '{0}' is already registered")]
    DuplicateRouteName(String),

    /// No route with this name exists.
    #[error("no route named '{0}'")]
    UnknownRoute(String),

    /// Reverse resolution is missing a parameter value.
    #[error("route '{route}' requires parameter '{param}'")]
    MissingParam { route: String, param: String },

    /// Reverse resolution received an empty parameter value.
    #[error("parameter '{param}' of route '{route}' must not be empty")]
    EmptyParam { route: String, param: String },

    /// Navigation target points outside the application.
    #[error("location '{0}' is outside the application")]
    ExternalLocation(String),

    /// Browser window not available.
    #[error("browser window not available")]
    NoWindow,

    /// Browser History API call failed.
    #[error("history error: {0}")]
    History(String),
}

pub type Result<T> = std::result::Result<T, RouterError>;
