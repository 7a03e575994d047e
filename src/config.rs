//! Application configuration.
//!
//! Centralizes the constants used throughout the application and the
//! declarative route table.

use formdesk_core::{RouteDefinition, RouteTable, RouterError};

use crate::models::View;

// =============================================================================
// Application Metadata
// =============================================================================

/// Application name shown in page headers.
pub const APP_NAME: &str = "formdesk";

/// Application version.
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

// =============================================================================
// Navigation
// =============================================================================

/// Path prefix the app is served under. Empty or `/` for the site root.
#[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
pub const HISTORY_BASE: &str = "/";

/// Route names, as declared in [`configured_routes`].
pub mod route_names {
    pub const LOGIN: &str = "Login";
    pub const HOME: &str = "Home";
    pub const FORM_QUERY: &str = "FormQuery";
}

/// Path parameter carrying the form name on the FormQuery route.
pub const FORM_NAME_PARAM: &str = "formName";

/// Forms offered as shortcuts on the Home view.
pub const LISTED_FORMS: &[&str] = &["intake", "expense-report", "leave-request"];

// =============================================================================
// Logging
// =============================================================================

/// `tracing` filter directive for the browser console.
pub const LOG_FILTER: &str = "info,formdesk=debug,formdesk_core=debug";

// =============================================================================
// Route Configuration
// =============================================================================

/// Build the application route table.
///
/// Routes are matched in declaration order.
pub fn configured_routes() -> Result<RouteTable<View>, RouterError> {
    RouteTable::new(vec![
        RouteDefinition::new("/", route_names::LOGIN, View::Login)?,
        RouteDefinition::new("/home", route_names::HOME, View::Home)?,
        RouteDefinition::new("/forms/:formName", route_names::FORM_QUERY, View::FormQuery)?,
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_configured_routes() {
        let table = configured_routes().unwrap();
        let declared: Vec<_> = table
            .iter()
            .map(|r| (r.path().as_str(), r.name(), *r.view()))
            .collect();

        assert_eq!(
            declared,
            vec![
                ("/", "Login", View::Login),
                ("/home", "Home", View::Home),
                ("/forms/:formName", "FormQuery", View::FormQuery),
            ]
        );
    }

    #[test]
    fn test_form_route_param() {
        let table = configured_routes().unwrap();
        let form = table.by_name(route_names::FORM_QUERY).unwrap();
        assert_eq!(form.path().param_names().collect::<Vec<_>>(), vec![FORM_NAME_PARAM]);
    }

    #[test]
    fn test_listed_forms_resolve() {
        let table = configured_routes().unwrap();
        let form = table.by_name(route_names::FORM_QUERY).unwrap();
        for name in LISTED_FORMS {
            let params = [(FORM_NAME_PARAM.to_string(), name.to_string())].into();
            assert_eq!(form.href(&params).unwrap(), format!("/forms/{}", name));
        }
    }
}
