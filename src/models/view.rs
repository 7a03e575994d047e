//! Page-level views the router dispatches to.

/// View reference carried by each route definition.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum View {
    /// Sign-in page: `/`
    Login,
    /// Landing page after sign-in: `/home`
    Home,
    /// A single form: `/forms/:formName`
    FormQuery,
}

impl View {
    /// Document title for this view.
    pub fn title(self) -> &'static str {
        match self {
            Self::Login => "Sign in",
            Self::Home => "Home",
            Self::FormQuery => "Form",
        }
    }
}
