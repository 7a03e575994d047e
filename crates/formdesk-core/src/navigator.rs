//! Navigator: resolves locations against the route table and drives history.

use tracing::{debug, warn};

use crate::error::{Result, RouterError};
use crate::history::{HistoryBackend, Traversal};
use crate::location::Location;
use crate::navigation::{NavigationIntent, NavigationState, Params};
use crate::route::RouteTable;

/// Owns the route table, a history backend, and the current state.
///
/// Navigations run one at a time on the caller's thread; each returns the
/// state it produced, which also becomes [`current_state`](Self::current_state).
pub struct Navigator<V, H> {
    table: RouteTable<V>,
    history: H,
    current: NavigationState<V>,
}

impl<V, H: HistoryBackend> Navigator<V, H> {
    /// Creates a navigator positioned at the backend's current location.
    pub fn new(table: RouteTable<V>, history: H) -> Result<Self> {
        let location = Location::parse(&history.location())?;
        let current = NavigationState::new(&location, table.match_location(&location));
        debug!(path = %current.full_path, route = ?current.name(), "router initialized");
        Ok(Self {
            table,
            history,
            current,
        })
    }

    pub fn routes(&self) -> &RouteTable<V> {
        &self.table
    }

    pub fn history(&self) -> &H {
        &self.history
    }

    /// Most recent navigation result.
    pub fn current_state(&self) -> &NavigationState<V> {
        &self.current
    }

    /// Compute the state for `target` without touching history.
    ///
    /// Relative targets resolve against the current path.
    pub fn resolve(&self, target: &str) -> Result<NavigationState<V>> {
        let location = Location::resolve(target, &self.current.path)?;
        Ok(NavigationState::new(
            &location,
            self.table.match_location(&location),
        ))
    }

    /// Navigate to `target`, recording it in history according to `intent`.
    ///
    /// Unmatched paths still navigate and yield the not-found state. Pushing
    /// the location that is already current does not add a history entry.
    pub fn navigate(
        &mut self,
        target: &str,
        intent: NavigationIntent,
    ) -> Result<NavigationState<V>> {
        let next = self.resolve(target)?;

        match intent {
            NavigationIntent::Push if next.full_path == self.current.full_path => {
                debug!(path = %next.full_path, "duplicate navigation, history unchanged");
            }
            NavigationIntent::Push => self.history.push(&next.full_path)?,
            NavigationIntent::Replace => self.history.replace(&next.full_path)?,
        }

        Ok(self.publish(next, intent))
    }

    pub fn push(&mut self, target: &str) -> Result<NavigationState<V>> {
        self.navigate(target, NavigationIntent::Push)
    }

    pub fn replace(&mut self, target: &str) -> Result<NavigationState<V>> {
        self.navigate(target, NavigationIntent::Replace)
    }

    /// Navigate to a named route.
    pub fn navigate_to_route(
        &mut self,
        name: &str,
        params: &Params,
        intent: NavigationIntent,
    ) -> Result<NavigationState<V>> {
        let path = self.location_for(name, params)?;
        self.navigate(&path, intent)
    }

    /// Re-read the backend location after the platform moved history
    /// (back/forward buttons) and publish the matching state.
    pub fn sync(&mut self) -> Result<NavigationState<V>> {
        self.history.refresh();
        let location = Location::parse(&self.history.location())?;
        let next = NavigationState::new(&location, self.table.match_location(&location));
        debug!(path = %next.full_path, position = self.history.position(), "history traversed");
        self.current = next.clone();
        Ok(next)
    }

    /// Traverse history by `delta` entries.
    ///
    /// Returns the new state when the backend settles synchronously and
    /// `None` when the move is pending or out of range.
    pub fn go(&mut self, delta: isize) -> Result<Option<NavigationState<V>>> {
        match self.history.go(delta) {
            Traversal::Settled => self.sync().map(Some),
            Traversal::Pending => Ok(None),
            Traversal::OutOfRange => {
                debug!(delta, "history traversal out of range");
                Ok(None)
            }
        }
    }

    pub fn back(&mut self) -> Result<Option<NavigationState<V>>> {
        self.go(-1)
    }

    pub fn forward(&mut self) -> Result<Option<NavigationState<V>>> {
        self.go(1)
    }

    /// Href for an in-app location, including the history base.
    pub fn href(&self, location: &str) -> String {
        self.history.href(location)
    }

    /// Href of a named route.
    pub fn href_for(&self, name: &str, params: &Params) -> Result<String> {
        let path = self.location_for(name, params)?;
        Ok(self.history.href(&path))
    }

    /// In-app location of a named route, without the history base.
    pub fn location_for(&self, name: &str, params: &Params) -> Result<String> {
        self.table
            .by_name(name)
            .ok_or_else(|| RouterError::UnknownRoute(name.to_string()))?
            .href(params)
    }

    fn publish(&mut self, next: NavigationState<V>, intent: NavigationIntent) -> NavigationState<V> {
        match next.name() {
            Some(route) => debug!(path = %next.full_path, route, ?intent, "navigated"),
            None => warn!(path = %next.full_path, "no route matches location"),
        }
        self.current = next.clone();
        next
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::history::MemoryHistory;
    use crate::pattern::MatchOptions;
    use crate::route::RouteDefinition;

    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    enum Page {
        Login,
        Home,
        Form,
    }

    fn navigator() -> Navigator<Page, MemoryHistory> {
        let table = RouteTable::new(vec![
            RouteDefinition::new("/", "Login", Page::Login).unwrap(),
            RouteDefinition::new("/home", "Home", Page::Home).unwrap(),
            RouteDefinition::new("/forms/:formName", "FormQuery", Page::Form).unwrap(),
        ])
        .unwrap();
        Navigator::new(table, MemoryHistory::default()).unwrap()
    }

    #[test]
    fn test_initial_state() {
        let nav = navigator();
        assert_eq!(nav.current_state().view(), Some(&Page::Login));
        assert_eq!(nav.current_state().path, "/");
    }

    #[test]
    fn test_push_and_replace_write_history() {
        let mut nav = navigator();
        nav.push("/home").unwrap();
        nav.replace("/forms/intake").unwrap();

        assert_eq!(nav.history().entries(), ["/", "/forms/intake"]);
        assert_eq!(nav.current_state().name(), Some("FormQuery"));
        assert_eq!(nav.current_state().param("formName"), Some("intake"));
    }

    #[test]
    fn test_duplicate_push_keeps_history() {
        let mut nav = navigator();
        let first = nav.push("/home").unwrap();
        let second = nav.push("/home").unwrap();

        assert_eq!(first, second);
        assert_eq!(nav.history().entries(), ["/", "/home"]);
    }

    #[test]
    fn test_not_found_is_recorded() {
        let mut nav = navigator();
        let state = nav.push("/unknown").unwrap();

        assert!(state.is_not_found());
        assert!(state.params.is_empty());
        assert_eq!(nav.history().location(), "/unknown");
        assert!(nav.current_state().is_not_found());
    }

    #[test]
    fn test_invalid_target_keeps_state() {
        let mut nav = navigator();
        nav.push("/home").unwrap();

        assert!(matches!(
            nav.push("https://example.com/"),
            Err(RouterError::ExternalLocation(_))
        ));
        assert_eq!(nav.current_state().name(), Some("Home"));
        assert_eq!(nav.history().entries(), ["/", "/home"]);
    }

    #[test]
    fn test_relative_navigation() {
        let mut nav = navigator();
        nav.push("/forms/intake").unwrap();
        let state = nav.push("audit").unwrap();
        assert_eq!(state.path, "/forms/audit");
        assert_eq!(state.param("formName"), Some("audit"));

        let state = nav.push("../home").unwrap();
        assert_eq!(state.name(), Some("Home"));
    }

    #[test]
    fn test_query_and_hash() {
        let mut nav = navigator();
        let state = nav.push("/forms/intake?status=open#results").unwrap();

        assert_eq!(state.full_path, "/forms/intake?status=open#results");
        assert_eq!(state.query.get("status").map(String::as_str), Some("open"));
        assert_eq!(state.hash.as_deref(), Some("results"));
        assert_eq!(nav.history().location(), "/forms/intake?status=open#results");
    }

    #[test]
    fn test_back_and_forward() {
        let mut nav = navigator();
        nav.push("/home").unwrap();
        nav.push("/forms/intake").unwrap();

        let back = nav.back().unwrap().unwrap();
        assert_eq!(back.name(), Some("Home"));
        assert_eq!(nav.current_state().name(), Some("Home"));

        let forward = nav.forward().unwrap().unwrap();
        assert_eq!(forward.param("formName"), Some("intake"));

        assert_eq!(nav.forward().unwrap(), None);
        assert_eq!(nav.current_state().param("formName"), Some("intake"));
    }

    #[test]
    fn test_named_routes() {
        let mut nav = navigator();
        let params = Params::from([("formName".to_string(), "Tax Return".to_string())]);

        assert_eq!(nav.href_for("FormQuery", &params).unwrap(), "/forms/Tax%20Return");
        assert_eq!(nav.href_for("Home", &Params::new()).unwrap(), "/home");
        assert_eq!(
            nav.href_for("Settings", &Params::new()),
            Err(RouterError::UnknownRoute("Settings".to_string()))
        );

        let state = nav
            .navigate_to_route("FormQuery", &params, NavigationIntent::Push)
            .unwrap();
        assert_eq!(state.param("formName"), Some("Tax Return"));
    }

    #[test]
    fn test_routes_exposes_table() {
        let nav = navigator();
        assert_eq!(nav.routes().len(), 3);
        assert_eq!(nav.routes().by_name("Home").map(|r| *r.view()), Some(Page::Home));
        assert_eq!(nav.routes().options(), MatchOptions::default());
    }

    #[test]
    fn test_resolve_has_no_side_effects() {
        let nav = navigator();
        let state = nav.resolve("/home").unwrap();
        assert_eq!(state.name(), Some("Home"));
        assert_eq!(nav.current_state().name(), Some("Login"));
        assert_eq!(nav.history().entries(), ["/"]);
    }
}
