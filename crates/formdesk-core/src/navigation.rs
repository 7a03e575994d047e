//! Navigation results and intents.

use std::collections::BTreeMap;
use std::sync::Arc;

use crate::location::Location;
use crate::route::RouteDefinition;

/// Decoded path parameters keyed by capture name.
pub type Params = BTreeMap<String, String>;

/// How a navigation is recorded in history.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum NavigationIntent {
    /// Add a new history entry.
    #[default]
    Push,
    /// Overwrite the current history entry.
    Replace,
}

/// Outcome of a single navigation.
///
/// A new state is produced for every navigation and never mutated
/// afterwards. `matched` is `None` when no route matches.
#[derive(Debug)]
pub struct NavigationState<V> {
    pub path: String,
    pub full_path: String,
    pub params: Params,
    pub query: BTreeMap<String, String>,
    pub hash: Option<String>,
    pub matched: Option<Arc<RouteDefinition<V>>>,
}

impl<V> NavigationState<V> {
    pub(crate) fn new(
        location: &Location,
        matched: Option<(Arc<RouteDefinition<V>>, Params)>,
    ) -> Self {
        let (matched, params) = match matched {
            Some((route, params)) => (Some(route), params),
            None => (None, Params::new()),
        };
        Self {
            path: location.path.clone(),
            full_path: location.full_path(),
            params,
            query: location.query_map(),
            hash: location.decoded_hash(),
            matched,
        }
    }

    /// Name of the matched route.
    pub fn name(&self) -> Option<&str> {
        self.matched.as_deref().map(RouteDefinition::name)
    }

    /// View reference of the matched route.
    pub fn view(&self) -> Option<&V> {
        self.matched.as_deref().map(RouteDefinition::view)
    }

    pub fn param(&self, key: &str) -> Option<&str> {
        self.params.get(key).map(String::as_str)
    }

    pub fn is_not_found(&self) -> bool {
        self.matched.is_none()
    }
}

impl<V> Clone for NavigationState<V> {
    fn clone(&self) -> Self {
        Self {
            path: self.path.clone(),
            full_path: self.full_path.clone(),
            params: self.params.clone(),
            query: self.query.clone(),
            hash: self.hash.clone(),
            matched: self.matched.clone(),
        }
    }
}

impl<V: PartialEq> PartialEq for NavigationState<V> {
    fn eq(&self, other: &Self) -> bool {
        self.path == other.path
            && self.full_path == other.full_path
            && self.params == other.params
            && self.query == other.query
            && self.hash == other.hash
            && self.matched.as_deref() == other.matched.as_deref()
    }
}
