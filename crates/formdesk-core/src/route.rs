//! Route definitions and the ordered route table.

use std::collections::HashSet;
use std::sync::Arc;

use crate::error::{Result, RouterError};
use crate::location::Location;
use crate::navigation::Params;
use crate::pattern::{MatchOptions, PathPattern};

/// A declared mapping from a path pattern to a named view.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RouteDefinition<V> {
    path: PathPattern,
    name: String,
    view: V,
}

impl<V> RouteDefinition<V> {
    pub fn new(path: &str, name: impl Into<String>, view: V) -> Result<Self> {
        Ok(Self {
            path: PathPattern::parse(path)?,
            name: name.into(),
            view,
        })
    }

    pub fn path(&self) -> &PathPattern {
        &self.path
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    /// Concrete path of this route for the given parameters.
    pub fn href(&self, params: &Params) -> Result<String> {
        self.path.format(&self.name, params)
    }
}

/// Ordered, immutable set of routes. First match wins.
#[derive(Debug)]
pub struct RouteTable<V> {
    routes: Vec<Arc<RouteDefinition<V>>>,
    options: MatchOptions,
}

impl<V> RouteTable<V> {
    /// Build a table with default matching (case-insensitive, non-strict).
    pub fn new(routes: impl IntoIterator<Item = RouteDefinition<V>>) -> Result<Self> {
        Self::with_options(routes, MatchOptions::default())
    }

    /// Build a table, rejecting duplicate route names.
    pub fn with_options(
        routes: impl IntoIterator<Item = RouteDefinition<V>>,
        options: MatchOptions,
    ) -> Result<Self> {
        let mut names = HashSet::new();
        let mut table = Vec::new();
        for route in routes {
            if !names.insert(route.name.clone()) {
                return Err(RouterError::DuplicateRouteName(route.name));
            }
            table.push(Arc::new(route));
        }
        Ok(Self {
            routes: table,
            options,
        })
    }

    pub fn iter(&self) -> impl Iterator<Item = &RouteDefinition<V>> {
        self.routes.iter().map(Arc::as_ref)
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    pub fn options(&self) -> MatchOptions {
        self.options
    }

    pub fn by_name(&self, name: &str) -> Option<&RouteDefinition<V>> {
        self.iter().find(|route| route.name == name)
    }

    /// First route matching `location`, with its captured parameters.
    pub fn match_location(&self, location: &Location) -> Option<(Arc<RouteDefinition<V>>, Params)> {
        self.routes.iter().find_map(|route| {
            route
                .path
                .matches(location, self.options)
                .map(|params| (Arc::clone(route), params))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> RouteTable<u8> {
        RouteTable::new(vec![
            RouteDefinition::new("/", "Login", 0).unwrap(),
            RouteDefinition::new("/forms/new", "NewForm", 1).unwrap(),
            RouteDefinition::new("/forms/:formName", "FormQuery", 2).unwrap(),
        ])
        .unwrap()
    }

    #[test]
    fn test_duplicate_names_rejected() {
        let result = RouteTable::new(vec![
            RouteDefinition::new("/", "Login", 0).unwrap(),
            RouteDefinition::new("/login", "Login", 1).unwrap(),
        ]);
        assert_eq!(
            result.err(),
            Some(RouterError::DuplicateRouteName("Login".to_string()))
        );
    }

    #[test]
    fn test_first_match_wins() {
        let table = table();
        let (route, params) = table
            .match_location(&Location::parse("/forms/new").unwrap())
            .unwrap();
        assert_eq!(route.name(), "NewForm");
        assert!(params.is_empty());

        let (route, params) = table
            .match_location(&Location::parse("/forms/intake").unwrap())
            .unwrap();
        assert_eq!(route.name(), "FormQuery");
        assert_eq!(params.get("formName").map(String::as_str), Some("intake"));
    }

    #[test]
    fn test_lookup_and_iteration() {
        let table = table();
        assert_eq!(table.len(), 3);
        assert_eq!(
            table.iter().map(RouteDefinition::name).collect::<Vec<_>>(),
            vec!["Login", "NewForm", "FormQuery"]
        );
        assert_eq!(table.by_name("FormQuery").map(|r| *r.view()), Some(2));
        assert!(table.by_name("Missing").is_none());
        assert!(table.match_location(&Location::parse("/nope").unwrap()).is_none());
    }

    #[test]
    fn test_match_options() {
        assert_eq!(table().options(), MatchOptions::default());

        let options = MatchOptions {
            case_sensitive: true,
            strict: true,
        };
        let strict = RouteTable::with_options(
            vec![RouteDefinition::new("/home", "Home", 0).unwrap()],
            options,
        )
        .unwrap();
        assert_eq!(strict.options(), options);
        assert!(strict.match_location(&Location::parse("/home").unwrap()).is_some());
        assert!(strict.match_location(&Location::parse("/Home").unwrap()).is_none());
        assert!(strict.match_location(&Location::parse("/home/").unwrap()).is_none());
    }
}
