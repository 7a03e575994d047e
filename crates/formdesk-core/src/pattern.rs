//! Route path patterns such as `/forms/:formName`.

use std::fmt;
use std::sync::LazyLock;

use percent_encoding::{AsciiSet, CONTROLS, utf8_percent_encode};
use regex::Regex;

use crate::error::{Result, RouterError};
use crate::location::{Location, decode};
use crate::navigation::Params;

/// Parameter names are plain identifiers.
static PARAM_NAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new("^[A-Za-z_][A-Za-z0-9_]*$").expect("valid regex"));

/// Characters escaped when a parameter value is written into a path segment.
const SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}')
    .add(b'\\');

/// How concrete paths are compared against patterns.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MatchOptions {
    /// Compare static segments case-sensitively.
    pub case_sensitive: bool,
    /// Treat `/home/` and `/home` as different paths.
    pub strict: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
enum Segment {
    Static(String),
    Param(String),
}

/// A parsed route path.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PathPattern {
    source: String,
    segments: Vec<Segment>,
}

impl PathPattern {
    /// Parse a declaration. `:name` segments capture, everything else is literal.
    pub fn parse(pattern: &str) -> Result<Self> {
        let invalid = |reason| RouterError::InvalidPattern {
            pattern: pattern.to_string(),
            reason,
        };

        let Some(body) = pattern.strip_prefix('/') else {
            return Err(invalid("must start with '/'"));
        };
        let body = body.strip_suffix('/').unwrap_or(body);

        let mut segments = Vec::new();
        if !body.is_empty() {
            for raw in body.split('/') {
                if raw.is_empty() {
                    return Err(invalid("empty segment"));
                }
                let segment = match raw.strip_prefix(':') {
                    Some(name) => {
                        if !PARAM_NAME.is_match(name) {
                            return Err(RouterError::InvalidParamName {
                                pattern: pattern.to_string(),
                                name: name.to_string(),
                            });
                        }
                        if segments.contains(&Segment::Param(name.to_string())) {
                            return Err(RouterError::DuplicateParam {
                                pattern: pattern.to_string(),
                                name: name.to_string(),
                            });
                        }
                        Segment::Param(name.to_string())
                    }
                    None => Segment::Static(raw.to_string()),
                };
                segments.push(segment);
            }
        }

        Ok(Self {
            source: pattern.to_string(),
            segments,
        })
    }

    /// The declaration this pattern was parsed from.
    pub fn as_str(&self) -> &str {
        &self.source
    }

    /// Names of the capture segments, in path order.
    pub fn param_names(&self) -> impl Iterator<Item = &str> {
        self.segments.iter().filter_map(|s| match s {
            Segment::Param(name) => Some(name.as_str()),
            Segment::Static(_) => None,
        })
    }

    /// Match a location, returning decoded captures on success.
    ///
    /// A capture never matches an empty segment.
    pub fn matches(&self, location: &Location, options: MatchOptions) -> Option<Params> {
        let concrete = location.segments(options.strict);
        if concrete.len() != self.segments.len() {
            return None;
        }

        let mut params = Params::new();
        for (segment, raw) in self.segments.iter().zip(concrete) {
            let value = decode(raw);
            match segment {
                Segment::Static(literal) => {
                    let equal = if options.case_sensitive {
                        *literal == value
                    } else {
                        literal.eq_ignore_ascii_case(&value)
                    };
                    if !equal {
                        return None;
                    }
                }
                Segment::Param(name) => {
                    if value.is_empty() {
                        return None;
                    }
                    params.insert(name.clone(), value.into_owned());
                }
            }
        }
        Some(params)
    }

    /// Build a concrete path from parameter values.
    ///
    /// `route` only labels errors.
    pub fn format(&self, route: &str, params: &Params) -> Result<String> {
        if self.segments.is_empty() {
            return Ok("/".to_string());
        }

        let mut path = String::new();
        for segment in &self.segments {
            path.push('/');
            match segment {
                Segment::Static(literal) => path.push_str(literal),
                Segment::Param(name) => {
                    let value = params.get(name).ok_or_else(|| RouterError::MissingParam {
                        route: route.to_string(),
                        param: name.clone(),
                    })?;
                    if value.is_empty() {
                        return Err(RouterError::EmptyParam {
                            route: route.to_string(),
                            param: name.clone(),
                        });
                    }
                    path.extend(utf8_percent_encode(value, SEGMENT));
                }
            }
        }
        Ok(path)
    }
}

impl fmt::Display for PathPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn loc(path: &str) -> Location {
        Location::parse(path).unwrap()
    }

    fn params(pairs: &[(&str, &str)]) -> Params {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_parse() {
        let root = PathPattern::parse("/").unwrap();
        assert_eq!(root.param_names().count(), 0);

        let form = PathPattern::parse("/forms/:formName").unwrap();
        assert_eq!(form.param_names().collect::<Vec<_>>(), vec!["formName"]);
        assert_eq!(form.to_string(), "/forms/:formName");

        assert_eq!(
            PathPattern::parse("/home/").unwrap().segments,
            PathPattern::parse("/home").unwrap().segments
        );
    }

    #[test]
    fn test_parse_errors() {
        assert!(matches!(
            PathPattern::parse("home"),
            Err(RouterError::InvalidPattern { .. })
        ));
        assert!(matches!(
            PathPattern::parse("/a//b"),
            Err(RouterError::InvalidPattern { .. })
        ));
        assert!(matches!(
            PathPattern::parse("/forms/:"),
            Err(RouterError::InvalidParamName { .. })
        ));
        assert!(matches!(
            PathPattern::parse("/forms/:1st"),
            Err(RouterError::InvalidParamName { .. })
        ));
        assert!(matches!(
            PathPattern::parse("/:id/x/:id"),
            Err(RouterError::DuplicateParam { .. })
        ));
    }

    #[test]
    fn test_static_matching() {
        let home = PathPattern::parse("/home").unwrap();
        let opts = MatchOptions::default();

        assert_eq!(home.matches(&loc("/home"), opts), Some(Params::new()));
        assert_eq!(home.matches(&loc("/home/"), opts), Some(Params::new()));
        assert_eq!(home.matches(&loc("/HOME"), opts), Some(Params::new()));
        assert_eq!(home.matches(&loc("/home/x"), opts), None);
        assert_eq!(home.matches(&loc("/"), opts), None);

        let strict = MatchOptions {
            case_sensitive: true,
            strict: true,
        };
        assert_eq!(home.matches(&loc("/home/"), strict), None);
        assert_eq!(home.matches(&loc("/HOME"), strict), None);
    }

    #[test]
    fn test_param_capture() {
        let form = PathPattern::parse("/forms/:formName").unwrap();
        let opts = MatchOptions::default();

        assert_eq!(
            form.matches(&loc("/forms/intake"), opts),
            Some(params(&[("formName", "intake")]))
        );
        assert_eq!(
            form.matches(&loc("/forms/Intake%20Form"), opts),
            Some(params(&[("formName", "Intake Form")]))
        );
        assert_eq!(
            form.matches(&loc("/forms/a%2Fb"), opts),
            Some(params(&[("formName", "a/b")]))
        );
        assert_eq!(form.matches(&loc("/forms/"), opts), None);
        assert_eq!(form.matches(&loc("/forms//"), opts), None);
        assert_eq!(form.matches(&loc("/forms/a/b"), opts), None);
    }

    #[test]
    fn test_format() {
        let form = PathPattern::parse("/forms/:formName").unwrap();
        assert_eq!(
            form.format("FormQuery", &params(&[("formName", "intake")])).unwrap(),
            "/forms/intake"
        );
        assert_eq!(
            form.format("FormQuery", &params(&[("formName", "a/b c")])).unwrap(),
            "/forms/a%2Fb%20c"
        );
        assert!(matches!(
            form.format("FormQuery", &Params::new()),
            Err(RouterError::MissingParam { .. })
        ));
        assert!(matches!(
            form.format("FormQuery", &params(&[("formName", "")])),
            Err(RouterError::EmptyParam { .. })
        ));
        assert_eq!(PathPattern::parse("/").unwrap().format("Login", &Params::new()).unwrap(), "/");
    }
}
