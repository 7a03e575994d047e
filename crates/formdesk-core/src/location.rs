//! In-app locations: resolution of navigation targets and history base handling.

use std::borrow::Cow;
use std::collections::BTreeMap;

use percent_encoding::{AsciiSet, CONTROLS, percent_decode_str, utf8_percent_encode};
use url::Url;

use crate::error::{Result, RouterError};

/// Escaped in the path. `%` is kept so existing escapes survive, `\` is
/// escaped so browsers do not read it as a separator.
const PATH: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'<')
    .add(b'>')
    .add(b'`')
    .add(b'{')
    .add(b'}')
    .add(b'\\');

/// Escaped in the query string and the hash.
const QUERY: &AsciiSet = &CONTROLS.add(b' ').add(b'"').add(b'<').add(b'>').add(b'`');

/// A resolved location inside the application.
///
/// `path` is percent-encoded. Dot segments are only interpreted in relative
/// targets; an absolute path is kept segment for segment.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Location {
    pub path: String,
    pub query: Option<String>,
    pub hash: Option<String>,
}

impl Location {
    /// Resolve `target` against the path `from`.
    ///
    /// Absolute targets (`/home`) replace the path unchanged. Relative
    /// targets (`forms/x`, `../home`) resolve like an `<a href>` would,
    /// with literal `.` and `..` segments only. Query-only targets keep the
    /// current path.
    pub fn resolve(target: &str, from: &str) -> Result<Self> {
        if target.starts_with("//") || Url::parse(target).is_ok() {
            return Err(RouterError::ExternalLocation(target.to_string()));
        }

        let (rest, hash) = match target.split_once('#') {
            Some((rest, hash)) => (rest, Some(hash)),
            None => (target, None),
        };
        let (path, query) = match rest.split_once('?') {
            Some((path, query)) => (path, Some(query)),
            None => (rest, None),
        };

        let path = if path.starts_with('/') {
            path.to_string()
        } else if path.is_empty() {
            from.to_string()
        } else {
            resolve_relative(path, from)
        };

        Ok(Self {
            path: utf8_percent_encode(&path, PATH).to_string(),
            query: query
                .filter(|q| !q.is_empty())
                .map(|q| utf8_percent_encode(q, QUERY).to_string()),
            hash: hash
                .filter(|h| !h.is_empty())
                .map(|h| utf8_percent_encode(h, QUERY).to_string()),
        })
    }

    /// Parse an absolute in-app location such as `/forms/a?x=1#top`.
    pub fn parse(target: &str) -> Result<Self> {
        Self::resolve(target, "/")
    }

    /// Path with query and hash, as written to history.
    pub fn full_path(&self) -> String {
        let mut full = self.path.clone();
        if let Some(query) = &self.query {
            full.push('?');
            full.push_str(query);
        }
        if let Some(hash) = &self.hash {
            full.push('#');
            full.push_str(hash);
        }
        full
    }

    /// Raw (still encoded) path segments.
    ///
    /// The root path yields no segments. When `strict` is false a single
    /// trailing slash is ignored, so `/home/` yields `["home"]`.
    pub fn segments(&self, strict: bool) -> Vec<&str> {
        let mut path = self.path.strip_prefix('/').unwrap_or(&self.path);
        if !strict {
            path = path.strip_suffix('/').unwrap_or(path);
        }
        if path.is_empty() {
            return Vec::new();
        }
        path.split('/').collect()
    }

    /// Decoded query parameters. Repeated keys keep the last value.
    pub fn query_map(&self) -> BTreeMap<String, String> {
        self.query
            .as_deref()
            .map(|q| url::form_urlencoded::parse(q.as_bytes()).into_owned().collect())
            .unwrap_or_default()
    }

    /// Decoded hash fragment.
    pub fn decoded_hash(&self) -> Option<String> {
        self.hash.as_deref().map(|h| decode(h).into_owned())
    }
}

/// Resolve a relative path against the directory of `from`.
fn resolve_relative(to: &str, from: &str) -> String {
    let from = if from.starts_with('/') { from } else { "/" };
    let mut segments: Vec<&str> = from.split('/').collect();
    segments.pop();

    let mut parts = to.split('/').peekable();
    while let Some(part) = parts.next() {
        match part {
            "." => {}
            ".." => {
                if segments.len() > 1 {
                    segments.pop();
                }
            }
            other => segments.push(other),
        }
        // `..` or `.` at the end names a directory
        if parts.peek().is_none() && matches!(part, "." | "..") {
            segments.push("");
        }
    }

    segments.join("/")
}

/// Percent-decode a path component, replacing invalid UTF-8.
pub(crate) fn decode(raw: &str) -> Cow<'_, str> {
    percent_decode_str(raw).decode_utf8_lossy()
}

/// Normalize a history base: `""`, `"/"` → `""`, `"app/"` → `"/app"`.
pub fn normalize_base(base: &str) -> String {
    let trimmed = base.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        return String::new();
    }
    if trimmed.starts_with('/') {
        trimmed.to_string()
    } else {
        format!("/{}", trimmed)
    }
}

/// Remove a normalized base from a browser path.
///
/// Paths outside the base are returned unchanged.
pub fn strip_base<'a>(path: &'a str, base: &str) -> &'a str {
    if base.is_empty() {
        return path;
    }
    match path.strip_prefix(base) {
        Some("") => "/",
        Some(rest) if rest.starts_with(['/', '?', '#']) => rest,
        _ => path,
    }
}

/// Prefix an in-app location with a normalized base.
pub fn join_base(base: &str, location: &str) -> String {
    if base.is_empty() {
        return location.to_string();
    }
    if location == "/" {
        return format!("{}/", base);
    }
    format!("{}{}", base, location)
}
