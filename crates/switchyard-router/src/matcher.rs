//! Lookup results

use http::StatusCode;
use std::collections::HashMap;

/// A registered route matching a request path
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Match<'t, R> {
    /// Route handle, as passed to [`Trie::add_route`](crate::Trie::add_route)
    pub route: &'t R,

    /// Method the route was registered under
    pub method: &'t str,

    /// Placeholder values bound along the matching pattern
    pub params: HashMap<String, String>,
}

impl<'t, R> Match<'t, R> {
    /// Value bound to placeholder `name`
    pub fn param(&self, name: &str) -> Option<&str> {
        self.params.get(name).map(String::as_str)
    }
}

/// Outcome of resolving a method and path
///
/// Separates "no pattern matches this path" from "patterns match, but none
/// under this method", the usual 404/405 split.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution<'t, R> {
    /// One or more routes match the method and path
    Found(Vec<Match<'t, R>>),

    /// The path matches, but not under the requested method
    MethodNotAllowed {
        /// Methods registered for the path, sorted
        allowed: Vec<&'t str>,
    },

    /// No pattern matches the path
    NotFound,
}

impl<'t, R> Resolution<'t, R> {
    /// HTTP status a server would answer with
    pub fn status_code(&self) -> StatusCode {
        match self {
            Resolution::Found(_) => StatusCode::OK,
            Resolution::MethodNotAllowed { .. } => StatusCode::METHOD_NOT_ALLOWED,
            Resolution::NotFound => StatusCode::NOT_FOUND,
        }
    }

    /// Matches, if any
    pub fn matches(&self) -> &[Match<'t, R>] {
        match self {
            Resolution::Found(matches) => matches,
            _ => &[],
        }
    }
}
