//! Shared pattern types

use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of placeholder appearing in a route pattern
///
/// - `:name` ([`PlaceholderKind::Named`]) stops at the next `/` or `.`
/// - `#name` ([`PlaceholderKind::Relaxed`]) stops at the next `/` only
/// - `*name` ([`PlaceholderKind::Splat`]) takes the rest of the path
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlaceholderKind {
    /// `:name`
    Named,
    /// `#name`
    Relaxed,
    /// `*name`
    Splat,
}

impl PlaceholderKind {
    /// Character introducing this placeholder in a pattern
    pub fn sigil(self) -> char {
        match self {
            PlaceholderKind::Named => ':',
            PlaceholderKind::Relaxed => '#',
            PlaceholderKind::Splat => '*',
        }
    }

    /// Placeholder kind introduced by `c`, if any
    pub fn from_sigil(c: char) -> Option<Self> {
        match c {
            ':' => Some(PlaceholderKind::Named),
            '#' => Some(PlaceholderKind::Relaxed),
            '*' => Some(PlaceholderKind::Splat),
            _ => None,
        }
    }
}

impl fmt::Display for PlaceholderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PlaceholderKind::Named => "named",
            PlaceholderKind::Relaxed => "relaxed",
            PlaceholderKind::Splat => "splat",
        };
        f.write_str(name)
    }
}
