//! Trie facade: registration, compression and lookups

use crate::matcher::{Match, Resolution};
use crate::node::Node;
use crate::traverse::FindContext;
use std::fmt;
use switchyard_core::{Error, Result};

/// Trie for storing and matching routes
///
/// Routes are registered with [`add_route`](Trie::add_route), then the trie
/// is [`compress`](Trie::compress)ed once and treated as read-only. Lookups
/// take `&self`, so a compressed trie can be shared between threads.
#[derive(Debug, Clone)]
pub struct Trie<R> {
    root: Node<R>,
    count: usize,
    compressed: bool,
}

impl<R> Trie<R> {
    /// Create an empty trie
    pub fn new() -> Self {
        Self {
            root: Node::new(),
            count: 0,
            compressed: false,
        }
    }

    /// Register `route` for `method` and `pattern`
    ///
    /// Pattern syntax: literal text, `:name` (stops at `/` or `.`), `#name`
    /// (stops at `/`) and a trailing `*name` taking the rest of the path.
    pub fn add_route(&mut self, method: impl AsRef<str>, pattern: &str, route: R) -> Result<()> {
        let method = method.as_ref();

        if self.compressed {
            let err = Error::Sealed {
                pattern: pattern.to_string(),
            };
            tracing::warn!(method = %method, pattern = %pattern, error = err.kind_name(), "Route rejected");
            return Err(err);
        }

        match self.root.insert(pattern, method, route) {
            Ok(()) => {
                self.count += 1;
                tracing::debug!(method = %method, pattern = %pattern, "Route added to trie");
                Ok(())
            }
            Err(err) => {
                tracing::warn!(
                    method = %method,
                    pattern = %pattern,
                    error = err.kind_name(),
                    "Route rejected: {err}"
                );
                Err(err)
            }
        }
    }

    /// Merge literal chains for faster lookups
    ///
    /// Must run after the last [`add_route`](Trie::add_route); later
    /// registrations are rejected. Calling it again is a no-op.
    pub fn compress(&mut self) {
        if self.compressed {
            return;
        }

        let before = self.root.node_count();
        self.root.compress();
        self.compressed = true;

        tracing::debug!(
            routes = self.count,
            nodes_before = before,
            nodes_after = self.root.node_count(),
            "Trie compressed"
        );
    }

    /// Routes registered under exactly `method` whose pattern matches `path`
    pub fn find_routes(&self, method: impl AsRef<str>, path: &str) -> Vec<Match<'_, R>> {
        self.find_routes_and_path_matched(method, path).0
    }

    /// Same as [`find_routes`](Trie::find_routes), plus whether `path`
    /// matched any pattern regardless of method
    pub fn find_routes_and_path_matched(
        &self,
        method: impl AsRef<str>,
        path: &str,
    ) -> (Vec<Match<'_, R>>, bool) {
        let method = method.as_ref();
        let mut matches = Vec::new();
        let mut path_matched = false;

        let mut ctx = FindContext::new::<R>(|node, params| {
            path_matched = true;
            if let Some((registered, route)) = node.routes.get_key_value(method) {
                matches.push(Match {
                    route,
                    method: registered.as_str(),
                    params: params.to_map(),
                });
            }
        });
        ctx.traverse(&self.root, path);

        tracing::trace!(method = %method, path = %path, matches = matches.len(), path_matched, "Lookup");
        (matches, path_matched)
    }

    /// Routes whose pattern matches `path`, one per registered method
    pub fn find_routes_for_path(&self, path: &str) -> Vec<Match<'_, R>> {
        let mut matches = Vec::new();

        let mut ctx = FindContext::new::<R>(|node, params| {
            let params = params.to_map();
            for (method, route) in &node.routes {
                matches.push(Match {
                    route,
                    method: method.as_str(),
                    params: params.clone(),
                });
            }
        });
        ctx.traverse(&self.root, path);

        tracing::trace!(path = %path, matches = matches.len(), "Lookup for path");
        matches
    }

    /// Methods registered for any pattern matching `path`, sorted and unique
    pub fn allowed_methods(&self, path: &str) -> Vec<&str> {
        let mut methods: Vec<&str> = self
            .find_routes_for_path(path)
            .into_iter()
            .map(|m| m.method)
            .collect();
        methods.sort_unstable();
        methods.dedup();
        methods
    }

    /// Resolve `method` and `path` into found / 405 / 404
    pub fn resolve(&self, method: impl AsRef<str>, path: &str) -> Resolution<'_, R> {
        let (matches, path_matched) = self.find_routes_and_path_matched(method, path);

        if !matches.is_empty() {
            Resolution::Found(matches)
        } else if path_matched {
            Resolution::MethodNotAllowed {
                allowed: self.allowed_methods(path),
            }
        } else {
            Resolution::NotFound
        }
    }

    /// Number of registered method and pattern pairs
    pub fn len(&self) -> usize {
        self.count
    }

    /// Whether no route is registered
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Number of nodes in the trie
    pub fn node_count(&self) -> usize {
        self.root.node_count()
    }

    /// Whether [`compress`](Trie::compress) has run
    pub fn is_compressed(&self) -> bool {
        self.compressed
    }
}

impl<R> Default for Trie<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R> fmt::Display for Trie<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "<trie>")?;
        write_node(f, &self.root, 0)?;
        writeln!(f, "</trie>")
    }
}

fn write_node<R>(f: &mut fmt::Formatter<'_>, node: &Node<R>, level: usize) -> fmt::Result {
    let indent = level + 1;

    if node.is_terminal() {
        let methods: Vec<&str> = node.routes.keys().map(String::as_str).collect();
        writeln!(f, "{:indent$}[{}]", "", methods.join(", "))?;
    }

    for kind in [
        switchyard_core::PlaceholderKind::Splat,
        switchyard_core::PlaceholderKind::Named,
        switchyard_core::PlaceholderKind::Relaxed,
    ] {
        if let Some(placeholder) = node.placeholder(kind) {
            writeln!(f, "{:indent$}{}{}", "", kind.sigil(), placeholder.name)?;
            write_node(f, &placeholder.child, indent)?;
        }
    }

    let mut keys: Vec<&str> = node.children.keys().map(|k| &**k).collect();
    keys.sort_unstable();
    for key in keys {
        writeln!(f, "{:indent$}{key:?}", "")?;
        write_node(f, &node.children[key], indent)?;
    }

    Ok(())
}
