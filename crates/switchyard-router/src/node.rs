//! Trie nodes and route insertion

use crate::segment::{named_span, relaxed_span};
use std::collections::{BTreeMap, HashMap};
use switchyard_core::{Error, PlaceholderKind, Result};

/// Placeholder branch hanging off a node
#[derive(Debug, Clone)]
pub(crate) struct Placeholder<R> {
    /// Name every pattern through this branch must use
    pub(crate) name: String,

    /// Node reached once the placeholder has been consumed
    pub(crate) child: Box<Node<R>>,
}

/// Node in the route trie
///
/// A node has up to four independent kinds of outgoing branches. Literal
/// children are keyed by fixed-length strings; all keys of one node have
/// exactly `key_len` characters (1 until compression merges chains).
#[derive(Debug, Clone)]
pub(crate) struct Node<R> {
    /// Literal children (exact match on `key_len` characters)
    pub(crate) children: HashMap<Box<str>, Node<R>>,

    /// Character length of every key in `children`
    pub(crate) key_len: usize,

    /// `:name` child
    pub(crate) named: Option<Placeholder<R>>,

    /// `#name` child
    pub(crate) relaxed: Option<Placeholder<R>>,

    /// `*name` child
    pub(crate) splat: Option<Placeholder<R>>,

    /// Routes for patterns terminating here, by HTTP method
    pub(crate) routes: BTreeMap<String, R>,
}

impl<R> Node<R> {
    pub(crate) fn new() -> Self {
        Self {
            children: HashMap::new(),
            key_len: 0,
            named: None,
            relaxed: None,
            splat: None,
            routes: BTreeMap::new(),
        }
    }

    /// Whether some pattern terminates at this node
    pub(crate) fn is_terminal(&self) -> bool {
        !self.routes.is_empty()
    }

    /// Whether any placeholder branch leaves this node
    pub(crate) fn has_placeholder(&self) -> bool {
        self.named.is_some() || self.relaxed.is_some() || self.splat.is_some()
    }

    pub(crate) fn placeholder(&self, kind: PlaceholderKind) -> Option<&Placeholder<R>> {
        match kind {
            PlaceholderKind::Named => self.named.as_ref(),
            PlaceholderKind::Relaxed => self.relaxed.as_ref(),
            PlaceholderKind::Splat => self.splat.as_ref(),
        }
    }

    fn placeholder_slot(&mut self, kind: PlaceholderKind) -> &mut Option<Placeholder<R>> {
        match kind {
            PlaceholderKind::Named => &mut self.named,
            PlaceholderKind::Relaxed => &mut self.relaxed,
            PlaceholderKind::Splat => &mut self.splat,
        }
    }

    /// Number of nodes in this subtree, including `self`
    pub(crate) fn node_count(&self) -> usize {
        let placeholders = [&self.named, &self.relaxed, &self.splat]
            .into_iter()
            .flatten()
            .map(|p| p.child.node_count())
            .sum::<usize>();

        1 + placeholders + self.children.values().map(Node::node_count).sum::<usize>()
    }

    /// Insert `pattern` below this node and attach `route` under `method`
    ///
    /// On error, nodes created for the valid prefix of the pattern are kept;
    /// they carry no route and never produce a match.
    pub(crate) fn insert(&mut self, pattern: &str, method: &str, route: R) -> Result<()> {
        let mut used: Vec<&str> = Vec::new();
        let mut node = self;
        let mut rest = pattern;

        while let Some(c) = rest.chars().next() {
            let after = &rest[c.len_utf8()..];

            match PlaceholderKind::from_sigil(c) {
                Some(kind) => {
                    let len = match kind {
                        PlaceholderKind::Named => named_span(after),
                        PlaceholderKind::Relaxed => relaxed_span(after),
                        // the splat name runs to the end of the pattern
                        PlaceholderKind::Splat => after.len(),
                    };
                    let (name, remaining) = after.split_at(len);

                    validate_name(kind, name, pattern)?;
                    if used.contains(&name) {
                        return Err(Error::DuplicatePlaceholderName {
                            name: name.to_string(),
                            pattern: pattern.to_string(),
                        });
                    }
                    used.push(name);

                    node = node.descend_placeholder(kind, name, pattern)?;
                    rest = remaining;
                }
                None => {
                    let (token, remaining) = rest.split_at(c.len_utf8());
                    node = node.descend_literal(token);
                    rest = remaining;
                }
            }
        }

        match node.routes.entry(method.to_string()) {
            std::collections::btree_map::Entry::Occupied(_) => Err(Error::DuplicateRoute {
                method: method.to_string(),
                pattern: pattern.to_string(),
            }),
            std::collections::btree_map::Entry::Vacant(slot) => {
                slot.insert(route);
                Ok(())
            }
        }
    }

    fn descend_literal(&mut self, token: &str) -> &mut Node<R> {
        if self.children.is_empty() {
            self.key_len = 1;
        }
        self.children.entry(token.into()).or_insert_with(Node::new)
    }

    fn descend_placeholder(
        &mut self,
        kind: PlaceholderKind,
        name: &str,
        pattern: &str,
    ) -> Result<&mut Node<R>> {
        let slot = self.placeholder_slot(kind);

        if let Some(existing) = slot.as_ref() {
            if existing.name != name {
                return Err(Error::InconsistentPlaceholderName {
                    kind,
                    existing: existing.name.clone(),
                    name: name.to_string(),
                    pattern: pattern.to_string(),
                });
            }
        }

        let placeholder = slot.get_or_insert_with(|| Placeholder {
            name: name.to_string(),
            child: Box::new(Node::new()),
        });
        Ok(placeholder.child.as_mut())
    }
}

fn validate_name(kind: PlaceholderKind, name: &str, pattern: &str) -> Result<()> {
    let reason = if name.is_empty() {
        "name is empty"
    } else if kind == PlaceholderKind::Splat && name.contains('/') {
        "splat name contains '/'"
    } else {
        return Ok(());
    };

    Err(Error::InvalidPlaceholderName {
        kind,
        name: name.to_string(),
        pattern: pattern.to_string(),
        reason,
    })
}
