//! Depth-first traversal of the trie against a concrete path

use crate::node::Node;
use crate::segment::{named_span, relaxed_span, split_chars};
use std::collections::HashMap;

/// Placeholder bindings along the branch currently being explored
///
/// Bindings are pushed before descending into a placeholder branch and
/// popped on return, so sibling branches never see each other's values.
#[derive(Debug, Default)]
pub(crate) struct ParamStack<'t, 'p> {
    stack: Vec<(&'t str, &'p str)>,
}

impl<'t, 'p> ParamStack<'t, 'p> {
    fn push(&mut self, name: &'t str, value: &'p str) {
        self.stack.push((name, value));
    }

    fn pop(&mut self) {
        self.stack.pop();
    }

    /// Owned copy of the current bindings
    ///
    /// Names are unique along any branch since insertion rejects patterns
    /// reusing a placeholder name.
    pub(crate) fn to_map(&self) -> HashMap<String, String> {
        self.stack
            .iter()
            .map(|(name, value)| (name.to_string(), value.to_string()))
            .collect()
    }
}

/// State of one lookup
///
/// `on_match` is invoked at every node where a pattern terminates and the
/// path is fully consumed, whatever methods the node holds.
pub(crate) struct FindContext<'t, 'p, F> {
    params: ParamStack<'t, 'p>,
    on_match: F,
}

impl<'t, 'p, F> FindContext<'t, 'p, F> {
    pub(crate) fn new<R>(on_match: F) -> Self
    where
        F: FnMut(&'t Node<R>, &ParamStack<'t, 'p>),
        R: 't,
    {
        Self {
            params: ParamStack::default(),
            on_match,
        }
    }

    pub(crate) fn traverse<R>(&mut self, node: &'t Node<R>, path: &'p str)
    where
        F: FnMut(&'t Node<R>, &ParamStack<'t, 'p>),
    {
        if path.is_empty() && node.is_terminal() {
            (self.on_match)(node, &self.params);
        }

        // A splat binds the remainder, which may be empty
        if let Some(splat) = &node.splat {
            self.params.push(&splat.name, path);
            self.traverse(&splat.child, "");
            self.params.pop();
        }

        if path.is_empty() {
            return;
        }

        if let Some(named) = &node.named {
            let len = named_span(path);
            if len > 0 {
                let (value, rest) = path.split_at(len);
                self.params.push(&named.name, value);
                self.traverse(&named.child, rest);
                self.params.pop();
            }
        }

        if let Some(relaxed) = &node.relaxed {
            let len = relaxed_span(path);
            if len > 0 {
                let (value, rest) = path.split_at(len);
                self.params.push(&relaxed.name, value);
                self.traverse(&relaxed.child, rest);
                self.params.pop();
            }
        }

        if node.children.is_empty() {
            return;
        }
        if let Some((token, rest)) = split_chars(path, node.key_len) {
            if let Some(child) = node.children.get(token) {
                self.traverse(child, rest);
            }
        }
    }
}
