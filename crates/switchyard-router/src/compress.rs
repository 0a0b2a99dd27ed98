//! Literal chain compression
//!
//! After the last insertion, chains of pass-through literal nodes are merged
//! so a lookup compares several characters per step instead of one. The set
//! of paths accepted by every subtree is unchanged.

use crate::node::Node;
use std::collections::HashMap;

impl<R> Node<R> {
    /// Whether this node only forwards to its literal children
    fn is_pass_through(&self) -> bool {
        !self.is_terminal() && !self.has_placeholder()
    }

    /// Compress this subtree in place
    pub(crate) fn compress(&mut self) {
        for placeholder in [&mut self.splat, &mut self.named, &mut self.relaxed]
            .into_iter()
            .flatten()
        {
            placeholder.child.compress();
        }

        // Each round pulls the grandchildren up one level; keys grow by one
        // character because grandchildren keys are still uncompressed.
        while !self.children.is_empty() && self.children.values().all(Node::is_pass_through) {
            let children = std::mem::take(&mut self.children);
            let mut merged = HashMap::with_capacity(children.len());

            for (key, child) in children {
                for (grand_key, grandchild) in child.children {
                    let mut merged_key = String::with_capacity(key.len() + grand_key.len());
                    merged_key.push_str(&key);
                    merged_key.push_str(&grand_key);
                    merged.insert(merged_key.into_boxed_str(), grandchild);
                }
            }

            self.children = merged;
            self.key_len += 1;
        }

        for child in self.children.values_mut() {
            child.compress();
        }
    }
}
