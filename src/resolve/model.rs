//! Model traversal.
//!
//! Walks the object graph from a root node, one consumer step at a time,
//! until the path is exhausted or no consumer registered for the current
//! node makes progress. Being stuck with leftover segments is not an error
//! here; the view resolver decides what the leftover means.

use crate::lookup::{Consumed, Consumer};
use crate::model::Node;
use crate::path::PathStack;

/// Source of consumers for a node.
pub trait ModelLookup {
    /// Consumers applicable to `node`, in the order they should be tried.
    fn lookup<'a>(&'a self, node: &Node) -> Box<dyn Iterator<Item = &'a dyn Consumer> + 'a>;
}

impl<L: ModelLookup + ?Sized> ModelLookup for &L {
    fn lookup<'a>(&'a self, node: &Node) -> Box<dyn Iterator<Item = &'a dyn Consumer> + 'a> {
        (**self).lookup(node)
    }
}

/// Drives repeated consumption from a root node.
#[derive(Debug, Clone, Default)]
pub struct ModelResolver<L> {
    lookup: L,
}

impl<L: ModelLookup> ModelResolver<L> {
    /// Create a resolver over the given consumer lookup.
    pub fn new(lookup: L) -> Self {
        Self { lookup }
    }

    /// Get the consumer lookup.
    pub fn lookup(&self) -> &L {
        &self.lookup
    }

    /// Traverse from `root` along `path`.
    ///
    /// Returns the node reached and the segments no consumer could take.
    /// Every successful step strictly shortens the path, so this runs at
    /// most `path.len()` steps.
    pub fn resolve(&self, root: Node, path: PathStack) -> (Node, PathStack) {
        let mut node = root;
        let mut remaining = path;

        'walk: while !remaining.is_empty() {
            for consumer in self.lookup.lookup(&node) {
                match consumer.consume(&node, &remaining) {
                    Consumed::Advanced {
                        node: next,
                        remaining: rest,
                    } if rest.len() < remaining.len() => {
                        tracing::trace!(
                            "Consumed {} segment(s) from {}, now at {}",
                            remaining.len() - rest.len(),
                            node.type_name(),
                            next.type_name()
                        );
                        node = next;
                        remaining = rest;
                        continue 'walk;
                    }
                    Consumed::Advanced { .. } => {
                        tracing::warn!(
                            "Consumer on {} reported progress without consuming; ignoring it",
                            node.type_name()
                        );
                    }
                    Consumed::Stuck => {}
                }
            }
            tracing::debug!(
                "Traversal stopped at {} with {} segment(s) left",
                node.type_name(),
                remaining.len()
            );
            break;
        }

        (node, remaining)
    }
}
