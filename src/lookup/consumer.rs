//! Traversal step contract.
//!
//! A consumer looks at the current node and the remaining path and either
//! advances by consuming a prefix of the path, or reports that it is stuck.
//! Being stuck is normal control flow, not an error.
//!
//! # Example
//!
//! ```
//! use std::collections::HashMap;
//! use pathwalk::lookup::{Consumer, Consumed, TypedConsumer};
//! use pathwalk::path::{PathStack, Segment};
//! use pathwalk::Node;
//!
//! #[derive(Debug)]
//! struct Folder(HashMap<String, Node>);
//!
//! let children = TypedConsumer::new(|folder: &Folder, segment: &Segment| {
//!     folder.0.get(&segment.name).cloned()
//! });
//!
//! let root = Node::new(Folder(HashMap::from([("a".to_string(), Node::new(1u32))])));
//! let path = PathStack::new(vec![Segment::model("a")]);
//!
//! match children.consume(&root, &path) {
//!     Consumed::Advanced { node, remaining } => {
//!         assert_eq!(node.downcast_ref::<u32>(), Some(&1));
//!         assert!(remaining.is_empty());
//!     }
//!     Consumed::Stuck => unreachable!(),
//! }
//! ```

use std::any::Any;
use std::marker::PhantomData;

use crate::model::Node;
use crate::path::{PathStack, Segment};

/// Outcome of one consumption attempt.
#[derive(Debug, Clone)]
pub enum Consumed {
    /// A prefix of the path was consumed.
    Advanced {
        /// Node reached.
        node: Node,
        /// Path left after the consumed prefix.
        remaining: PathStack,
    },
    /// Nothing could be consumed; the caller keeps its node and path.
    Stuck,
}

impl Consumed {
    /// Whether anything was consumed.
    #[inline]
    pub fn is_advanced(&self) -> bool {
        matches!(self, Consumed::Advanced { .. })
    }
}

/// A traversal step.
///
/// On success a consumer removes at least one segment from the front of
/// `path`. It receives the path by reference and cannot alter the caller's
/// copy, so a failed attempt leaves nothing behind.
pub trait Consumer: Send + Sync {
    /// Try to advance from `node` along `path`.
    fn consume(&self, node: &Node, path: &PathStack) -> Consumed;
}

impl<F> Consumer for F
where
    F: Fn(&Node, &PathStack) -> Consumed + Send + Sync,
{
    fn consume(&self, node: &Node, path: &PathStack) -> Consumed {
        self(node, path)
    }
}

/// Wrapper that downcasts the node and consumes exactly one segment.
///
/// The wrapped function maps the model and the front segment to the child
/// node, or `None` when there is no such child.
pub struct TypedConsumer<T, F>
where
    T: Any,
    F: Fn(&T, &Segment) -> Option<Node> + Send + Sync,
{
    step: F,
    _phantom: PhantomData<fn(&T)>,
}

impl<T, F> TypedConsumer<T, F>
where
    T: Any,
    F: Fn(&T, &Segment) -> Option<Node> + Send + Sync,
{
    /// Create a new typed consumer.
    pub fn new(step: F) -> Self {
        Self {
            step,
            _phantom: PhantomData,
        }
    }
}

impl<T, F> Consumer for TypedConsumer<T, F>
where
    T: Any,
    F: Fn(&T, &Segment) -> Option<Node> + Send + Sync,
{
    fn consume(&self, node: &Node, path: &PathStack) -> Consumed {
        let Some(model) = node.downcast_ref::<T>() else {
            return Consumed::Stuck;
        };
        let Some((segment, remaining)) = path.split_first() else {
            return Consumed::Stuck;
        };
        match (self.step)(model, segment) {
            Some(node) => Consumed::Advanced { node, remaining },
            None => Consumed::Stuck,
        }
    }
}
