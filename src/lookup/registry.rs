//! Type-indexed registries for consumers and views.
//!
//! Components are registered per model type at start-up and looked up by
//! the runtime type of the current node. Registration takes `&mut self`,
//! lookup takes `&self`, so once a registry is built it can be shared
//! across threads without locking.
//!
//! # Example
//!
//! ```
//! use std::collections::HashMap;
//! use pathwalk::lookup::{ConsumerRegistry, ViewRegistry};
//! use pathwalk::path::Segment;
//! use pathwalk::Node;
//!
//! #[derive(Debug)]
//! struct Folder(HashMap<String, Node>);
//!
//! let mut consumers = ConsumerRegistry::new();
//! consumers.register(|folder: &Folder, segment: &Segment| folder.0.get(&segment.name).cloned());
//!
//! let mut views: ViewRegistry<String> = ViewRegistry::new();
//! views.register("index", |folder: &Folder, _ctx| format!("{} entries", folder.0.len()));
//!
//! assert_eq!(consumers.len(), 1);
//! assert_eq!(views.len(), 1);
//! ```

use std::any::Any;
use std::collections::HashMap;
use std::marker::PhantomData;

use super::{Consumer, RequestContext, TypedConsumer};
use crate::model::{Node, TypeKey};
use crate::path::Segment;
use crate::resolve::{ModelLookup, ViewLookup};

/// Registry of consumers, in registration order per type.
#[derive(Default)]
pub struct ConsumerRegistry {
    /// Consumers by model type.
    by_type: HashMap<TypeKey, Vec<Box<dyn Consumer>>>,
    /// Consumers tried for every type, after the type-specific ones.
    any: Vec<Box<dyn Consumer>>,
}

impl ConsumerRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a single-segment consumer for models of type `T`.
    ///
    /// # Arguments
    ///
    /// * `step` - maps the model and the front segment to the child node,
    ///   or `None` when there is no such child
    pub fn register<T, F>(&mut self, step: F)
    where
        T: Any,
        F: Fn(&T, &Segment) -> Option<Node> + Send + Sync + 'static,
    {
        self.register_consumer(TypeKey::of::<T>(), TypedConsumer::new(step));
    }

    /// Register any consumer for the given model type.
    pub fn register_consumer<C>(&mut self, key: TypeKey, consumer: C)
    where
        C: Consumer + 'static,
    {
        self.by_type.entry(key).or_default().push(Box::new(consumer));
    }

    /// Register a consumer tried for every model type.
    pub fn register_any<C>(&mut self, consumer: C)
    where
        C: Consumer + 'static,
    {
        self.any.push(Box::new(consumer));
    }

    /// Consumers applicable to the given model type, in lookup order.
    pub fn consumers_for(&self, key: &TypeKey) -> impl Iterator<Item = &dyn Consumer> {
        self.by_type
            .get(key)
            .into_iter()
            .flatten()
            .chain(self.any.iter())
            .map(|c| &**c)
    }

    /// Total number of registered consumers.
    pub fn len(&self) -> usize {
        self.by_type.values().map(Vec::len).sum::<usize>() + self.any.len()
    }

    /// Check if registry is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl ModelLookup for ConsumerRegistry {
    fn lookup<'a>(&'a self, node: &Node) -> Box<dyn Iterator<Item = &'a dyn Consumer> + 'a> {
        Box::new(self.consumers_for(&node.type_key()))
    }
}

/// A view bound to a node for one request.
pub trait View<H>: Send + Sync {
    /// Produce the handler, or `None` if this view does not apply to `node`.
    fn bind(&self, node: &Node, ctx: &RequestContext) -> Option<H>;
}

impl<H, F> View<H> for F
where
    F: Fn(&Node, &RequestContext) -> Option<H> + Send + Sync,
{
    fn bind(&self, node: &Node, ctx: &RequestContext) -> Option<H> {
        self(node, ctx)
    }
}

/// Wrapper that downcasts the node before building the handler.
pub struct TypedView<T, H, F>
where
    T: Any,
    F: Fn(&T, &RequestContext) -> H + Send + Sync,
{
    build: F,
    _phantom: PhantomData<fn(&T) -> H>,
}

impl<T, H, F> TypedView<T, H, F>
where
    T: Any,
    F: Fn(&T, &RequestContext) -> H + Send + Sync,
{
    /// Create a new typed view.
    pub fn new(build: F) -> Self {
        Self {
            build,
            _phantom: PhantomData,
        }
    }
}

impl<T, H, F> View<H> for TypedView<T, H, F>
where
    T: Any,
    F: Fn(&T, &RequestContext) -> H + Send + Sync,
{
    fn bind(&self, node: &Node, ctx: &RequestContext) -> Option<H> {
        node.downcast_ref::<T>().map(|model| (self.build)(model, ctx))
    }
}

/// Entry for a registered view.
type ViewEntry<H> = Box<dyn View<H>>;

/// Registry of named views per model type.
///
/// `H` is whatever the application renders with; the registry never looks
/// inside it.
pub struct ViewRegistry<H> {
    /// Views by model type, then by name.
    by_type: HashMap<TypeKey, HashMap<String, ViewEntry<H>>>,
    /// Views available on every type unless shadowed.
    any: HashMap<String, ViewEntry<H>>,
}

impl<H: 'static> ViewRegistry<H> {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self {
            by_type: HashMap::new(),
            any: HashMap::new(),
        }
    }

    /// Register a view named `name` for models of type `T`.
    ///
    /// Registering the same name twice for a type replaces the first view.
    pub fn register<T, F>(&mut self, name: &str, build: F)
    where
        T: Any,
        F: Fn(&T, &RequestContext) -> H + Send + Sync + 'static,
    {
        self.register_view(TypeKey::of::<T>(), name, TypedView::new(build));
    }

    /// Register any view for the given model type.
    pub fn register_view<V>(&mut self, key: TypeKey, name: &str, view: V)
    where
        V: View<H> + 'static,
    {
        let replaced = self
            .by_type
            .entry(key)
            .or_default()
            .insert(name.to_string(), Box::new(view));
        if replaced.is_some() {
            tracing::debug!("Replaced view `{}` on {}", name, key);
        }
    }

    /// Register a view available on every model type.
    pub fn register_any<V>(&mut self, name: &str, view: V)
    where
        V: View<H> + 'static,
    {
        let replaced = self.any.insert(name.to_string(), Box::new(view));
        if replaced.is_some() {
            tracing::debug!("Replaced view `{}` on every type", name);
        }
    }

    /// Get a view by type and name, falling back to views on every type.
    pub fn get_view(&self, key: &TypeKey, name: &str) -> Option<&dyn View<H>> {
        self.by_type
            .get(key)
            .and_then(|views| views.get(name))
            .or_else(|| self.any.get(name))
            .map(|v| &**v)
    }

    /// Names of views available for a type, sorted.
    pub fn view_names(&self, key: &TypeKey) -> Vec<&str> {
        let mut names: Vec<&str> = self
            .by_type
            .get(key)
            .into_iter()
            .flat_map(|views| views.keys())
            .chain(self.any.keys())
            .map(|s| s.as_str())
            .collect();
        names.sort_unstable();
        names.dedup();
        names
    }

    /// Total number of registered views.
    pub fn len(&self) -> usize {
        self.by_type.values().map(HashMap::len).sum::<usize>() + self.any.len()
    }

    /// Check if registry is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<H: 'static> Default for ViewRegistry<H> {
    fn default() -> Self {
        Self::new()
    }
}

impl<H: 'static> ViewLookup for ViewRegistry<H> {
    type Handler = H;

    fn lookup(&self, node: &Node, name: &str, ctx: &RequestContext) -> Option<H> {
        self.get_view(&node.type_key(), name)?.bind(node, ctx)
    }
}
