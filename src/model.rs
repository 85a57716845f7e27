//! Object graph values.
//!
//! Traversal walks arbitrary application objects. Any `'static` value that
//! is `Debug + Send + Sync` is a [`Model`]; a [`Node`] is a shared handle to
//! one. Registries key their components by [`TypeKey`], the runtime type of
//! the model behind a node.

use std::any::{Any, TypeId};
use std::fmt;
use std::sync::Arc;

/// A value that can be traversed and viewed.
pub trait Model: Any + fmt::Debug + Send + Sync {
    /// Upcast for downcasting.
    fn as_any(&self) -> &dyn Any;

    /// Name of the concrete type, for diagnostics.
    fn type_name(&self) -> &'static str;
}

impl<T: Any + fmt::Debug + Send + Sync> Model for T {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn type_name(&self) -> &'static str {
        std::any::type_name::<T>()
    }
}

/// Stable identifier of a model type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TypeKey {
    id: TypeId,
    name: &'static str,
}

impl TypeKey {
    /// Key of type `T`.
    pub fn of<T: Any>() -> Self {
        Self {
            id: TypeId::of::<T>(),
            name: std::any::type_name::<T>(),
        }
    }

    /// Type name, for diagnostics.
    #[inline]
    pub fn name(&self) -> &'static str {
        self.name
    }
}

impl fmt::Display for TypeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

/// Shared handle to a model.
///
/// Cloning is cheap. Traversal replaces the current node on every step and
/// never mutates the model behind it.
#[derive(Clone)]
pub struct Node(Arc<dyn Model>);

impl Node {
    /// Wrap a value.
    pub fn new<T: Model>(value: T) -> Self {
        Self(Arc::new(value))
    }

    /// Wrap an already shared model.
    pub fn from_arc(model: Arc<dyn Model>) -> Self {
        Self(model)
    }

    fn model(&self) -> &dyn Model {
        &*self.0
    }

    /// Key of the concrete model type.
    pub fn type_key(&self) -> TypeKey {
        TypeKey {
            id: self.model().as_any().type_id(),
            name: self.model().type_name(),
        }
    }

    /// Name of the concrete model type.
    pub fn type_name(&self) -> &'static str {
        self.model().type_name()
    }

    /// Whether the model is a `T`.
    pub fn is<T: Any>(&self) -> bool {
        self.model().as_any().is::<T>()
    }

    /// Borrow the model as a `T`.
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        self.model().as_any().downcast_ref::<T>()
    }

    /// Whether both handles point at the same model.
    pub fn ptr_eq(&self, other: &Node) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Debug for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self.model(), f)
    }
}
