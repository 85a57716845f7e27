//! Resolve module - model traversal and view resolution.
//!
//! Provides:
//! - [`ModelResolver`] - walks the object graph with consumers from a [`ModelLookup`]
//! - [`ViewResolver`] - turns the leftover segment into a handler from a [`ViewLookup`]
//!
//! The lookup traits are the seam to the registry: [`ConsumerRegistry`] and
//! [`ViewRegistry`] implement them, but any type-indexed store will do.
//!
//! [`ConsumerRegistry`]: crate::lookup::ConsumerRegistry
//! [`ViewRegistry`]: crate::lookup::ViewRegistry

mod model;
mod view;

pub use model::{ModelLookup, ModelResolver};
pub use view::{ViewLookup, ViewResolver, DEFAULT_VIEW_NAME};
