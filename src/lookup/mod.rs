//! Lookup module - consumers, views, and the registries holding them.
//!
//! Provides:
//! - [`Consumer`] - one traversal step against the current node
//! - [`View`] - builds a handler for a node
//! - [`ConsumerRegistry`] / [`ViewRegistry`] - components indexed by model type
//! - [`RequestContext`] - request data passed through to views
//!
//! # Example
//!
//! ```
//! use pathwalk::lookup::{ConsumerRegistry, RequestContext, ViewRegistry};
//! use pathwalk::path::Segment;
//! use pathwalk::Node;
//!
//! #[derive(Debug)]
//! struct Root;
//!
//! #[derive(Debug)]
//! struct User(String);
//!
//! let mut consumers = ConsumerRegistry::new();
//! consumers.register(|_: &Root, segment: &Segment| Some(Node::new(User(segment.name.clone()))));
//!
//! let mut views: ViewRegistry<String> = ViewRegistry::new();
//! views.register("index", |user: &User, _: &RequestContext| format!("profile of {}", user.0));
//! ```

mod consumer;
mod context;
mod registry;

pub use consumer::{Consumed, Consumer, TypedConsumer};
pub use context::RequestContext;
pub use registry::{ConsumerRegistry, TypedView, View, ViewRegistry};
