//! # pathwalk
//!
//! Resolve request paths into view handlers by walking an object graph.
//!
//! A path such as `/docs/readme/++view++edit` is tokenized into
//! `(namespace, name)` segments, consumed one step at a time against the
//! current object by consumers registered for its type, and whatever is
//! left over (at most one segment) names the view that renders the object
//! reached.
//!
//! ## Architecture
//!
//! - **Path** ([`path`]): tokenizer with `++ns++name` markers and shortcut
//!   prefixes such as `@@`, plus its inverse
//! - **Lookup** ([`lookup`]): consumers, views, and type-indexed registries
//! - **Resolve** ([`resolve`]): model traversal and view resolution
//! - **Publisher** ([`Publisher`]): decode → tokenize → traverse → view
//!
//! ## Example
//!
//! ```
//! use pathwalk::lookup::{ConsumerRegistry, RequestContext, ViewRegistry};
//! use pathwalk::path::Segment;
//! use pathwalk::{Node, Publisher};
//!
//! #[derive(Debug)]
//! struct Users;
//!
//! #[derive(Debug)]
//! struct User(String);
//!
//! let mut consumers = ConsumerRegistry::new();
//! consumers.register(|_: &Users, segment: &Segment| Some(Node::new(User(segment.name.clone()))));
//!
//! let mut views: ViewRegistry<String> = ViewRegistry::new();
//! views.register("index", |user: &User, _: &RequestContext| format!("profile of {}", user.0));
//!
//! let publisher = Publisher::builder(consumers, views).build().unwrap();
//! let handler = publisher
//!     .publish(&Node::new(Users), "/alice", &RequestContext::default())
//!     .unwrap();
//!
//! assert_eq!(handler, "profile of alice");
//! ```

pub mod error;
pub mod lookup;
pub mod path;
pub mod resolve;

mod model;
mod publisher;

pub use error::{ConfigError, PublicationError, ResolveError};
pub use lookup::RequestContext;
pub use model::{Model, Node, TypeKey};
pub use publisher::{Publisher, PublisherBuilder, PublisherConfig};
