//! Publisher builder and publication pipeline.
//!
//! The [`PublisherBuilder`] provides a fluent API for configuring the path
//! grammar and the view resolver. The [`Publisher`] runs one request through
//! the pipeline:
//! 1. Percent-decode the raw path
//! 2. Tokenize it into segments
//! 3. Traverse the object graph from the root
//! 4. Resolve the leftover segment (or the default) into a view handler
//!
//! # Example
//!
//! ```
//! use std::collections::HashMap;
//! use pathwalk::lookup::{ConsumerRegistry, RequestContext, ViewRegistry};
//! use pathwalk::path::{Namespace, Segment};
//! use pathwalk::{Node, Publisher};
//!
//! #[derive(Debug)]
//! struct Folder(HashMap<String, Node>);
//!
//! #[derive(Debug)]
//! struct Document(String);
//!
//! let mut consumers = ConsumerRegistry::new();
//! consumers.register(|folder: &Folder, segment: &Segment| folder.0.get(&segment.name).cloned());
//!
//! let mut views: ViewRegistry<String> = ViewRegistry::new();
//! views.register("index", |doc: &Document, _: &RequestContext| doc.0.clone());
//! views.register("edit", |doc: &Document, _: &RequestContext| format!("editing {}", doc.0));
//!
//! let publisher = Publisher::builder(consumers, views)
//!     .shortcut("@@", Namespace::View)
//!     .build()
//!     .unwrap();
//!
//! let root = Node::new(Folder(HashMap::from([(
//!     "readme".to_string(),
//!     Node::new(Document("hello".to_string())),
//! )])));
//!
//! let ctx = RequestContext::default();
//! assert_eq!(publisher.publish(&root, "/readme", &ctx).unwrap(), "hello");
//! assert_eq!(publisher.publish(&root, "/readme/@@edit", &ctx).unwrap(), "editing hello");
//! assert!(publisher.publish(&root, "/missing/page", &ctx).is_err());
//! ```

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, PublicationError};
use crate::lookup::RequestContext;
use crate::model::Node;
use crate::path::{decode_path, parse_path, Namespace, Shortcuts};
use crate::resolve::{ModelLookup, ModelResolver, ViewLookup, ViewResolver, DEFAULT_VIEW_NAME};

/// Serializable publisher settings.
///
/// ```
/// use pathwalk::path::Namespace;
/// use pathwalk::PublisherConfig;
///
/// let config = PublisherConfig::from_json(
///     r#"{"default_view": "home", "shortcuts": {"@@": "view"}, "namespaces": ["api"]}"#,
/// )
/// .unwrap();
///
/// assert_eq!(config.default_view, "home");
/// assert_eq!(config.shortcuts.get("@@"), Some(&Namespace::View));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PublisherConfig {
    /// View used when nothing is left of the path.
    pub default_view: String,
    /// Shortcut markers and the namespace each stands for.
    pub shortcuts: BTreeMap<String, Namespace>,
    /// Namespaces accepted for view names besides `default` and `view`.
    pub namespaces: Vec<Namespace>,
}

impl Default for PublisherConfig {
    fn default() -> Self {
        Self {
            default_view: DEFAULT_VIEW_NAME.to_string(),
            shortcuts: BTreeMap::new(),
            namespaces: Vec::new(),
        }
    }
}

impl PublisherConfig {
    /// Parse and validate a JSON configuration.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check the settings for values that can never work.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.default_view.is_empty() {
            return Err(ConfigError::EmptyDefaultView);
        }
        if let Some((_, namespace)) = self.shortcuts.iter().find(|(m, _)| m.is_empty()) {
            return Err(ConfigError::EmptyShortcut(namespace.clone()));
        }
        Ok(())
    }
}

/// Builder for configuring and creating a [`Publisher`].
pub struct PublisherBuilder<M, V> {
    models: M,
    views: V,
    shortcuts: Shortcuts,
    default_view: String,
    namespaces: Vec<Namespace>,
}

impl<M: ModelLookup, V: ViewLookup> PublisherBuilder<M, V> {
    /// Create a builder over the given consumer and view lookups.
    pub fn new(models: M, views: V) -> Self {
        Self {
            models,
            views,
            shortcuts: Shortcuts::new(),
            default_view: DEFAULT_VIEW_NAME.to_string(),
            namespaces: Vec::new(),
        }
    }

    /// Register a shortcut marker, e.g. `@@` for the view namespace.
    pub fn shortcut(mut self, marker: &str, namespace: Namespace) -> Self {
        self.shortcuts.insert(marker, namespace);
        self
    }

    /// Set the view used when nothing is left of the path.
    ///
    /// Default: `index`
    pub fn default_view(mut self, name: &str) -> Self {
        self.default_view = name.to_string();
        self
    }

    /// Accept view names in an extra namespace.
    pub fn accept_namespace(mut self, namespace: Namespace) -> Self {
        self.namespaces.push(namespace);
        self
    }

    /// Apply a configuration on top of the current settings.
    pub fn config(mut self, config: PublisherConfig) -> Self {
        self.default_view = config.default_view;
        for (marker, namespace) in config.shortcuts {
            self.shortcuts.insert(marker, namespace);
        }
        self.namespaces.extend(config.namespaces);
        self
    }

    /// Build the publisher.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyDefaultView`] if the default view name was
    /// set to an empty string, either directly or through [`config`](Self::config).
    pub fn build(self) -> Result<Publisher<M, V>, ConfigError> {
        if self.default_view.is_empty() {
            return Err(ConfigError::EmptyDefaultView);
        }

        let mut views = ViewResolver::new(self.views);
        views.set_default_view(self.default_view);
        for namespace in self.namespaces {
            views.accept_namespace(namespace);
        }

        Ok(Publisher {
            models: ModelResolver::new(self.models),
            views,
            shortcuts: self.shortcuts,
        })
    }
}

/// Resolves request paths against an object graph.
///
/// A built publisher holds no per-request state; `publish` takes `&self`
/// and can be called from many threads at once when the lookups are `Sync`.
pub struct Publisher<M, V> {
    models: ModelResolver<M>,
    views: ViewResolver<V>,
    shortcuts: Shortcuts,
}

impl<M: ModelLookup, V: ViewLookup> Publisher<M, V> {
    /// Create a new publisher builder.
    pub fn builder(models: M, views: V) -> PublisherBuilder<M, V> {
        PublisherBuilder::new(models, views)
    }

    /// Resolve `raw_path` from `root` into a view handler.
    ///
    /// # Errors
    ///
    /// Returns [`PublicationError`] wrapping the reason resolution failed.
    pub fn publish(
        &self,
        root: &Node,
        raw_path: &str,
        ctx: &RequestContext,
    ) -> Result<V::Handler, PublicationError> {
        let path = decode_path(raw_path);
        let segments = parse_path(&path, &self.shortcuts);
        let (node, leftover) = self.models.resolve(root.clone(), segments);

        self.views.resolve(&node, &leftover, ctx).map_err(|e| {
            tracing::debug!("Publication of {} failed: {}", path, e);
            PublicationError::new(path.into_owned(), e)
        })
    }

    /// Resolve the raw path carried by the request context.
    pub fn publish_request(
        &self,
        root: &Node,
        ctx: &RequestContext,
    ) -> Result<V::Handler, PublicationError> {
        self.publish(root, ctx.path(), ctx)
    }

    /// Get the shortcut table used to tokenize paths.
    pub fn shortcuts(&self) -> &Shortcuts {
        &self.shortcuts
    }

    /// Get the model resolver.
    pub fn models(&self) -> &ModelResolver<M> {
        &self.models
    }

    /// Get the view resolver.
    pub fn views(&self) -> &ViewResolver<V> {
        &self.views
    }
}
