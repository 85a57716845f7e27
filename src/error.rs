//! Error types for pathwalk.

use thiserror::Error;

use crate::path::Namespace;

/// Reason a traversed path could not be turned into a view.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolveError {
    /// More than one segment was left over after model traversal.
    #[error("Can't resolve view: path is not fully consumed ({remaining} left)")]
    UnresolvedPath {
        /// Leftover segments, rendered as a path.
        remaining: String,
    },

    /// The leftover segment uses a namespace the view resolver does not accept.
    #[error("Can't resolve view: namespace `{namespace}` is not supported")]
    UnsupportedNamespace {
        /// The rejected namespace.
        namespace: Namespace,
    },

    /// Nothing was left over and the model has no default view.
    #[error("Can't resolve view: no default view `{name}` on {model}")]
    NoDefaultView {
        /// Default view name that was looked up.
        name: String,
        /// Description of the model reached by traversal.
        model: String,
    },

    /// A view was explicitly requested in the view namespace and not found.
    #[error("Can't resolve view: no view `{name}` on {model}")]
    ViewNotFound {
        /// Requested view name.
        name: String,
        /// Description of the model reached by traversal.
        model: String,
    },

    /// The name matched neither a model consumer nor a view.
    #[error("`{name}` is neither a view nor a model")]
    AmbiguousName {
        /// The unmatched name.
        name: String,
    },
}

/// Caller-facing failure of [`Publisher::publish`](crate::Publisher::publish).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("`{path}` can not be published: {source}")]
pub struct PublicationError {
    /// Decoded path that was being published.
    pub path: String,
    /// What went wrong during resolution.
    #[source]
    pub source: ResolveError,
}

impl PublicationError {
    /// Wrap a resolution failure for the given path.
    pub fn new(path: impl Into<String>, source: ResolveError) -> Self {
        Self {
            path: path.into(),
            source,
        }
    }

    /// The underlying resolution failure.
    pub fn kind(&self) -> &ResolveError {
        &self.source
    }
}

/// Invalid publisher configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// JSON deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The default view name is empty.
    #[error("default view name must not be empty")]
    EmptyDefaultView,

    /// A shortcut marker is empty.
    #[error("shortcut marker for namespace `{0}` must not be empty")]
    EmptyShortcut(Namespace),

    /// A namespace name can not be written as a `++<ns>++` marker.
    #[error("invalid namespace `{0}`: must be non-empty, without `/` or `++`, not ending in `+`")]
    InvalidNamespace(String),
}

/// Result type alias using ResolveError.
pub type Result<T> = std::result::Result<T, ResolveError>;
