//! Request context passed through to view lookup.
//!
//! The transport fills it in; resolvers never look inside except for the raw
//! path read by [`Publisher::publish_request`](crate::Publisher::publish_request).
//!
//! # Example
//!
//! ```
//! use pathwalk::RequestContext;
//!
//! let ctx = RequestContext::new("/docs/++view++edit")
//!     .with_var("REQUEST_METHOD", "GET")
//!     .with_var("HTTP_ACCEPT", "text/html");
//!
//! assert_eq!(ctx.path(), "/docs/++view++edit");
//! assert_eq!(ctx.var("REQUEST_METHOD"), Some("GET"));
//! ```

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Raw request path plus opaque request metadata.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestContext {
    /// Raw, still percent-encoded request path.
    path: String,
    /// Transport-specific request variables.
    #[serde(default)]
    environ: HashMap<String, String>,
}

impl RequestContext {
    /// Create a context for the given raw path.
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            environ: HashMap::new(),
        }
    }

    /// Add a request variable.
    pub fn with_var(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.environ.insert(key.into(), value.into());
        self
    }

    /// Get the raw request path.
    #[inline]
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Get a request variable.
    pub fn var(&self, key: &str) -> Option<&str> {
        self.environ.get(key).map(|s| s.as_str())
    }

    /// All request variables.
    pub fn environ(&self) -> &HashMap<String, String> {
        &self.environ
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vars() {
        let ctx = RequestContext::new("/").with_var("a", "1").with_var("a", "2");
        assert_eq!(ctx.var("a"), Some("2"));
        assert_eq!(ctx.var("missing"), None);
        assert_eq!(ctx.environ().len(), 1);
    }

    #[test]
    fn test_from_json() {
        let ctx: RequestContext =
            serde_json::from_str(r#"{"path": "/a/@@b", "environ": {"REMOTE_ADDR": "::1"}}"#)
                .unwrap();
        assert_eq!(ctx.path(), "/a/@@b");
        assert_eq!(ctx.var("REMOTE_ADDR"), Some("::1"));
    }

    #[test]
    fn test_from_json_without_environ() {
        let ctx: RequestContext = serde_json::from_str(r#"{"path": "/"}"#).unwrap();
        assert!(ctx.environ().is_empty());
    }
}
