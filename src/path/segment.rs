//! Namespaces and path segments.
//!
//! A segment is one `(namespace, name)` step of a path. Plain path pieces
//! live in the [`Namespace::Default`] namespace; view names usually live in
//! [`Namespace::View`]. Applications may use any other namespace through
//! [`Namespace::custom`], e.g. `++skin++dark`.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Namespace of a path segment.
///
/// Serialized as its plain string form (`"default"`, `"view"`, or the custom
/// name). Custom namespaces are only built through [`Namespace::custom`] (or
/// `TryFrom`), so `"default"` and `"view"` always map to the built-in variants
/// and every namespace prints as a `++<ns>++` marker that parses back to it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Namespace {
    /// Segments without explicit namespace syntax.
    Default,
    /// Renderer/handler names.
    View,
    /// Application-defined namespace.
    Custom(CustomNamespace),
}

/// Name of an application-defined namespace.
///
/// Never empty, never `default` or `view`, and free of `/` and `++`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CustomNamespace(String);

impl CustomNamespace {
    /// The namespace name.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Namespace {
    /// Build a namespace from its string form.
    ///
    /// `"default"` and `"view"` give the built-in variants.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidNamespace`] for names that could not
    /// survive a `++<ns>++<name>` round trip: empty names, names containing
    /// `/` or `++`, and names ending in `+`.
    pub fn custom(name: impl Into<String>) -> Result<Self, ConfigError> {
        let name = name.into();
        let printable = !name.is_empty()
            && !name.contains('/')
            && !name.contains("++")
            && !name.ends_with('+');
        match name.as_str() {
            "default" => Ok(Namespace::Default),
            "view" => Ok(Namespace::View),
            _ if printable => Ok(Namespace::Custom(CustomNamespace(name))),
            _ => Err(ConfigError::InvalidNamespace(name)),
        }
    }

    /// String form used inside `++<ns>++` markers.
    pub fn as_str(&self) -> &str {
        match self {
            Namespace::Default => "default",
            Namespace::View => "view",
            Namespace::Custom(name) => name.as_str(),
        }
    }

    /// Whether this is the default namespace.
    #[inline]
    pub fn is_default(&self) -> bool {
        matches!(self, Namespace::Default)
    }
}

impl TryFrom<&str> for Namespace {
    type Error = ConfigError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Namespace::custom(value)
    }
}

impl TryFrom<String> for Namespace {
    type Error = ConfigError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Namespace::custom(value)
    }
}

impl From<Namespace> for String {
    fn from(value: Namespace) -> Self {
        match value {
            Namespace::Custom(CustomNamespace(name)) => name,
            other => other.as_str().to_string(),
        }
    }
}

impl fmt::Display for Namespace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One `(namespace, name)` step of a path.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Segment {
    /// Namespace the name belongs to.
    pub namespace: Namespace,
    /// Segment name (never contains `/`).
    pub name: String,
}

impl Segment {
    /// Create a new segment.
    pub fn new(namespace: Namespace, name: impl Into<String>) -> Self {
        Self {
            namespace,
            name: name.into(),
        }
    }

    /// Segment in the default namespace.
    pub fn model(name: impl Into<String>) -> Self {
        Self::new(Namespace::Default, name)
    }

    /// Segment in the view namespace.
    pub fn view(name: impl Into<String>) -> Self {
        Self::new(Namespace::View, name)
    }
}

/// Renders the canonical path piece, without shortcuts.
impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.namespace.is_default() {
            f.write_str(&self.name)
        } else {
            write!(f, "++{}++{}", self.namespace, self.name)
        }
    }
}
