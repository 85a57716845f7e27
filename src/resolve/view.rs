//! View resolution.
//!
//! After traversal at most one segment may remain. It names the view to
//! render the reached node with; an empty remainder means the default view.
//!
//! | Remaining           | Looked up                  | On miss            |
//! |---------------------|----------------------------|--------------------|
//! | none                | `(view, default)`          | `NoDefaultView`    |
//! | `(view, name)`      | `name`                     | `ViewNotFound`     |
//! | `(other, name)`     | `name`                     | `AmbiguousName`    |
//! | two or more         | -                          | `UnresolvedPath`   |
//!
//! The namespace of the remaining segment must be accepted by the resolver
//! (`default` and `view` out of the box), otherwise `UnsupportedNamespace`.

use crate::error::{ResolveError, Result};
use crate::lookup::RequestContext;
use crate::model::Node;
use crate::path::{create_path, Namespace, PathStack, Shortcuts};

/// Default view name used when nothing is left of the path.
pub const DEFAULT_VIEW_NAME: &str = "index";

/// Source of views for a node.
pub trait ViewLookup {
    /// Whatever the application renders with.
    type Handler;

    /// Find the view `name` bound to `node` for this request.
    fn lookup(&self, node: &Node, name: &str, ctx: &RequestContext) -> Option<Self::Handler>;
}

impl<L: ViewLookup + ?Sized> ViewLookup for &L {
    type Handler = L::Handler;

    fn lookup(&self, node: &Node, name: &str, ctx: &RequestContext) -> Option<Self::Handler> {
        (**self).lookup(node, name, ctx)
    }
}

/// Resolves the leftover of a traversal into a view handler.
#[derive(Debug, Clone)]
pub struct ViewResolver<L> {
    lookup: L,
    accepted: Vec<Namespace>,
    default_name: String,
}

impl<L: ViewLookup> ViewResolver<L> {
    /// Create a resolver accepting the `default` and `view` namespaces,
    /// with `index` as default view.
    pub fn new(lookup: L) -> Self {
        Self {
            lookup,
            accepted: vec![Namespace::Default, Namespace::View],
            default_name: DEFAULT_VIEW_NAME.to_string(),
        }
    }

    /// Also accept view names in `namespace`.
    pub fn accept_namespace(&mut self, namespace: Namespace) {
        if !self.accepted.contains(&namespace) {
            self.accepted.push(namespace);
        }
    }

    /// Set the view used when nothing is left of the path.
    pub fn set_default_view(&mut self, name: impl Into<String>) {
        self.default_name = name.into();
    }

    /// Get the default view name.
    pub fn default_view(&self) -> &str {
        &self.default_name
    }

    /// Whether view names in `namespace` are accepted.
    pub fn accepts(&self, namespace: &Namespace) -> bool {
        self.accepted.contains(namespace)
    }

    /// Get the view lookup.
    pub fn lookup(&self) -> &L {
        &self.lookup
    }

    /// Resolve the view for `node`, using the configured default view.
    pub fn resolve(
        &self,
        node: &Node,
        remaining: &PathStack,
        ctx: &RequestContext,
    ) -> Result<L::Handler> {
        self.resolve_with_default(node, remaining, ctx, &self.default_name)
    }

    /// Resolve the view for `node`, falling back to `default` when nothing
    /// is left of the path.
    ///
    /// # Errors
    ///
    /// See the module documentation for which [`ResolveError`] each case
    /// produces.
    pub fn resolve_with_default(
        &self,
        node: &Node,
        remaining: &PathStack,
        ctx: &RequestContext,
        default: &str,
    ) -> Result<L::Handler> {
        let (namespace, name, default_fallback) = match remaining.as_slice() {
            [] => (Namespace::View, default, true),
            [segment] => (segment.namespace.clone(), segment.name.as_str(), false),
            _ => {
                return Err(ResolveError::UnresolvedPath {
                    remaining: create_path(remaining, &Shortcuts::new()),
                });
            }
        };

        if !self.accepts(&namespace) {
            return Err(ResolveError::UnsupportedNamespace { namespace });
        }

        if let Some(handler) = self.lookup.lookup(node, name, ctx) {
            tracing::debug!("Resolved view `{}` on {}", name, node.type_name());
            return Ok(handler);
        }

        let model = format!("{:?}", node);
        Err(if default_fallback {
            ResolveError::NoDefaultView {
                name: name.to_string(),
                model,
            }
        } else if namespace == Namespace::View {
            ResolveError::ViewNotFound {
                name: name.to_string(),
                model,
            }
        } else {
            ResolveError::AmbiguousName {
                name: name.to_string(),
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lookup::ViewRegistry;
    use crate::path::Segment;

    #[derive(Debug)]
    struct Page;

    #[derive(Debug)]
    struct Blob;

    fn registry() -> ViewRegistry<&'static str> {
        let mut views = ViewRegistry::new();
        views.register("index", |_: &Page, _ctx: &RequestContext| "page index");
        views.register("edit", |_: &Page, _ctx: &RequestContext| "page edit");
        views.register("raw", |_: &Blob, _ctx: &RequestContext| "blob raw");
        views
    }

    fn stack(segments: Vec<Segment>) -> PathStack {
        PathStack::new(segments)
    }

    #[test]
    fn test_default_view() {
        let resolver = ViewResolver::new(registry());
        let handler = resolver
            .resolve(&Node::new(Page), &PathStack::empty(), &RequestContext::default())
            .unwrap();
        assert_eq!(handler, "page index");
    }

    #[test]
    fn test_no_default_view() {
        let resolver = ViewResolver::new(registry());
        let err = resolver
            .resolve(&Node::new(Blob), &PathStack::empty(), &RequestContext::default())
            .unwrap_err();
        assert!(matches!(err, ResolveError::NoDefaultView { ref name, .. } if name == "index"));
    }

    #[test]
    fn test_custom_default_view() {
        let mut resolver = ViewResolver::new(registry());
        resolver.set_default_view("raw");
        assert_eq!(resolver.default_view(), "raw");

        let handler = resolver
            .resolve(&Node::new(Blob), &PathStack::empty(), &RequestContext::default())
            .unwrap();
        assert_eq!(handler, "blob raw");
    }

    #[test]
    fn test_resolve_with_default_overrides() {
        let resolver = ViewResolver::new(registry());
        let handler = resolver
            .resolve_with_default(
                &Node::new(Page),
                &PathStack::empty(),
                &RequestContext::default(),
                "edit",
            )
            .unwrap();
        assert_eq!(handler, "page edit");
    }

    #[test]
    fn test_named_view_in_both_namespaces() {
        let resolver = ViewResolver::new(registry());
        let ctx = RequestContext::default();

        for segment in [Segment::view("edit"), Segment::model("edit")] {
            let handler = resolver
                .resolve(&Node::new(Page), &stack(vec![segment]), &ctx)
                .unwrap();
            assert_eq!(handler, "page edit");
        }
    }

    #[test]
    fn test_view_not_found() {
        let resolver = ViewResolver::new(registry());
        let err = resolver
            .resolve(
                &Node::new(Page),
                &stack(vec![Segment::view("x")]),
                &RequestContext::default(),
            )
            .unwrap_err();
        assert_eq!(
            err,
            ResolveError::ViewNotFound {
                name: "x".to_string(),
                model: "Page".to_string(),
            }
        );
    }

    #[test]
    fn test_ambiguous_name() {
        let resolver = ViewResolver::new(registry());
        let err = resolver
            .resolve(
                &Node::new(Page),
                &stack(vec![Segment::model("x")]),
                &RequestContext::default(),
            )
            .unwrap_err();
        assert_eq!(
            err,
            ResolveError::AmbiguousName {
                name: "x".to_string()
            }
        );
        assert_eq!(err.to_string(), "`x` is neither a view nor a model");
    }

    #[test]
    fn test_two_leftover_segments() {
        let resolver = ViewResolver::new(registry());
        let err = resolver
            .resolve(
                &Node::new(Page),
                &stack(vec![Segment::model("a"), Segment::model("b")]),
                &RequestContext::default(),
            )
            .unwrap_err();
        assert_eq!(
            err,
            ResolveError::UnresolvedPath {
                remaining: "/a/b".to_string()
            }
        );
    }

    #[test]
    fn test_view_namespace_spelled_by_name() {
        let resolver = ViewResolver::new(registry());
        let view = Namespace::custom("view").unwrap();

        let handler = resolver
            .resolve(
                &Node::new(Page),
                &stack(vec![Segment::new(view, "edit")]),
                &RequestContext::default(),
            )
            .unwrap();
        assert_eq!(handler, "page edit");
    }

    #[test]
    fn test_unsupported_namespace() {
        let resolver = ViewResolver::new(registry());
        let skin = Namespace::custom("skin").unwrap();
        let err = resolver
            .resolve(
                &Node::new(Page),
                &stack(vec![Segment::new(skin.clone(), "edit")]),
                &RequestContext::default(),
            )
            .unwrap_err();
        assert_eq!(err, ResolveError::UnsupportedNamespace { namespace: skin });
    }

    #[test]
    fn test_accept_extra_namespace() {
        let mut resolver = ViewResolver::new(registry());
        let api = Namespace::custom("api").unwrap();
        resolver.accept_namespace(api.clone());
        resolver.accept_namespace(api.clone());
        assert!(resolver.accepts(&api));

        let handler = resolver
            .resolve(
                &Node::new(Page),
                &stack(vec![Segment::new(api.clone(), "edit")]),
                &RequestContext::default(),
            )
            .unwrap();
        assert_eq!(handler, "page edit");

        let err = resolver
            .resolve(
                &Node::new(Page),
                &stack(vec![Segment::new(api, "missing")]),
                &RequestContext::default(),
            )
            .unwrap_err();
        assert!(matches!(err, ResolveError::AmbiguousName { .. }));
    }
}
