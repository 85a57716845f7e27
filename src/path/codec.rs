//! Path tokenizer and its inverse.
//!
//! Grammar of one path piece (pieces are separated by `/`):
//!
//! ```text
//! ++<ns>++<name>    closed namespace form, only at the very start of the piece
//! <marker><name>    configured shortcut, only at the very start of the piece
//! <name>            anything else, in the default namespace
//! ```
//!
//! Empty pieces (leading, trailing or repeated slashes) are dropped.
//! Parsing is total: malformed marker syntax is a literal default name.
//!
//! # Example
//!
//! ```
//! use pathwalk::path::{create_path, parse_path, Namespace, Segment, Shortcuts};
//!
//! let shortcuts = Shortcuts::new().with("@@", Namespace::View);
//!
//! let stack = parse_path("/a//b/@@c", &shortcuts);
//! assert_eq!(
//!     stack.as_slice(),
//!     &[Segment::model("a"), Segment::model("b"), Segment::view("c")]
//! );
//!
//! assert_eq!(create_path(&stack, &Shortcuts::new()), "/a/b/++view++c");
//! assert_eq!(create_path(&stack, &shortcuts), "/a/b/@@c");
//! ```

use super::{Namespace, PathStack, Segment};

/// Opening and closing delimiter of the closed namespace form.
const NS_MARKER: &str = "++";

/// Ordered table of shortcut markers, e.g. `@@` for the view namespace.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Shortcuts {
    entries: Vec<(String, Namespace)>,
}

impl Shortcuts {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style [`insert`](Self::insert).
    pub fn with(mut self, marker: impl Into<String>, namespace: Namespace) -> Self {
        self.insert(marker, namespace);
        self
    }

    /// Register `marker` as a prefix standing for `namespace`.
    ///
    /// Re-registering a marker replaces its namespace. Empty markers are
    /// ignored since they would match every piece.
    pub fn insert(&mut self, marker: impl Into<String>, namespace: Namespace) {
        let marker = marker.into();
        if marker.is_empty() {
            tracing::warn!("Ignoring empty shortcut marker for namespace {}", namespace);
            return;
        }
        match self.entries.iter_mut().find(|(m, _)| *m == marker) {
            Some(entry) => entry.1 = namespace,
            None => self.entries.push((marker, namespace)),
        }
    }

    /// Whether no shortcut is configured.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over `(marker, namespace)` pairs in registration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Namespace)> {
        self.entries.iter().map(|(m, ns)| (m.as_str(), ns))
    }

    /// Longest marker that prefixes `piece`, with its namespace.
    pub fn namespace_for(&self, piece: &str) -> Option<(&str, &Namespace)> {
        self.iter()
            .filter(|(marker, _)| piece.starts_with(marker))
            .max_by_key(|(marker, _)| marker.len())
    }

    /// First marker registered for `namespace`.
    pub fn marker_for(&self, namespace: &Namespace) -> Option<&str> {
        self.iter()
            .find(|(_, ns)| *ns == namespace)
            .map(|(marker, _)| marker)
    }
}

/// Tokenize `path` into segments.
pub fn parse_path(path: &str, shortcuts: &Shortcuts) -> PathStack {
    path.split('/')
        .filter(|piece| !piece.is_empty())
        .map(|piece| parse_piece(piece, shortcuts))
        .collect()
}

/// Serialize segments back into a path.
///
/// Left inverse of [`parse_path`] as long as no name itself starts with
/// `++` or a configured marker.
pub fn create_path<'a, I>(segments: I, shortcuts: &Shortcuts) -> String
where
    I: IntoIterator<Item = &'a Segment>,
{
    let mut path = String::new();
    for segment in segments {
        path.push('/');
        if let Some(marker) = shortcuts.marker_for(&segment.namespace) {
            path.push_str(marker);
            path.push_str(&segment.name);
        } else if segment.namespace.is_default() {
            path.push_str(&segment.name);
        } else {
            path.push_str(NS_MARKER);
            path.push_str(segment.namespace.as_str());
            path.push_str(NS_MARKER);
            path.push_str(&segment.name);
        }
    }
    if path.is_empty() {
        path.push('/');
    }
    path
}

fn parse_piece(piece: &str, shortcuts: &Shortcuts) -> Segment {
    if let Some(segment) = parse_closed_namespace(piece) {
        return segment;
    }
    if let Some((marker, namespace)) = shortcuts.namespace_for(piece) {
        let name = &piece[marker.len()..];
        if !name.is_empty() {
            return Segment::new(namespace.clone(), name);
        }
    }
    Segment::model(piece)
}

/// `++<ns>++<name>`, recognized only at offset 0. Only the first closing
/// `++` delimits the namespace; the name is taken verbatim.
fn parse_closed_namespace(piece: &str) -> Option<Segment> {
    let body = piece.strip_prefix(NS_MARKER)?;
    let close = body.find(NS_MARKER)?;
    let (namespace, name) = (&body[..close], &body[close + NS_MARKER.len()..]);
    if namespace.is_empty() || name.is_empty() {
        return None;
    }
    // The first `++` closes the marker, so `namespace` is always printable.
    let namespace = Namespace::custom(namespace).ok()?;
    Some(Segment::new(namespace, name))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn segs(stack: &PathStack) -> Vec<Segment> {
        stack.to_vec()
    }

    fn view_shortcut() -> Shortcuts {
        Shortcuts::new().with("@@", Namespace::View)
    }

    #[test]
    fn test_parse_default_namespace() {
        assert_eq!(
            segs(&parse_path("/a/b/c", &Shortcuts::new())),
            vec![Segment::model("a"), Segment::model("b"), Segment::model("c")]
        );
    }

    #[test]
    fn test_parse_empty() {
        assert!(parse_path("/", &Shortcuts::new()).is_empty());
        assert!(parse_path("", &Shortcuts::new()).is_empty());
        assert!(parse_path("///", &Shortcuts::new()).is_empty());
    }

    #[test]
    fn test_multi_slash() {
        let none = Shortcuts::new();
        assert_eq!(parse_path("/a/b/c", &none), parse_path("/a///b//c", &none));
        assert_eq!(parse_path("/a/b/c", &none), parse_path("/a/b/c/", &none));
        assert_eq!(parse_path("/a/b/c", &none), parse_path("a/b/c", &none));
    }

    #[test]
    fn test_create() {
        let stack = PathStack::new(vec![
            Segment::model("a"),
            Segment::model("b"),
            Segment::model("c"),
        ]);
        assert_eq!(create_path(&stack, &Shortcuts::new()), "/a/b/c");
    }

    #[test]
    fn test_create_empty() {
        assert_eq!(create_path(&PathStack::empty(), &Shortcuts::new()), "/");
    }

    fn attr() -> Namespace {
        Namespace::custom("attr").unwrap()
    }

    fn skin() -> Namespace {
        Namespace::custom("skin").unwrap()
    }

    #[test]
    fn test_parse_ns() {
        assert_eq!(
            segs(&parse_path("/a/b/++view++c", &Shortcuts::new())),
            vec![Segment::model("a"), Segment::model("b"), Segment::view("c")]
        );
    }

    #[test]
    fn test_parse_custom_ns() {
        assert_eq!(
            segs(&parse_path("/++skin++dark/page", &Shortcuts::new())),
            vec![
                Segment::new(Namespace::custom("skin").unwrap(), "dark"),
                Segment::model("page"),
            ]
        );
    }

    #[test]
    fn test_parse_explicit_default_ns() {
        assert_eq!(
            segs(&parse_path("/++default++a", &Shortcuts::new())),
            vec![Segment::model("a")]
        );
    }

    #[test]
    fn test_create_ns() {
        let stack = PathStack::new(vec![
            Segment::model("a"),
            Segment::model("b"),
            Segment::view("c"),
        ]);
        assert_eq!(create_path(&stack, &Shortcuts::new()), "/a/b/++view++c");
    }

    #[test]
    fn test_parse_ns_shortcut() {
        assert_eq!(
            segs(&parse_path("/a/b/@@c", &view_shortcut())),
            vec![Segment::model("a"), Segment::model("b"), Segment::view("c")]
        );
    }

    #[test]
    fn test_create_ns_shortcut() {
        let stack = PathStack::new(vec![
            Segment::model("a"),
            Segment::model("b"),
            Segment::view("c"),
        ]);
        assert_eq!(create_path(&stack, &view_shortcut()), "/a/b/@@c");
    }

    #[test]
    fn test_parse_ns_shortcut_not_at_beginning() {
        assert_eq!(
            segs(&parse_path("/a/b/a@@c", &view_shortcut())),
            vec![
                Segment::model("a"),
                Segment::model("b"),
                Segment::model("a@@c")
            ]
        );
    }

    #[test]
    fn test_create_ns_shortcut_not_at_beginning() {
        let stack = PathStack::new(vec![
            Segment::model("a"),
            Segment::model("b"),
            Segment::model("a@@c"),
        ]);
        assert_eq!(create_path(&stack, &view_shortcut()), "/a/b/a@@c");
    }

    #[test]
    fn test_parse_ns_weird_no_close() {
        assert_eq!(
            segs(&parse_path("/a/b/++c", &Shortcuts::new())),
            vec![Segment::model("a"), Segment::model("b"), Segment::model("++c")]
        );
    }

    #[test]
    fn test_create_ns_weird_no_close() {
        let stack = PathStack::new(vec![
            Segment::model("a"),
            Segment::model("b"),
            Segment::model("++c"),
        ]);
        assert_eq!(create_path(&stack, &Shortcuts::new()), "/a/b/++c");
    }

    #[test]
    fn test_parse_ns_weird_no_open() {
        assert_eq!(
            segs(&parse_path("/a/b/view++c", &Shortcuts::new())),
            vec![
                Segment::model("a"),
                Segment::model("b"),
                Segment::model("view++c")
            ]
        );
    }

    #[test]
    fn test_create_ns_weird_no_open() {
        let stack = PathStack::new(vec![
            Segment::model("a"),
            Segment::model("b"),
            Segment::model("view++c"),
        ]);
        assert_eq!(create_path(&stack, &Shortcuts::new()), "/a/b/view++c");
    }

    #[test]
    fn test_parse_ns_only_first_delimiter() {
        assert_eq!(
            segs(&parse_path("/++view++c++d++e", &Shortcuts::new())),
            vec![Segment::view("c++d++e")]
        );
    }

    #[test]
    fn test_parse_ns_empty_parts_are_literal() {
        let none = Shortcuts::new();
        assert_eq!(segs(&parse_path("/++view++", &none)), vec![Segment::model("++view++")]);
        assert_eq!(segs(&parse_path("/++++c", &none)), vec![Segment::model("++++c")]);
    }

    #[test]
    fn test_bare_shortcut_is_literal() {
        assert_eq!(
            segs(&parse_path("/@@", &view_shortcut())),
            vec![Segment::model("@@")]
        );
    }

    #[test]
    fn test_closed_form_wins_over_shortcut() {
        let shortcuts = Shortcuts::new().with("++", attr());
        assert_eq!(
            segs(&parse_path("/++view++c/++x", &shortcuts)),
            vec![
                Segment::view("c"),
                Segment::new(attr(), "x")
            ]
        );
    }

    #[test]
    fn test_longest_shortcut_wins() {
        let shortcuts = Shortcuts::new()
            .with("@", attr())
            .with("@@", Namespace::View);
        assert_eq!(
            segs(&parse_path("/@@c/@d", &shortcuts)),
            vec![Segment::view("c"), Segment::new(attr(), "d")]
        );
    }

    #[test]
    fn test_shortcut_reinsert_replaces() {
        let mut shortcuts = view_shortcut();
        shortcuts.insert("@@", skin());
        assert_eq!(shortcuts.iter().count(), 1);
        assert_eq!(shortcuts.marker_for(&Namespace::View), None);
        assert_eq!(shortcuts.marker_for(&skin()), Some("@@"));
    }

    #[test]
    fn test_empty_shortcut_ignored() {
        let shortcuts = Shortcuts::new().with("", Namespace::View);
        assert!(shortcuts.is_empty());
    }

    #[test]
    fn test_round_trip() {
        let stack = PathStack::new(vec![
            Segment::model("folder"),
            Segment::new(skin(), "dark"),
            Segment::model("doc.txt"),
            Segment::view("edit"),
        ]);
        for shortcuts in [Shortcuts::new(), view_shortcut()] {
            let path = create_path(&stack, &shortcuts);
            assert_eq!(parse_path(&path, &shortcuts), stack);
        }
    }

    #[test]
    fn test_round_trip_builtin_names_as_namespaces() {
        // Spelling a built-in namespace by name yields the built-in variant,
        // so what is printed parses back to the same segments.
        let stack = PathStack::new(vec![
            Segment::new(Namespace::custom("default").unwrap(), "a"),
            Segment::new(Namespace::custom("view").unwrap(), "c"),
        ]);
        assert_eq!(stack.to_vec(), vec![Segment::model("a"), Segment::view("c")]);

        let path = create_path(&stack, &Shortcuts::new());
        assert_eq!(path, "/a/++view++c");
        assert_eq!(parse_path(&path, &Shortcuts::new()), stack);
    }

    #[test]
    fn test_round_trip_namespace_with_plus() {
        let stack = PathStack::new(vec![Segment::new(Namespace::custom("+x").unwrap(), "y")]);
        let path = create_path(&stack, &Shortcuts::new());
        assert_eq!(path, "/+++x++y");
        assert_eq!(parse_path(&path, &Shortcuts::new()), stack);
    }
}
