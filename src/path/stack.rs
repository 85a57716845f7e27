//! Persistent, front-consumable segment sequence.
//!
//! Traversal only ever removes segments from the front. Instead of popping
//! from a shared mutable stack and restoring it on failure, every step
//! produces a new [`PathStack`] that views a shorter suffix of the same
//! shared buffer. The original value is never touched, so a failed attempt
//! has nothing to undo.
//!
//! # Example
//!
//! ```
//! use pathwalk::path::{PathStack, Segment};
//!
//! let stack = PathStack::new(vec![Segment::model("a"), Segment::view("b")]);
//! let (head, rest) = stack.split_first().unwrap();
//!
//! assert_eq!(head, &Segment::model("a"));
//! assert_eq!(rest.len(), 1);
//! assert_eq!(stack.len(), 2); // unchanged
//! ```

use std::fmt;
use std::sync::Arc;

use super::Segment;

/// Ordered sequence of segments, in left-to-right path order.
///
/// Cloning is cheap (one reference count bump).
#[derive(Clone)]
pub struct PathStack {
    segments: Arc<[Segment]>,
    start: usize,
}

impl PathStack {
    /// Create a stack from segments in path order.
    pub fn new(segments: Vec<Segment>) -> Self {
        Self {
            segments: segments.into(),
            start: 0,
        }
    }

    /// The empty stack.
    pub fn empty() -> Self {
        Self::new(Vec::new())
    }

    /// Number of remaining segments.
    #[inline]
    pub fn len(&self) -> usize {
        self.segments.len() - self.start
    }

    /// Whether no segment remains.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Remaining segments as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[Segment] {
        &self.segments[self.start..]
    }

    /// The front segment, if any.
    #[inline]
    pub fn first(&self) -> Option<&Segment> {
        self.as_slice().first()
    }

    /// Split off the front segment.
    ///
    /// Returns the front segment and the stack that remains after it.
    pub fn split_first(&self) -> Option<(&Segment, PathStack)> {
        let head = self.first()?;
        Some((head, self.skip(1)))
    }

    /// The stack after removing up to `n` segments from the front.
    pub fn skip(&self, n: usize) -> PathStack {
        Self {
            segments: Arc::clone(&self.segments),
            start: self.start + n.min(self.len()),
        }
    }

    /// Iterate over remaining segments.
    pub fn iter(&self) -> std::slice::Iter<'_, Segment> {
        self.as_slice().iter()
    }

    /// Copy remaining segments into a vector.
    pub fn to_vec(&self) -> Vec<Segment> {
        self.as_slice().to_vec()
    }
}

impl Default for PathStack {
    fn default() -> Self {
        Self::empty()
    }
}

impl PartialEq for PathStack {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl Eq for PathStack {}

impl fmt::Debug for PathStack {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.as_slice()).finish()
    }
}

impl From<Vec<Segment>> for PathStack {
    fn from(segments: Vec<Segment>) -> Self {
        Self::new(segments)
    }
}

impl FromIterator<Segment> for PathStack {
    fn from_iter<I: IntoIterator<Item = Segment>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a PathStack {
    type Item = &'a Segment;
    type IntoIter = std::slice::Iter<'a, Segment>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
