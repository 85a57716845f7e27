//! Path module - segments, the segment stack, and the path codec.
//!
//! Provides:
//! - [`Namespace`] and [`Segment`] - one `(namespace, name)` step
//! - [`PathStack`] - persistent sequence consumed from the front
//! - [`parse_path`] / [`create_path`] - tokenizer and its inverse
//! - [`decode_path`] - percent-decoding of raw request paths

mod codec;
mod decode;
mod segment;
mod stack;

pub use codec::{create_path, parse_path, Shortcuts};
pub use decode::{decode_path, decode_path_bytes};
pub use segment::{CustomNamespace, Namespace, Segment};
pub use stack::PathStack;
