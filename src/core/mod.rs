//! Core data model: the simplified, string-valued tree.

pub mod tree;

pub use tree::{Descendants, SimplifiedNode, SimplifiedTree};
