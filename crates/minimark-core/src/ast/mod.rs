//! # Syntax Tree
//!
//! The typed tree handed to renderers: a [`Node`] owns a [`NodeKind`] and its
//! children. Renderers only read it, through [`Node::kind`],
//! [`Node::children`], and the pre-order traversals [`Node::walk`] and
//! [`Node::descendants`].
//!
//! Text merging lives here too. The parser builds trees with many small
//! text fragments; [`merge_text`] (and [`reduce_text`] for flat token
//! stacks) collapse adjacent fragments so the final tree never has two text
//! siblings side by side.

pub mod kind;
pub mod node;

pub use kind::{NodeKind, reduce_text};
pub use node::{Descendants, Node, merge_text};
