//! # Block Parsing
//!
//! Line-oriented block handling in two steps, mirrored by the modules here.
//!
//! 1. **Line Classification** (`classify`): each trimmed line is classified
//!    into a `LineClass` holding only local facts (quote level, block opener,
//!    remainder for inline tokenizing).
//!
//! 2. **Block Tracking** (`tracker`): a `BlockTracker` holds the open quote,
//!    list and code block, and decides where each line's nodes are appended.
//!
//! ## Modules
//!
//! - **`kinds`**: block constructs with owned delimiters (BlockQuote, CodeFence, ...)
//! - **`classify`**: `LineClassifier` produces a `LineClass` per line
//! - **`tracker`**: `BlockTracker` container state machine
//!
//! ## Key Invariants
//!
//! - Code blocks are raw zones: no classification or inline parsing inside
//! - A list is only ever attached to a quote or the document, never nested
//! - Malformed markers never fail; they are left for the inline tokenizer

pub mod classify;
pub mod kinds;
pub mod tracker;

pub use classify::{BlockOpen, LineClassifier};
pub use tracker::BlockTracker;
