//! # Inline Parsing
//!
//! Turns the part of a line left after block prefixes into a flat token
//! stack for the resolver.
//!
//! ## Modules
//!
//! - **`lexer`**: Logos lexer splitting a line into text runs and delimiters
//! - **`marks`**: delimiter-run grouping and `node_kind_for` classification
//! - **`cursor`**: byte cursor with save/restore for speculative scans
//! - **`kinds`**: constructs scanned speculatively (CodeSpan, Link)
//! - **`tokenizer`**: `tokenize()` tying the above together
//!
//! ## Raw Zones
//!
//! Code span content and link title/target are taken verbatim: `` `*x*` ``
//! is a code span holding `*x*`, not emphasis.

pub mod cursor;
pub mod kinds;
pub mod lexer;
pub mod marks;
pub mod tokenizer;

pub use tokenizer::tokenize;
