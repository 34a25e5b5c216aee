//! # minimark-core
//!
//! A parser for a small, feature-gated subset of Markdown. Input text becomes
//! a tree of [`Node`]s rooted at a [`NodeKind::Document`]; renderers walk the
//! tree and never see the source again.
//!
//! ```
//! use minimark_core::{NodeKind, parse};
//!
//! let doc = parse("**Bold**");
//! let strong = doc.child().unwrap();
//! assert_eq!(strong.kind(), &NodeKind::Strong("**".to_string()));
//! assert_eq!(strong.child().and_then(|n| n.as_str()), Some("Bold"));
//! ```
//!
//! ## Supported Syntax
//!
//! Always on:
//!
//! - `*emphasis*` / `_emphasis_`, `**strong**` / `__strong__`, `~~strike~~`
//! - `[title](target)` links
//! - `\` escapes for any character
//!
//! Gated by a [`Feature`]:
//!
//! - `> quotes` (nested as `>>`), `# headings`, `---` rules
//! - `- item` / `* item` and `1. item` lists
//! - `` `inline code` `` and ```` ``` ```` fenced code blocks
//! - keeping every blank line instead of collapsing runs
//!
//! A disabled feature's syntax is plain text: with [`Feature::Headings`]
//! off, `# Title` parses as the text `"# Title"`.
//!
//! ## Error Handling
//!
//! There is none to do. [`parse`] is total: unmatched marks, broken links
//! and half-written fences all come back as literal text.
//!
//! ## Module Structure
//!
//! ```text
//! minimark-core/
//! ├── lib.rs          # This file - public API
//! ├── features.rs     # Feature, FeatureSet
//! ├── ast/            # NodeKind, Node, text merging, traversal
//! └── parser/
//!     ├── block/      # LineClassifier, BlockTracker, block kinds
//!     ├── inline/     # Logos lexer, mark runs, tokenizer, inline kinds
//!     └── resolve.rs  # token stack → nested nodes
//! ```

pub mod ast;
pub mod features;
pub mod parser;

pub use ast::{Node, NodeKind};
pub use features::{Feature, FeatureSet, UnknownFeature};
pub use parser::{Parser, parse, parse_with};
