//! # Inline Kinds
//!
//! Inline constructs that need a speculative scan, each owning its
//! delimiters and the scan itself.
//!
//! - **`CodeSpan`**: `TICK = b'\`'`, raw zone
//! - **`Link`**: `MIDDLE = b"]("`, `CLOSE = b')'`

pub mod code_span;
pub mod link;

pub use code_span::CodeSpan;
pub use link::Link;
