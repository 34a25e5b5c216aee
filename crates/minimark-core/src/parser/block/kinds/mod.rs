//! # Block Kinds
//!
//! Each block construct owns its delimiter constants and the scan that
//! recognises it. The classifier calls these; it never hardcodes `>` or
//! ```` ``` ````.

pub mod block_quote;
pub mod code_fence;
pub mod heading;
pub mod horizontal_rule;
pub mod list_marker;

pub use block_quote::BlockQuote;
pub use code_fence::CodeFence;
pub use heading::Heading;
pub use horizontal_rule::HorizontalRule;
pub use list_marker::ListMarker;
