//! Raw lexemes for one line of inline content.
//!
//! The [Logos] lexer only splits the line into plain-text runs and single
//! delimiter characters; grouping delimiters into marks and the speculative
//! link and code scans happen in the tokenizer.
//!
//! [Logos]: https://docs.rs/logos

use logos::Logos;

#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lexeme {
    /// Anything that is not a delimiter
    #[regex(r"[^*_~`\[\\]+")]
    Text,

    #[token("*")]
    Star,

    #[token("_")]
    Underscore,

    #[token("~")]
    Tilde,

    #[token("`")]
    Backtick,

    #[token("[")]
    LBracket,

    /// Backslash plus the character it escapes
    #[regex(r"\\.")]
    Escape,

    /// A backslash with nothing after it
    #[token("\\")]
    Backslash,
}
