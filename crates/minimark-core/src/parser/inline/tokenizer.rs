use logos::Logos;

use crate::ast::NodeKind;
use crate::features::{Feature, FeatureSet};

use super::cursor::Cursor;
use super::kinds::{CodeSpan, Link};
use super::lexer::Lexeme;
use super::marks::MarkRun;

/// Tokenizes the inline part of a line, appending to `out`.
///
/// Text runs become [`NodeKind::Text`]; delimiter runs become mark tokens
/// (see [`super::marks::node_kind_for`]). Links and code spans are scanned
/// speculatively from the `[` or backtick; when the scan fails the
/// delimiter is kept as literal text and lexing resumes right after it.
pub fn tokenize(line: &str, features: FeatureSet, out: &mut Vec<NodeKind>) {
    let inline_code = features.contains(Feature::InlineCode);
    let mut lexer = Lexeme::lexer(line);
    let mut run = MarkRun::default();

    while let Some(result) = lexer.next() {
        let slice = lexer.slice();
        match result {
            Ok(Lexeme::Star | Lexeme::Underscore | Lexeme::Tilde) => {
                for c in slice.chars() {
                    run.push(c, out);
                }
            }
            Ok(Lexeme::Backtick) if inline_code => {
                run.flush(out);
                let mut cur = Cursor::new(lexer.remainder());
                match CodeSpan::scan(&mut cur) {
                    Some(code) => {
                        out.push(NodeKind::InlineCode);
                        out.push(NodeKind::Text(code.to_string()));
                        out.push(NodeKind::InlineCode);
                        lexer.bump(cur.i);
                    }
                    None => out.push(NodeKind::Text(slice.to_string())),
                }
            }
            Ok(Lexeme::LBracket) => {
                run.flush(out);
                let mut cur = Cursor::new(lexer.remainder());
                match Link::scan(&mut cur) {
                    Some(link) => {
                        out.push(link);
                        lexer.bump(cur.i);
                    }
                    None => out.push(NodeKind::Text(slice.to_string())),
                }
            }
            Ok(Lexeme::Escape) => {
                run.flush(out);
                // The backslash is one byte; keep only what it escapes.
                out.push(NodeKind::Text(slice[1..].to_string()));
            }
            Ok(Lexeme::Text | Lexeme::Backslash | Lexeme::Backtick) | Err(()) => {
                run.flush(out);
                out.push(NodeKind::Text(slice.to_string()));
            }
        }
    }
    run.flush(out);
}
