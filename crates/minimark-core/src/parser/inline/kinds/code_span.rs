use crate::parser::inline::cursor::Cursor;

/// Code span inline type with owned delimiter constant.
///
/// Code spans are raw zones: their content is taken verbatim, no other
/// inline parsing happens inside them.
pub struct CodeSpan;

impl CodeSpan {
    /// The backtick character that delimits code spans.
    pub const TICK: u8 = b'`';

    /// Scans the content of a code span whose opening backtick was just
    /// consumed, and the closing backtick after it.
    ///
    /// Returns `None` (cursor restored) when there is no closing backtick or
    /// the span would be empty.
    pub fn scan<'a>(cur: &mut Cursor<'a>) -> Option<&'a str> {
        let saved = cur.clone();
        let start = cur.i;

        cur.bump_until(|c| c.peek() == Some(Self::TICK));
        if cur.eof() || cur.i == start {
            *cur = saved;
            return None;
        }
        let code = cur.slice_from(start);
        cur.bump(); // closing `
        Some(code)
    }
}
