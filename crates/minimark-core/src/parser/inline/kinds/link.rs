use crate::ast::NodeKind;
use crate::parser::inline::cursor::Cursor;

/// Inline link `[title](target)` with owned delimiters.
pub struct Link;

impl Link {
    pub const MIDDLE: &'static [u8; 2] = b"](";
    pub const CLOSE: u8 = b')';

    /// Scans the rest of a link whose `[` was just consumed.
    ///
    /// The title runs up to the first `](` and must not be empty; the target
    /// runs up to the next `)` and may be. Neither is parsed further. On
    /// failure the cursor is restored and `None` returned.
    pub fn scan(cur: &mut Cursor<'_>) -> Option<NodeKind> {
        let saved = cur.clone();

        let title_start = cur.i;
        cur.bump_until(|c| c.starts_with(Self::MIDDLE));
        if cur.eof() || cur.i == title_start {
            *cur = saved;
            return None;
        }
        let title = cur.slice_from(title_start);
        cur.bump_n(Self::MIDDLE.len());

        let target_start = cur.i;
        cur.bump_until(|c| c.peek() == Some(Self::CLOSE));
        if cur.eof() {
            *cur = saved;
            return None;
        }
        let target = cur.slice_from(target_start);
        cur.bump(); // )

        Some(NodeKind::Link {
            title: title.to_string(),
            target: target.to_string(),
        })
    }
}
