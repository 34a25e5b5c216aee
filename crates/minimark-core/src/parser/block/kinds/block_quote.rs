/// Blockquote prefix knowledge.
pub struct BlockQuote;

impl BlockQuote {
    /// The blockquote prefix character.
    pub const PREFIX: char = '>';

    /// Strips blockquote prefixes from a line, returning (level, byte_offset).
    ///
    /// Handles `> text`, `>> nested` and `> > spaced nested`. A level of 0
    /// means the line is not quoted.
    pub fn strip_prefixes(s: &str) -> (usize, usize) {
        let b = s.as_bytes();
        let mut i = 0usize;
        let mut level = 0usize;

        loop {
            while i < b.len() && b[i] == b' ' {
                i += 1;
            }
            if i < b.len() && b[i] == (Self::PREFIX as u8) {
                level += 1;
                i += 1;
                if i < b.len() && b[i] == b' ' {
                    i += 1;
                }
            } else {
                break;
            }
        }
        // Only whitespace was skipped; that is not a prefix.
        if level == 0 {
            return (0, 0);
        }
        (level, i)
    }
}
