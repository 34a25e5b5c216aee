/// A byte cursor over the rest of a line, for speculative scans.
///
/// Scans clone the cursor before they start and restore the clone when the
/// construct turns out not to be there.
#[derive(Clone)]
pub struct Cursor<'a> {
    /// The string being scanned.
    pub s: &'a str,
    /// Current index into `s`.
    pub i: usize,
}

impl<'a> Cursor<'a> {
    pub fn new(s: &'a str) -> Self {
        Self { s, i: 0 }
    }

    pub fn eof(&self) -> bool {
        self.i >= self.s.len()
    }

    pub fn peek(&self) -> Option<u8> {
        self.s.as_bytes().get(self.i).copied()
    }

    pub fn starts_with(&self, pat: &[u8]) -> bool {
        self.s.as_bytes()[self.i.min(self.s.len())..].starts_with(pat)
    }

    pub fn bump(&mut self) -> Option<u8> {
        let b = self.peek()?;
        self.i += 1;
        Some(b)
    }

    pub fn bump_n(&mut self, n: usize) {
        self.i += n;
    }

    /// Advances until `pred` holds at the current position or input ends.
    pub fn bump_until(&mut self, pred: impl Fn(&Self) -> bool) {
        while !self.eof() && !pred(self) {
            self.bump();
        }
    }

    /// Text between `start` and the current position.
    ///
    /// Both ends must sit on char boundaries; scans only stop in front of
    /// ASCII delimiters, which guarantees that.
    pub fn slice_from(&self, start: usize) -> &'a str {
        &self.s[start..self.i]
    }
}
