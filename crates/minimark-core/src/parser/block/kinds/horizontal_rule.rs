/// Horizontal rule: three or more `-` and nothing else but trailing space.
pub struct HorizontalRule;

impl HorizontalRule {
    pub const MARKER: u8 = b'-';
    pub const MIN_LEN: usize = 3;

    pub fn matches(s: &str) -> bool {
        let b = s.as_bytes();
        let run = b.iter().take_while(|&&c| c == Self::MARKER).count();
        run >= Self::MIN_LEN && b[run..].iter().all(|c| c.is_ascii_whitespace())
    }
}
