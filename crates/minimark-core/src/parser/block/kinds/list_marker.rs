/// List item marker knowledge.
///
/// Unordered items start with `- ` or `* `; ordered items with one or more
/// digits followed by `. `. The number itself is ignored.
pub struct ListMarker;

impl ListMarker {
    pub const UNORDERED: [&'static str; 2] = ["- ", "* "];
    pub const ORDERED_SUFFIX: &'static str = ". ";

    /// Byte length of an unordered marker at the start of `s`.
    pub fn unordered(s: &str) -> Option<usize> {
        Self::UNORDERED
            .iter()
            .find(|m| s.starts_with(**m))
            .map(|m| m.len())
    }

    /// Byte length of an ordered marker at the start of `s`.
    pub fn ordered(s: &str) -> Option<usize> {
        let digits = s.bytes().take_while(u8::is_ascii_digit).count();
        if digits == 0 || !s[digits..].starts_with(Self::ORDERED_SUFFIX) {
            return None;
        }
        Some(digits + Self::ORDERED_SUFFIX.len())
    }
}
