/// ATX heading marker knowledge.
pub struct Heading;

impl Heading {
    pub const MARKER: u8 = b'#';

    /// Scans a run of `#` and the whitespace after it, returning
    /// (level, byte_offset). `None` when the line does not start with `#`.
    pub fn scan(s: &str) -> Option<(usize, usize)> {
        let b = s.as_bytes();
        let level = b.iter().take_while(|&&c| c == Self::MARKER).count();
        if level == 0 {
            return None;
        }
        let ws = b[level..]
            .iter()
            .take_while(|c| c.is_ascii_whitespace())
            .count();
        Some((level, level + ws))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scan_levels() {
        assert_eq!(Heading::scan("# Title"), Some((1, 2)));
        assert_eq!(Heading::scan("### Title"), Some((3, 4)));
    }

    #[test]
    fn scan_without_space() {
        assert_eq!(Heading::scan("##Title"), Some((2, 2)));
    }

    #[test]
    fn scan_non_heading() {
        assert_eq!(Heading::scan("Title #"), None);
    }
}
