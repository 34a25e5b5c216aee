use crate::ast::NodeKind;

/// Longest run of `*` or `_` grouped into one mark; longer runs split.
pub const MAX_EMPHASIS_RUN: usize = 2;

/// Classifies a delimiter run into the token kind it stands for.
///
/// Anything that is not a recognised mark is literal text.
pub fn node_kind_for(mark: &str) -> NodeKind {
    let Some(first) = mark.chars().next() else {
        return NodeKind::Text(String::new());
    };
    let len = mark.chars().count();
    let repeated = mark.chars().all(|c| c == first);

    match first {
        '*' | '_' if len == 1 => NodeKind::Emphasis(mark.to_string()),
        '*' | '_' if repeated => NodeKind::Strong(mark.to_string()),
        '~' if len > 1 && repeated => NodeKind::Strike(mark.to_string()),
        '`' if len == 1 => NodeKind::InlineCode,
        _ => NodeKind::Text(mark.to_string()),
    }
}

/// A delimiter run being accumulated by the tokenizer.
///
/// Characters of one kind are grouped; `*` and `_` groups are capped at
/// [`MAX_EMPHASIS_RUN`] so `****` becomes two strong marks.
#[derive(Debug, Default)]
pub struct MarkRun(String);

impl MarkRun {
    pub fn push(&mut self, c: char, out: &mut Vec<NodeKind>) {
        match self.0.chars().last() {
            Some(last) if last == c => {
                if c != '~' && self.0.len() == MAX_EMPHASIS_RUN {
                    self.flush(out);
                }
            }
            Some(_) => self.flush(out),
            None => {}
        }
        self.0.push(c);
    }

    /// Emits the pending run, if any, as one token.
    pub fn flush(&mut self, out: &mut Vec<NodeKind>) {
        if !self.0.is_empty() {
            out.push(node_kind_for(&self.0));
            self.0.clear();
        }
    }
}
