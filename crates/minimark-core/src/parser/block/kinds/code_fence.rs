/// Fenced code block delimiter knowledge.
///
/// A fence is a line consisting of exactly [`CodeFence::TOKEN`]; there is no
/// info string and no tilde form.
pub struct CodeFence;

impl CodeFence {
    pub const TOKEN: &'static str = "```";

    pub fn is_fence(line: &str) -> bool {
        line == Self::TOKEN
    }
}
