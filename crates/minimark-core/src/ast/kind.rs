/// The type of a node in the parsed tree.
///
/// Payload-carrying variants keep the exact marker that produced them, so a
/// node can always fall back to the literal text it came from (see
/// [`NodeKind::as_text`]).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum NodeKind {
    /// Root of every parse; never appears anywhere else.
    Document,
    /// Plain text, styled by whatever ancestors it has.
    Text(String),
    /// Heading; the level is the number of `#` consumed.
    Heading(usize),
    /// Block quote; the level is the number of `>` consumed.
    BlockQuote(usize),
    /// A list whose children are all [`NodeKind::ListItem`].
    List { ordered: bool },
    ListItem,
    /// Inline code; wraps a single verbatim text child.
    InlineCode,
    HorizontalRule,
    /// Fenced code block; children are unstyled text.
    CodeBlock,
    /// Italics, marker `*` or `_`.
    Emphasis(String),
    /// Bold, marker `**` or `__`.
    Strong(String),
    /// Strikethrough, marker of two or more `~`.
    Strike(String),
    Link { title: String, target: String },
}

impl NodeKind {
    /// The literal text this kind degrades to when it cannot be matched.
    ///
    /// Structural kinds have no textual form and return `None`.
    pub fn as_text(&self) -> Option<NodeKind> {
        match self {
            NodeKind::Text(_) => Some(self.clone()),
            NodeKind::Heading(level) => Some(NodeKind::Text("#".repeat(*level))),
            NodeKind::Emphasis(marker) | NodeKind::Strong(marker) | NodeKind::Strike(marker) => {
                Some(NodeKind::Text(marker.clone()))
            }
            NodeKind::InlineCode => Some(NodeKind::Text("`".to_string())),
            NodeKind::Document
            | NodeKind::BlockQuote(_)
            | NodeKind::List { .. }
            | NodeKind::ListItem
            | NodeKind::HorizontalRule
            | NodeKind::CodeBlock
            | NodeKind::Link { .. } => None,
        }
    }

    pub fn is_text(&self) -> bool {
        matches!(self, NodeKind::Text(_))
    }

    /// Marks that need a matching closing token on the same line.
    pub fn is_paired(&self) -> bool {
        matches!(
            self,
            NodeKind::Emphasis(_)
                | NodeKind::Strong(_)
                | NodeKind::Strike(_)
                | NodeKind::InlineCode
                | NodeKind::CodeBlock
        )
    }
}

/// Merges runs of adjacent [`NodeKind::Text`] into one, leaving everything
/// else in place.
pub fn reduce_text(kinds: Vec<NodeKind>) -> Vec<NodeKind> {
    let mut out = Vec::with_capacity(kinds.len());
    let mut join: Option<String> = None;

    for kind in kinds {
        match kind {
            NodeKind::Text(s) => join.get_or_insert_with(String::new).push_str(&s),
            other => {
                if let Some(s) = join.take() {
                    out.push(NodeKind::Text(s));
                }
                out.push(other);
            }
        }
    }
    if let Some(s) = join {
        out.push(NodeKind::Text(s));
    }
    out
}
