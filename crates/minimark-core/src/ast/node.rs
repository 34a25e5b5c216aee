use super::kind::NodeKind;

/// A node in the parsed tree.
///
/// Each node owns its children outright; the tree has no sharing and no
/// back-references. After [`crate::parse`] returns, nodes are only read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    kind: NodeKind,
    children: Vec<Node>,
}

impl Node {
    pub fn new(kind: NodeKind) -> Self {
        Self {
            kind,
            children: Vec::new(),
        }
    }

    pub fn with_children(kind: NodeKind, children: Vec<Node>) -> Self {
        Self { kind, children }
    }

    pub fn text(s: impl Into<String>) -> Self {
        Self::new(NodeKind::Text(s.into()))
    }

    pub fn kind(&self) -> &NodeKind {
        &self.kind
    }

    /// Children in document order.
    pub fn children(&self) -> &[Node] {
        &self.children
    }

    /// The first child, if any.
    pub fn child(&self) -> Option<&Node> {
        self.children.first()
    }

    /// The string payload of a text node.
    pub fn as_str(&self) -> Option<&str> {
        match &self.kind {
            NodeKind::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn is_text(&self) -> bool {
        self.kind.is_text()
    }

    pub(crate) fn push(&mut self, child: Node) {
        self.children.push(child);
    }

    pub(crate) fn extend(&mut self, children: impl IntoIterator<Item = Node>) {
        self.children.extend(children);
    }

    pub(crate) fn last_child(&self) -> Option<&Node> {
        self.children.last()
    }

    pub(crate) fn pop(&mut self) -> Option<Node> {
        self.children.pop()
    }

    pub(crate) fn into_children(self) -> Vec<Node> {
        self.children
    }

    /// Calls `f` for this node and then each descendant, depth first.
    pub fn walk<F: FnMut(&Node)>(&self, f: &mut F) {
        f(self);
        for child in &self.children {
            child.walk(f);
        }
    }

    /// Pre-order iterator over this node and all of its descendants.
    pub fn descendants(&self) -> Descendants<'_> {
        Descendants { stack: vec![self] }
    }

    /// Indented one-line-per-node dump of the tree, for debugging.
    ///
    /// Not a stable format.
    pub fn pretty(&self) -> String {
        let mut lines = Vec::new();
        self.pretty_into(0, &mut lines);
        lines.join("\n")
    }

    fn pretty_into(&self, depth: usize, lines: &mut Vec<String>) {
        lines.push(format!("{}{:?}", "  ".repeat(depth), self.kind));
        for child in &self.children {
            child.pretty_into(depth + 1, lines);
        }
    }

    /// Returns the same tree with adjacent text siblings merged at every level.
    #[must_use]
    pub fn merged(self) -> Node {
        Node {
            kind: self.kind,
            children: merge_text(self.children),
        }
    }
}

/// Merges adjacent text nodes, recursing into every non-text node.
pub fn merge_text(nodes: Vec<Node>) -> Vec<Node> {
    let mut out = Vec::with_capacity(nodes.len());
    let mut join: Option<String> = None;

    for node in nodes {
        match node.kind {
            NodeKind::Text(s) => join.get_or_insert_with(String::new).push_str(&s),
            kind => {
                if let Some(s) = join.take() {
                    out.push(Node::text(s));
                }
                out.push(Node {
                    kind,
                    children: merge_text(node.children),
                });
            }
        }
    }
    if let Some(s) = join {
        out.push(Node::text(s));
    }
    out
}

/// Iterator returned by [`Node::descendants`].
pub struct Descendants<'a> {
    stack: Vec<&'a Node>,
}

impl<'a> Iterator for Descendants<'a> {
    type Item = &'a Node;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.stack.extend(node.children.iter().rev());
        Some(node)
    }
}
