//! Tree resolution: turns one line's flat token stack into nested nodes.
//!
//! Paired marks are matched by looking forward for an identical token. A
//! strong mark with no partner may still pair with an emphasis of the same
//! character (and the other way round); the leftover character becomes
//! literal text. Anything still unmatched degrades to its literal text.

use crate::ast::{Node, NodeKind};

/// Resolves `stack` into nodes. List items are pushed onto `list` rather
/// than returned.
///
/// # Panics
///
/// If the stack holds a [`NodeKind::ListItem`] and `list` is `None`. The
/// block tracker always opens a list before a list item is tokenized.
pub fn resolve(stack: &[NodeKind], list: Option<&mut Node>) -> Vec<Node> {
    let mut resolver = Resolver {
        stack,
        cursor: 0,
        list,
    };
    resolver.nodes(stack.len())
}

struct Resolver<'s, 'l> {
    stack: &'s [NodeKind],
    cursor: usize,
    list: Option<&'l mut Node>,
}

impl Resolver<'_, '_> {
    /// Resolves tokens from the cursor up to `end` (exclusive).
    fn nodes(&mut self, end: usize) -> Vec<Node> {
        let stack = self.stack;
        let mut out = Vec::new();

        while self.cursor < end {
            let kind = &stack[self.cursor];
            self.cursor += 1;

            match kind {
                NodeKind::Heading(_) => {
                    let children = self.nodes(end);
                    out.push(Node::with_children(kind.clone(), children));
                }
                NodeKind::ListItem => {
                    let children = self.nodes(end);
                    let item = Node::with_children(NodeKind::ListItem, children);
                    match self.list.as_deref_mut() {
                        Some(list) => list.push(item),
                        None => unreachable!("list item resolved without an open list"),
                    }
                }
                NodeKind::Strong(marker) => out.extend(self.strong(kind, marker, end)),
                NodeKind::Emphasis(marker) => out.extend(self.emphasis(kind, marker, end)),
                NodeKind::Strike(_) | NodeKind::InlineCode | NodeKind::CodeBlock => {
                    out.push(self.paired(kind, end));
                }
                NodeKind::Text(_)
                | NodeKind::HorizontalRule
                | NodeKind::Link { .. }
                | NodeKind::Document
                | NodeKind::BlockQuote(_)
                | NodeKind::List { .. } => out.push(Node::new(kind.clone())),
            }
        }
        out
    }

    fn strong(&mut self, kind: &NodeKind, marker: &str, end: usize) -> Vec<Node> {
        if let Some(close) = self.next_index_of(kind, end) {
            return vec![self.wrap(kind, close)];
        }
        let (single, excess) = split_first(marker);
        let emphasis = NodeKind::Emphasis(single.to_string());
        match self.next_index_of(&emphasis, end) {
            Some(close) => vec![Node::text(excess), self.wrap(&emphasis, close)],
            None => vec![self.degrade(kind)],
        }
    }

    fn emphasis(&mut self, kind: &NodeKind, marker: &str, end: usize) -> Vec<Node> {
        if let Some(close) = self.next_index_of(kind, end) {
            return vec![self.wrap(kind, close)];
        }
        let strong = NodeKind::Strong(marker.repeat(2));
        match self.next_index_of(&strong, end) {
            Some(close) => {
                let wrapped = self.wrap(kind, close);
                vec![wrapped, Node::text(marker)]
            }
            None => vec![self.degrade(kind)],
        }
    }

    fn paired(&mut self, kind: &NodeKind, end: usize) -> Node {
        debug_assert!(kind.is_paired());
        match self.next_index_of(kind, end) {
            Some(close) => self.wrap(kind, close),
            None => self.degrade(kind),
        }
    }

    /// Builds `kind` around everything up to `close`, then steps past the
    /// closing token.
    fn wrap(&mut self, kind: &NodeKind, close: usize) -> Node {
        let children = self.nodes(close);
        self.cursor = close + 1;
        Node::with_children(kind.clone(), children)
    }

    fn degrade(&self, kind: &NodeKind) -> Node {
        log::debug!("unmatched {kind:?}, keeping it as text");
        Node::new(kind.as_text().unwrap_or_else(|| kind.clone()))
    }

    fn next_index_of(&self, kind: &NodeKind, end: usize) -> Option<usize> {
        self.stack[self.cursor..end]
            .iter()
            .position(|k| k == kind)
            .map(|i| self.cursor + i)
    }
}

/// Splits a marker into its first character and the rest.
fn split_first(marker: &str) -> (&str, &str) {
    let at = marker.chars().next().map_or(0, char::len_utf8);
    marker.split_at(at)
}
