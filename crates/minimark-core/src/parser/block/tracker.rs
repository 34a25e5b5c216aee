use crate::ast::{Node, NodeKind, merge_text};

/// Per-parse block state: which containers are open and where new
/// top-level content goes.
///
/// At most one quote, one list and one code block are open at a time.
/// Content lands in the open code block, else the open quote, else the
/// document. Lists are attached to their enclosing quote or document only
/// when they close.
pub struct BlockTracker {
    document: Node,
    quote: Option<Node>,
    list: Option<Node>,
    code_block: Option<Node>,
    was_blank: bool,
}

impl BlockTracker {
    pub fn new() -> Self {
        Self {
            document: Node::new(NodeKind::Document),
            quote: None,
            list: None,
            code_block: None,
            was_blank: false,
        }
    }

    /// Consumes the tracker, closing everything still open.
    pub fn finish(mut self) -> Node {
        if self.code_block.is_some() {
            log::trace!("closing unterminated code block at end of input");
            self.close_code_block();
        }
        self.close_list();
        self.close_quote();

        // Every line but the last ends with a break; drop the one left
        // dangling after the final line.
        if self.document.last_child().and_then(Node::as_str) == Some("\n") {
            self.document.pop();
        }
        self.document.merged()
    }

    pub fn in_code_block(&self) -> bool {
        self.code_block.is_some()
    }

    /// Handles a fence line: opens a code block or closes the open one.
    pub fn toggle_code_block(&mut self) {
        self.was_blank = false;
        if self.code_block.is_some() {
            self.close_code_block();
        } else {
            self.close_list();
            log::trace!("opening code block");
            self.code_block = Some(Node::new(NodeKind::CodeBlock));
        }
    }

    /// Adds one verbatim source line to the open code block.
    pub fn push_code_line(&mut self, line: &str, is_last: bool) {
        self.was_blank = false;
        if let Some(block) = self.code_block.as_mut() {
            if !line.is_empty() {
                block.push(Node::text(line));
            }
            if !is_last {
                block.push(Node::text("\n"));
            }
        }
    }

    /// A blank line ends lists and quotes and emits a single break.
    ///
    /// Consecutive blank lines collapse into one break unless
    /// `keep_every_break` is set.
    pub fn blank_line(&mut self, keep_every_break: bool) {
        self.close_list();
        self.close_quote();
        if !self.was_blank || keep_every_break {
            self.append(vec![Node::text("\n")]);
        }
        self.was_blank = true;
    }

    /// Marks the start of a line with content.
    pub fn content_line(&mut self) {
        self.was_blank = false;
    }

    /// Brings the quote state in line with the current line's prefix.
    ///
    /// `level` 0 means the line is not quoted and closes any open quote. A
    /// different level than the open quote closes it and opens a new one.
    pub fn enter_quote(&mut self, level: usize) {
        let open_level = match self.quote.as_ref().map(Node::kind) {
            Some(NodeKind::BlockQuote(open)) => Some(*open),
            _ => None,
        };
        if open_level == Some(level) {
            return;
        }
        if open_level.is_some() {
            self.close_list();
            self.close_quote();
        }
        if level > 0 {
            // A list open outside the quote belongs outside it.
            self.close_list();
            log::trace!("opening block quote at level {level}");
            self.quote = Some(Node::new(NodeKind::BlockQuote(level)));
        }
    }

    /// Makes sure a list of the given kind is open.
    pub fn open_list(&mut self, ordered: bool) {
        let open_ordered = match self.list.as_ref().map(Node::kind) {
            Some(NodeKind::List { ordered }) => Some(*ordered),
            _ => None,
        };
        if open_ordered == Some(ordered) {
            return;
        }
        self.close_list();
        log::trace!("opening list (ordered: {ordered})");
        self.list = Some(Node::new(NodeKind::List { ordered }));
    }

    pub fn close_list(&mut self) {
        if let Some(list) = self.list.take() {
            log::trace!("closing list with {} items", list.children().len());
            self.container().push(list);
        }
    }

    /// The open list, for the resolver to attach items to.
    pub fn list_mut(&mut self) -> Option<&mut Node> {
        self.list.as_mut()
    }

    /// Appends resolved top-level nodes to the innermost open container.
    pub fn append(&mut self, nodes: Vec<Node>) {
        if nodes.is_empty() {
            return;
        }
        match self.code_block.as_mut() {
            Some(block) => block.extend(nodes),
            None => self.container().extend(nodes),
        }
    }

    fn close_quote(&mut self) {
        if let Some(quote) = self.quote.take() {
            log::trace!("closing block quote");
            self.document.push(quote);
        }
    }

    /// Closes the code block, flattening its children into plain text.
    fn close_code_block(&mut self) {
        if let Some(block) = self.code_block.take() {
            log::trace!("closing code block");
            let lines = block
                .into_children()
                .into_iter()
                .filter_map(|n| n.kind().as_text().map(Node::new))
                .collect();
            let block = Node::with_children(NodeKind::CodeBlock, merge_text(lines));
            self.container().push(block);
        }
    }

    /// The open quote, or the document.
    fn container(&mut self) -> &mut Node {
        self.quote.as_mut().unwrap_or(&mut self.document)
    }
}

impl Default for BlockTracker {
    fn default() -> Self {
        Self::new()
    }
}
