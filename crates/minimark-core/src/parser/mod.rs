//! # Parsing
//!
//! Source text is parsed one line at a time:
//!
//! ```text
//! line → LineClassifier → BlockTracker (quote / list / code block state)
//!      → tokenize (flat token stack) → resolve (nested nodes) → container
//! ```
//!
//! The `block` module decides which container is open for each line, the
//! `inline` module turns what is left of the line into tokens, and
//! `resolve` matches paired marks into nodes. Parsing never fails: input
//! that does not form a construct is kept as literal text.

pub(crate) mod block;
pub(crate) mod inline;
pub(crate) mod resolve;

use crate::ast::{Node, NodeKind, reduce_text};
use crate::features::{Feature, FeatureSet};

use block::kinds::CodeFence;
use block::{BlockOpen, BlockTracker, LineClassifier};

/// Parses Markdown with a fixed [`FeatureSet`].
///
/// A `Parser` holds no per-parse state, so one value can parse any number of
/// inputs, from any number of threads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Parser {
    features: FeatureSet,
}

impl Parser {
    pub fn new(features: FeatureSet) -> Self {
        Self { features }
    }

    pub fn features(&self) -> FeatureSet {
        self.features
    }

    /// Parses `input` into a [`NodeKind::Document`] tree.
    pub fn parse(&self, input: &str) -> Node {
        let classifier = LineClassifier::new(self.features);
        let mut blocks = BlockTracker::new();

        let mut lines = input
            .split('\n')
            .map(|line| line.strip_suffix('\r').unwrap_or(line))
            .peekable();
        while let Some(line) = lines.next() {
            let is_last = lines.peek().is_none();
            self.parse_line(line, is_last, &classifier, &mut blocks);
        }
        blocks.finish()
    }

    fn parse_line(
        &self,
        line: &str,
        is_last: bool,
        classifier: &LineClassifier,
        blocks: &mut BlockTracker,
    ) {
        let features = self.features;

        if features.contains(Feature::CodeBlock) && CodeFence::is_fence(line) {
            blocks.toggle_code_block();
            return;
        }
        if blocks.in_code_block() {
            blocks.push_code_line(line, is_last);
            return;
        }

        let line = line.trim();
        if line.is_empty() {
            blocks.blank_line(features.contains(Feature::AllowMultipleLineBreaks));
            return;
        }
        blocks.content_line();

        let class = classifier.classify(line);
        blocks.enter_quote(class.quote_level);

        let mut stack = Vec::new();
        match class.opener {
            Some(BlockOpen::ListItem { ordered }) => {
                blocks.open_list(ordered);
                stack.push(NodeKind::ListItem);
            }
            Some(BlockOpen::Heading { level }) => {
                blocks.close_list();
                stack.push(NodeKind::Heading(level));
            }
            Some(BlockOpen::HorizontalRule) => {
                blocks.close_list();
                stack.push(NodeKind::HorizontalRule);
            }
            None => blocks.close_list(),
        }

        inline::tokenize(class.remainder, features, &mut stack);
        if !is_last {
            stack.push(NodeKind::Text("\n".to_string()));
        }

        let stack = reduce_text(stack);
        let nodes = resolve::resolve(&stack, blocks.list_mut());
        blocks.append(nodes);
    }
}

/// Parses `input` with the [`FeatureSet::standard`] preset.
pub fn parse(input: &str) -> Node {
    Parser::default().parse(input)
}

/// Parses `input` with the given features.
pub fn parse_with(input: &str, features: FeatureSet) -> Node {
    Parser::new(features).parse(input)
}
