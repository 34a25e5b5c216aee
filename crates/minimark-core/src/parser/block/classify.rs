use crate::features::{Feature, FeatureSet};

use super::kinds::{BlockQuote, Heading, HorizontalRule, ListMarker};

/// A block construct recognised at the start of a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockOpen {
    Heading { level: usize },
    HorizontalRule,
    ListItem { ordered: bool },
}

/// Classification of a single trimmed line containing only local facts.
///
/// Whether a quote or list is already open is the tracker's business; this
/// only says what the line itself starts with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineClass<'a> {
    /// Number of `>` prefixes, 0 when the line is not quoted.
    pub quote_level: usize,
    /// Block opener found after the quote prefix, if any.
    pub opener: Option<BlockOpen>,
    /// What is left for the inline tokenizer.
    pub remainder: &'a str,
}

/// Classifies lines, honouring which block features are enabled.
pub struct LineClassifier {
    features: FeatureSet,
}

impl LineClassifier {
    pub fn new(features: FeatureSet) -> Self {
        Self { features }
    }

    /// Classifies an already trimmed, non-blank line.
    pub fn classify<'a>(&self, line: &'a str) -> LineClass<'a> {
        let mut rest = line;

        let mut quote_level = 0;
        if self.features.contains(Feature::BlockQuote) {
            let (level, idx) = BlockQuote::strip_prefixes(rest);
            quote_level = level;
            rest = &rest[idx..];
        }

        let (opener, idx) = self.opener(rest);
        LineClass {
            quote_level,
            opener,
            remainder: &rest[idx..],
        }
    }

    /// Precedence: heading, rule, unordered item, ordered item.
    fn opener(&self, s: &str) -> (Option<BlockOpen>, usize) {
        let f = self.features;
        if f.contains(Feature::Headings)
            && let Some((level, idx)) = Heading::scan(s)
        {
            return (Some(BlockOpen::Heading { level }), idx);
        }
        if f.contains(Feature::HorizontalRule) && HorizontalRule::matches(s) {
            return (Some(BlockOpen::HorizontalRule), s.len());
        }
        if f.contains(Feature::UnorderedList)
            && let Some(idx) = ListMarker::unordered(s)
        {
            return (Some(BlockOpen::ListItem { ordered: false }), idx);
        }
        if f.contains(Feature::OrderedList)
            && let Some(idx) = ListMarker::ordered(s)
        {
            return (Some(BlockOpen::ListItem { ordered: true }), idx);
        }
        (None, 0)
    }
}
