//! # Feature Set
//!
//! Optional syntax classes the parser can be asked to recognise. Everything
//! outside the set is treated as literal text: with [`Feature::Headings`]
//! absent, `# Title` stays the string `"# Title"`.
//!
//! A [`FeatureSet`] is a small `Copy` bitmask. It is never mutated in place;
//! [`FeatureSet::with`] and friends return a new value, so one set can be
//! shared freely between parsers and threads.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// A single optional syntax class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Feature {
    /// `> quoted` lines
    BlockQuote,
    /// `` `code` `` spans
    InlineCode,
    /// Fenced code blocks delimited by a line of exactly ```` ``` ````
    CodeBlock,
    /// `#` headings
    Headings,
    /// `1. item` lists
    OrderedList,
    /// `- item` / `* item` lists
    UnorderedList,
    /// `---` rules
    HorizontalRule,
    /// Keep every blank line instead of collapsing runs into one break
    AllowMultipleLineBreaks,
}

impl Feature {
    /// Every tag, in declaration order.
    pub const ALL: [Feature; 8] = [
        Feature::BlockQuote,
        Feature::InlineCode,
        Feature::CodeBlock,
        Feature::Headings,
        Feature::OrderedList,
        Feature::UnorderedList,
        Feature::HorizontalRule,
        Feature::AllowMultipleLineBreaks,
    ];

    /// The camelCase name used in configuration files.
    pub fn name(self) -> &'static str {
        match self {
            Feature::BlockQuote => "blockQuote",
            Feature::InlineCode => "inlineCode",
            Feature::CodeBlock => "codeBlock",
            Feature::Headings => "headings",
            Feature::OrderedList => "orderedList",
            Feature::UnorderedList => "unorderedList",
            Feature::HorizontalRule => "horizontalRule",
            Feature::AllowMultipleLineBreaks => "allowMultipleLineBreaks",
        }
    }

    fn bit(self) -> u16 {
        1 << (self as u16)
    }
}

impl fmt::Display for Feature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Returned by [`Feature::from_str`] for a name that is not a known tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownFeature(pub String);

impl fmt::Display for UnknownFeature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown feature `{}`", self.0)
    }
}

impl std::error::Error for UnknownFeature {}

impl FromStr for Feature {
    type Err = UnknownFeature;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Feature::ALL
            .into_iter()
            .find(|f| f.name() == s)
            .ok_or_else(|| UnknownFeature(s.to_string()))
    }
}

/// An immutable set of [`Feature`]s.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct FeatureSet(u16);

impl FeatureSet {
    /// No optional syntax at all; only emphasis, strong, strike and links.
    pub const fn empty() -> Self {
        Self(0)
    }

    /// Every tag except [`Feature::AllowMultipleLineBreaks`].
    pub fn standard() -> Self {
        Self::all().without(Feature::AllowMultipleLineBreaks)
    }

    /// Every tag.
    pub fn all() -> Self {
        Feature::ALL.into_iter().collect()
    }

    pub fn contains(self, feature: Feature) -> bool {
        self.0 & feature.bit() != 0
    }

    #[must_use]
    pub fn with(self, feature: Feature) -> Self {
        Self(self.0 | feature.bit())
    }

    #[must_use]
    pub fn without(self, feature: Feature) -> Self {
        Self(self.0 & !feature.bit())
    }

    #[must_use]
    pub fn union(self, other: FeatureSet) -> Self {
        Self(self.0 | other.0)
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Members in declaration order.
    pub fn iter(self) -> impl Iterator<Item = Feature> {
        Feature::ALL.into_iter().filter(move |f| self.contains(*f))
    }
}

impl Default for FeatureSet {
    fn default() -> Self {
        Self::standard()
    }
}

impl FromIterator<Feature> for FeatureSet {
    fn from_iter<I: IntoIterator<Item = Feature>>(iter: I) -> Self {
        iter.into_iter().fold(Self::empty(), FeatureSet::with)
    }
}

impl From<Feature> for FeatureSet {
    fn from(feature: Feature) -> Self {
        Self::empty().with(feature)
    }
}

impl fmt::Debug for FeatureSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}
