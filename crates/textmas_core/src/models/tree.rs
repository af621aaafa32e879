//! Tree state and the glyphs the layout produces from it.

use crate::constants::{
    DEFAULT_CONTENT, DEFAULT_STYLE_INDEX, DEFAULT_TOPPER, MAX_CONTENT_CHARS,
};
use crate::text::{first_grapheme, truncate_chars};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// Complete, serializable description of one tree.
///
/// Field names on the wire are single letters (`t`, `c`, `h`, `s`); existing
/// share links depend on them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TreeState {
    /// Glyph above the tree. Empty means "use the default at render time".
    #[serde(rename = "t")]
    pub topper: String,
    /// Message arranged into the tree, stored with its whitespace.
    #[serde(rename = "c")]
    pub content: String,
    /// Highlighted positions in the layout's content stream.
    #[serde(rename = "h")]
    pub highlights: BTreeSet<usize>,
    /// Reserved visual variant; carried through untouched.
    #[serde(rename = "s", default, skip_serializing_if = "Option::is_none")]
    pub style_index: Option<i64>,
}

impl TreeState {
    /// Create a state with the given topper and content and no highlights.
    pub fn new(topper: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            topper: topper.into(),
            content: content.into(),
            highlights: BTreeSet::new(),
            style_index: None,
        }
    }

    /// State a fresh editor starts from.
    pub fn starter() -> Self {
        Self::new(DEFAULT_TOPPER, DEFAULT_CONTENT).with_style_index(Some(DEFAULT_STYLE_INDEX))
    }

    /// Topper to display, substituting the default for an empty one.
    pub fn display_topper(&self) -> &str {
        if self.topper.is_empty() {
            DEFAULT_TOPPER
        } else {
            self.topper.as_str()
        }
    }

    pub fn is_highlighted(&self, index: usize) -> bool {
        self.highlights.contains(&index)
    }

    /// Replace the content, truncated to the editor limit.
    ///
    /// Highlights are cleared: their indices point into the previous stream.
    pub fn with_content(self, content: &str) -> Self {
        Self {
            content: truncate_chars(content, MAX_CONTENT_CHARS).to_string(),
            highlights: BTreeSet::new(),
            ..self
        }
    }

    /// Replace the topper with the first grapheme cluster of `topper`.
    pub fn with_topper(self, topper: &str) -> Self {
        Self {
            topper: first_grapheme(topper).to_string(),
            ..self
        }
    }

    pub fn with_style_index(self, style_index: Option<i64>) -> Self {
        Self {
            style_index,
            ..self
        }
    }

    /// Add `index` to the highlights, or remove it when already present.
    pub fn with_highlight_toggled(mut self, index: usize) -> Self {
        if !self.highlights.remove(&index) {
            self.highlights.insert(index);
        }
        self
    }

    pub fn with_highlights<I>(self, highlights: I) -> Self
    where
        I: IntoIterator<Item = usize>,
    {
        Self {
            highlights: highlights.into_iter().collect(),
            ..self
        }
    }
}

/// One row of the laid-out tree.
pub type TreeRow = Vec<PositionedGlyph>;

/// A glyph placed by the layout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PositionedGlyph {
    /// A character from the content stream.
    Content {
        ch: char,
        /// Cursor position in the content stream.
        index: usize,
        highlighted: bool,
    },
    /// Filler symbol; has no index and is never highlighted.
    Decoration { symbol: &'static str },
}

impl PositionedGlyph {
    /// Content-stream index, or `None` for decorations.
    pub fn index(&self) -> Option<usize> {
        match self {
            Self::Content { index, .. } => Some(*index),
            Self::Decoration { .. } => None,
        }
    }

    pub fn is_highlighted(&self) -> bool {
        matches!(
            self,
            Self::Content {
                highlighted: true,
                ..
            }
        )
    }

    pub fn is_decoration(&self) -> bool {
        matches!(self, Self::Decoration { .. })
    }
}

impl fmt::Display for PositionedGlyph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Content { ch, .. } => write!(f, "{}", ch),
            Self::Decoration { symbol } => f.write_str(symbol),
        }
    }
}
