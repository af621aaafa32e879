//! Triangular tree layout.
//!
//! Turns a [`TreeState`] into rows of [`PositionedGlyph`]s: row `n` holds `n`
//! content characters, read left to right and top to bottom from the
//! whitespace-stripped content stream. The [`LayoutStrategy::Decorated`]
//! strategy also interleaves festive filler glyphs at fixed positions.
//!
//! Row shape and content placement depend only on the state. The decorative
//! symbol at each filler position comes from the caller's rng.

pub mod decoration;

use crate::constants::{MAX_ROWS, MIN_STREAM_CHARS};
use crate::models::{PositionedGlyph, TreeRow, TreeState};
use crate::text::strip_whitespace;
use rand::Rng;

/// Layout generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LayoutStrategy {
    /// Content glyphs only.
    Classic,
    /// Content glyphs with decorations interleaved.
    #[default]
    Decorated,
}

impl LayoutStrategy {
    pub fn decorates(self) -> bool {
        matches!(self, Self::Decorated)
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Classic => "classic",
            Self::Decorated => "decorated",
        }
    }
}

/// Build the working content stream for `content`.
///
/// Whitespace is removed, then a non-empty stream shorter than
/// [`MIN_STREAM_CHARS`] is extended with whole copies of itself until it
/// reaches that length. Highlight indices are positions in this stream.
///
/// Positions count Unicode scalar values. Links made by the JavaScript client
/// counted UTF-16 code units instead, so for content containing characters
/// outside the Basic Multilingual Plane (most emoji) those links fill to a
/// different length and their highlight indices land on different glyphs.
pub fn content_stream(content: &str) -> Vec<char> {
    let stripped: Vec<char> = strip_whitespace(content).chars().collect();
    if stripped.is_empty() {
        return stripped;
    }

    let mut stream = stripped.clone();
    while stream.len() < MIN_STREAM_CHARS {
        stream.extend_from_slice(&stripped);
    }
    stream
}

/// Lay out `state` using the thread-local rng for decoration symbols.
pub fn layout(state: &TreeState, strategy: LayoutStrategy) -> Vec<TreeRow> {
    layout_with_rng(state, strategy, &mut rand::thread_rng())
}

/// Lay out `state`, drawing decoration symbols from `rng`.
///
/// # Returns
/// At most [`MAX_ROWS`] rows; empty when the content has no visible
/// characters. Stream characters that do not fit are dropped.
pub fn layout_with_rng<R>(state: &TreeState, strategy: LayoutStrategy, rng: &mut R) -> Vec<TreeRow>
where
    R: Rng + ?Sized,
{
    let stream = content_stream(&state.content);
    let mut rows: Vec<TreeRow> = Vec::new();
    let mut cursor = 0usize;
    let mut placed = 0usize;
    let mut slots = 1usize;

    while cursor < stream.len() && rows.len() < MAX_ROWS {
        let mut row = TreeRow::with_capacity(slots);
        for slot in 0..slots {
            let Some(&ch) = stream.get(cursor) else {
                break;
            };
            let inner_slot = slots > 1 && slot + 1 < slots;
            if strategy.decorates() && inner_slot && decoration::should_insert(placed, cursor) {
                row.push(PositionedGlyph::Decoration {
                    symbol: decoration::pick(rng),
                });
                placed += 1;
            }
            row.push(PositionedGlyph::Content {
                ch,
                index: cursor,
                highlighted: state.is_highlighted(cursor),
            });
            placed += 1;
            cursor += 1;
        }
        rows.push(row);
        slots += 1;
    }

    if cursor < stream.len() {
        tracing::debug!(
            dropped = stream.len() - cursor,
            "tree reached {} rows; dropping remaining characters",
            MAX_ROWS
        );
    }
    rows
}
