//! Plain-text rendering of a laid-out tree.

use crate::models::{PositionedGlyph, TreeRow, TreeState};
use unicode_width::UnicodeWidthStr;

/// Terminal columns each glyph occupies.
const CELL_WIDTH: usize = 2;
/// Stand-in for content glyphs hidden by a reveal.
const DIMMED_GLYPH: &str = "·";
const TRUNK: &str = "##";
const TRUNK_HEIGHT: usize = 2;

/// How highlighted glyphs are shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RenderMode {
    /// Every glyph as-is; highlights stay hidden.
    #[default]
    Normal,
    /// Highlighted glyphs and decorations as-is, other content dimmed.
    Revealed,
    /// Highlighted glyphs bracketed, for picking highlights.
    Marking,
}

/// Render `rows` for `tree` as centered lines of text.
///
/// The topper line uses the default glyph when the stored topper is empty.
/// Rows are centered by display width; trailing spaces are trimmed.
pub fn render_plain(tree: &TreeState, rows: &[TreeRow], mode: RenderMode) -> String {
    let cell_width = match mode {
        RenderMode::Marking => CELL_WIDTH + 2,
        RenderMode::Normal | RenderMode::Revealed => CELL_WIDTH,
    };
    let body: Vec<String> = rows
        .iter()
        .map(|row| row.iter().map(|glyph| render_cell(glyph, mode)).collect())
        .collect();
    let widest = rows
        .iter()
        .map(|row| row.len() * cell_width)
        .max()
        .unwrap_or(CELL_WIDTH);

    let mut lines = Vec::with_capacity(body.len() + TRUNK_HEIGHT + 1);
    lines.push(centered(tree.display_topper(), widest));
    lines.extend(body.iter().map(|line| centered(line, widest)));
    lines.extend((0..TRUNK_HEIGHT).map(|_| centered(TRUNK, widest)));

    let mut out = lines.join("\n");
    out.push('\n');
    out
}

fn render_cell(glyph: &PositionedGlyph, mode: RenderMode) -> String {
    let text = match (mode, glyph) {
        (RenderMode::Revealed, PositionedGlyph::Content { highlighted: false, .. }) => {
            DIMMED_GLYPH.to_string()
        }
        _ => glyph.to_string(),
    };
    let padded = pad_to(&text, CELL_WIDTH);
    match mode {
        RenderMode::Marking if glyph.is_highlighted() => format!("[{}]", padded),
        RenderMode::Marking => format!(" {} ", padded),
        RenderMode::Normal | RenderMode::Revealed => padded,
    }
}

fn pad_to(text: &str, width: usize) -> String {
    let fill = width.saturating_sub(text.width());
    format!("{}{}", text, " ".repeat(fill))
}

fn centered(text: &str, total_width: usize) -> String {
    let trimmed = text.trim_end();
    let indent = total_width.saturating_sub(trimmed.width()) / 2;
    format!("{}{}", " ".repeat(indent), trimmed)
}
