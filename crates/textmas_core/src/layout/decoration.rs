//! Decoration placement rule and symbol palette.

use rand::Rng;

/// Festive filler symbols.
pub const PALETTE: &[&str] = &[
    "✨", "❄️", "🔔", "🎁", "🍬", "🕯️", "🎀", "🧦", "🍪", "🦌", "⛄", "🌟",
];

/// Placement period over `placed + cursor`.
pub const PERIOD: usize = 9;
/// Residue of `placed + cursor` that triggers a decoration.
pub const RESIDUE: usize = 7;
/// Glyphs that must be placed before the first decoration.
pub const WARM_UP: usize = 5;

/// Whether a decoration goes in front of the content glyph at `cursor`.
///
/// `placed` counts every glyph already emitted, decorations included.
pub fn should_insert(placed: usize, cursor: usize) -> bool {
    placed >= WARM_UP && (placed + cursor) % PERIOD == RESIDUE
}

/// Choose a palette symbol uniformly.
pub fn pick<R>(rng: &mut R) -> &'static str
where
    R: Rng + ?Sized,
{
    PALETTE[rng.gen_range(0..PALETTE.len())]
}
