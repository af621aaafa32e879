//! Data models shared by the layout engine and the codec.

/// Tree state and positioned glyph models.
pub mod tree;


pub use tree::{PositionedGlyph, TreeRow, TreeState};
