//! Root crate facade for the Textmas tree library.

pub use textmas_core::{
    codec, config, constants, decode, encode, error, layout, layout_with_rng, models, render,
    render_plain, session, share, text, AppError, CodecError, Config, LayoutStrategy,
    PositionedGlyph, RenderMode, Session, TreeRow, TreeState, DEFAULT_BASE_URL,
    MAX_CONTENT_CHARS, MAX_ROWS, MIN_STREAM_CHARS,
};
