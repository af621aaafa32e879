//! Core library for Textmas trees (layout, token codec, share links, session).

/// Tree state token encoding and decoding.
pub mod codec;
/// Configuration loading and defaults.
pub mod config;
/// Shared constants.
pub mod constants;
/// Codec and session error types.
pub mod error;
/// Triangular tree layout.
pub mod layout;
/// Tree state and glyph models.
pub mod models;
/// Plain-text tree rendering.
pub mod render;
/// Editing, generated and viewing lifecycle.
pub mod session;
/// Share URL building and token extraction.
pub mod share;
/// Text normalization helpers.
pub mod text;

pub use codec::{decode, encode};
pub use config::Config;
pub use constants::{DEFAULT_BASE_URL, MAX_CONTENT_CHARS, MAX_ROWS, MIN_STREAM_CHARS};
pub use error::{AppError, CodecError};
pub use layout::{layout, layout_with_rng, LayoutStrategy};
pub use models::{PositionedGlyph, TreeRow, TreeState};
pub use render::{render_plain, RenderMode};
pub use session::Session;
