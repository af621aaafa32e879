//! Shared constants used across Textmas crates.

/// Maximum number of characters kept from the editor's message field.
pub const MAX_CONTENT_CHARS: usize = 500;

/// Minimum working-stream length; shorter messages are repeated up to it.
pub const MIN_STREAM_CHARS: usize = 55;

/// Upper bound on rows produced by the layout.
pub const MAX_ROWS: usize = 50;

/// Topper shown when the stored topper is empty.
pub const DEFAULT_TOPPER: &str = "⭐";

/// Message a fresh editor starts with.
pub const DEFAULT_CONTENT: &str = "祝你圣诞快乐新年大吉心想事成万事如意平安喜乐";

/// Style index a fresh editor starts with.
pub const DEFAULT_STYLE_INDEX: i64 = 1;

/// Fragment key carrying the encoded tree token.
pub const TREE_FRAGMENT_KEY: &str = "tree";

/// Default base URL used when building share links.
pub const DEFAULT_BASE_URL: &str = "https://textmas.tree/";

/// Default auto-hide delay after a shake-triggered reveal, in milliseconds.
pub const DEFAULT_REVEAL_DURATION_MS: u64 = 3_000;
