//! Configuration loading from environment variables.

use crate::constants::{DEFAULT_BASE_URL, DEFAULT_REVEAL_DURATION_MS};
use crate::layout::LayoutStrategy;
use std::env;
use std::time::Duration;

/// Environment variable overriding the share-link base URL.
pub const BASE_URL_ENV: &str = "TEXTMAS_BASE_URL";
/// Environment flag toggling decoration glyphs (defaults to on).
pub const DECORATIONS_ENV: &str = "TEXTMAS_DECORATIONS";
/// Environment variable overriding the shake reveal duration in milliseconds.
pub const REVEAL_MS_ENV: &str = "TEXTMAS_REVEAL_MS";

/// Runtime configuration for Textmas.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub base_url: String,
    pub strategy: LayoutStrategy,
    pub reveal_duration: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            strategy: LayoutStrategy::default(),
            reveal_duration: Duration::from_millis(DEFAULT_REVEAL_DURATION_MS),
        }
    }
}

/// Parse a boolean-like environment flag value.
///
/// # Supported Values
/// - Truthy: `1`, `true`, `yes`, `on`
/// - Falsy: `0`, `false`, `no`, `off`, empty string
///
/// Matching is case-insensitive and ignores surrounding whitespace.
///
/// # Returns
/// `Some(bool)` when the value is recognized, otherwise `None`.
pub fn parse_env_flag(value: &str) -> Option<bool> {
    let normalized = value.trim().to_ascii_lowercase();
    match normalized.as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "" | "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

impl Config {
    /// Load configuration from process environment variables.
    ///
    /// # Returns
    /// A populated [`Config`] with defaults applied when env vars are missing.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary key lookup.
    ///
    /// Unparseable values fall back to their defaults with a warning.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let base_url = lookup(BASE_URL_ENV)
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty())
            .unwrap_or(defaults.base_url);

        let strategy = match lookup(DECORATIONS_ENV) {
            Some(raw) => match parse_env_flag(&raw) {
                Some(true) => LayoutStrategy::Decorated,
                Some(false) => LayoutStrategy::Classic,
                None => {
                    tracing::warn!(
                        "Invalid {}='{}'; keeping {:?} layout",
                        DECORATIONS_ENV,
                        raw,
                        defaults.strategy
                    );
                    defaults.strategy
                }
            },
            None => defaults.strategy,
        };

        let reveal_duration = match lookup(REVEAL_MS_ENV) {
            Some(raw) => match raw.trim().parse::<u64>() {
                Ok(ms) => Duration::from_millis(ms),
                Err(err) => {
                    tracing::warn!("Invalid {}='{}': {}", REVEAL_MS_ENV, raw, err);
                    defaults.reveal_duration
                }
            },
            None => defaults.reveal_duration,
        };

        Self {
            base_url,
            strategy,
            reveal_duration,
        }
    }
}
