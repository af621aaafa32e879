//! Error types for the tree codec and editing session.
use thiserror::Error;

/// Failure to turn a tree state into a token or a token back into a state.
///
/// Callers treat any decode failure as "no tree data present".
#[derive(Error, Debug)]
pub enum CodecError {
    #[error("Token is empty")]
    Empty,

    #[error("Token is not a compressed tree payload")]
    Decompress,

    #[error("Payload is not valid UTF-16: {0}")]
    Utf16(#[from] std::string::FromUtf16Error),

    #[error("Payload is not a tree state: {0}")]
    Json(#[from] serde_json::Error),
}

/// Top-level application error type.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("No tree token found in input")]
    MissingToken,

    #[error("Tree token could not be decoded: {0}")]
    Decode(#[from] CodecError),

    #[error("Cannot {action} while {phase}")]
    InvalidTransition {
        action: &'static str,
        phase: &'static str,
    },
}
