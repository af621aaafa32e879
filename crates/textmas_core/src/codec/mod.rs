//! Tree state token codec.
//!
//! A token is the JSON form of a [`TreeState`] compressed with the
//! `lz-string` URI-component scheme, so it can sit in a URL fragment without
//! further escaping. Links produced by older clients sometimes carry the
//! token percent-encoded a second time; [`decode`] retries once after
//! unescaping.


use crate::error::CodecError;
use crate::models::TreeState;
use percent_encoding::percent_decode_str;

/// Encode `state` into a URL-safe token.
///
/// Identical states always produce identical tokens.
pub fn encode(state: &TreeState) -> Result<String, CodecError> {
    let json = serde_json::to_string(state)?;
    let token = lz_str::compress_to_encoded_uri_component(json.as_str());
    tracing::debug!(
        json_len = json.len(),
        token_len = token.len(),
        "encoded tree token"
    );
    Ok(token)
}

/// Decode a token produced by [`encode`].
///
/// # Errors
/// Returns a [`CodecError`] when neither the token nor its percent-decoded
/// form holds a tree state.
pub fn decode(token: &str) -> Result<TreeState, CodecError> {
    if token.is_empty() {
        return Err(CodecError::Empty);
    }

    let first_error = match decode_payload(token) {
        Ok(state) => return Ok(state),
        Err(err) => err,
    };

    let unescaped = match percent_decode_str(token).decode_utf8() {
        Ok(unescaped) if unescaped != token => unescaped,
        _ => return Err(first_error),
    };
    tracing::debug!("tree token failed to decode ({}); retrying unescaped", first_error);
    decode_payload(&unescaped)
}

fn decode_payload(token: &str) -> Result<TreeState, CodecError> {
    // Form decoding turns `+` into a space; `+` is part of the token alphabet.
    let token = token.replace(' ', "+");
    let wide = lz_str::decompress_from_encoded_uri_component(token.as_str())
        .filter(|wide| !wide.is_empty())
        .ok_or(CodecError::Decompress)?;
    let json = String::from_utf16(&wide)?;
    Ok(serde_json::from_str(&json)?)
}
