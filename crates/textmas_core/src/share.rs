//! Share-link helpers: placing tokens into URLs and finding them again.

use crate::codec;
use crate::constants::TREE_FRAGMENT_KEY;
use crate::error::AppError;
use crate::models::TreeState;
use percent_encoding::percent_decode_str;

/// Build the share URL for `token` on top of `base_url`.
///
/// Any fragment or query already on `base_url` is dropped.
pub fn share_url(base_url: &str, token: &str) -> String {
    let base = base_url.split(['#', '?']).next().unwrap_or(base_url);
    format!("{}#{}={}", base, TREE_FRAGMENT_KEY, token)
}

/// Extract the tree token from a URL fragment such as `#tree=...`.
///
/// Pairs are form-decoded (`+` becomes a space, `%XX` is unescaped). The
/// first `tree` pair wins; an empty value counts as no token.
pub fn token_from_fragment(fragment: &str) -> Option<String> {
    let fragment = fragment.strip_prefix('#').unwrap_or(fragment);
    fragment
        .split('&')
        .filter(|pair| !pair.is_empty())
        .find_map(|pair| {
            let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
            (form_decode(key) == TREE_FRAGMENT_KEY).then(|| form_decode(value))
        })
        .filter(|token| !token.is_empty())
}

/// Find a token in user input: a full URL, a fragment, `tree=...`, or a bare
/// token.
pub fn extract_token(input: &str) -> Option<String> {
    let input = input.trim();
    if input.is_empty() {
        return None;
    }
    if let Some((_, fragment)) = input.split_once('#') {
        return token_from_fragment(fragment);
    }
    if input.contains('=') {
        return token_from_fragment(input);
    }
    if input.contains("://") {
        return None;
    }
    Some(input.to_string())
}

/// Decode the tree carried by a URL fragment.
///
/// Missing or undecodable tokens yield `None`, the same as having no
/// fragment at all.
pub fn load_tree(fragment: &str) -> Option<TreeState> {
    let token = token_from_fragment(fragment)?;
    match codec::decode(&token) {
        Ok(tree) => Some(tree),
        Err(err) => {
            tracing::warn!("Ignoring undecodable tree token: {}", err);
            None
        }
    }
}

/// Decode the tree referenced by free-form user input.
///
/// # Errors
/// [`AppError::MissingToken`] when no token is present, otherwise
/// [`AppError::Decode`] when the token is malformed.
pub fn decode_input(input: &str) -> Result<TreeState, AppError> {
    let token = extract_token(input).ok_or(AppError::MissingToken)?;
    Ok(codec::decode(&token)?)
}

fn form_decode(raw: &str) -> String {
    let spaced = raw.replace('+', " ");
    percent_decode_str(&spaced).decode_utf8_lossy().into_owned()
}
